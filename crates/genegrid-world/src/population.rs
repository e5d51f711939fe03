//! Random placement of entities on a grid.

use crate::grid::{Cell, Grid};
use genegrid_core::{Error, PopulationConfig, Position, Result};
use genegrid_genome::{Entity, GeneRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

const EMPTY_MARKER: &str = "nn";
const UNNAMED_MARKER: &str = "E?";

/// Entities scattered over distinct cells of a fixed-size grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    grid: Grid,
}

impl Population {
    /// Place `n_subjects` fresh random entities on distinct cells of a
    /// `rows x cols` grid.
    ///
    /// Cells are drawn uniformly without replacement, so construction always
    /// terminates. Fails with [`Error::CapacityExceeded`] when the grid has
    /// fewer cells than requested entities.
    #[instrument(skip(rng))]
    pub fn new<R: GeneRng + ?Sized>(
        n_subjects: usize,
        dim: (usize, usize),
        rng: &mut R,
    ) -> Result<Self> {
        let (rows, cols) = dim;
        let capacity = Grid::cell_count(rows, cols)?;
        if n_subjects > capacity {
            return Err(Error::CapacityExceeded {
                requested: n_subjects,
                capacity,
            });
        }
        let mut grid = Grid::new(rows, cols)?;

        // Partial Fisher-Yates: the first `n_subjects` slots end up a uniform
        // sample of distinct cell indices
        let mut indices: Vec<usize> = (0..capacity).collect();
        for placed in 0..n_subjects {
            let pick = placed + rng.uniform_int(capacity - placed);
            indices.swap(placed, pick);

            let pos = grid.position_of(indices[placed]);
            let entity = Entity::new_random(rng).with_name(format!("E-{}", n_subjects - placed));
            debug!(%pos, name = entity.name().unwrap_or_default(), "Placing entity");
            grid.insert(pos, entity)?;
        }

        info!(n_subjects, rows, cols, "Population initialized");
        Ok(Self { grid })
    }

    pub fn from_config<R: GeneRng + ?Sized>(config: &PopulationConfig, rng: &mut R) -> Result<Self> {
        Self::new(config.n_subjects, (config.grid.rows, config.grid.cols), rng)
    }

    /// A population with no entities, ready for [`Population::place`]
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
        })
    }

    /// Put an externally built entity, such as a crossover child, into an empty cell
    pub fn place(&mut self, pos: Position, entity: Entity) -> Result<()> {
        self.grid.insert(pos, entity)?;
        debug!(%pos, "Entity placed");
        Ok(())
    }

    pub fn get(&self, pos: Position) -> Option<&Entity> {
        self.grid.get(pos).and_then(Cell::entity)
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Entity> {
        self.grid.get_mut(pos).and_then(Cell::entity_mut)
    }

    /// Number of placed entities
    pub fn len(&self) -> usize {
        self.grid.occupied_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.cols())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Entities with their positions, row by row
    pub fn entities(&self) -> impl Iterator<Item = (Position, &Entity)> + '_ {
        self.grid.occupied()
    }

    pub fn vacant(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.vacant()
    }

    /// Print the grid to stdout
    pub fn show(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |cell: &Cell| match cell {
            Cell::Occupied(entity) => entity.name().unwrap_or(UNNAMED_MARKER).to_string(),
            Cell::Empty => EMPTY_MARKER.to_string(),
        };

        if self.grid.capacity() == 0 {
            return Ok(());
        }

        let labels: Vec<String> = self.grid.iter().map(|(_, cell)| label(cell)).collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0);

        for (row, chunk) in labels.chunks(self.grid.cols()).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line = chunk
                .iter()
                .map(|l| format!("{l:<width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genegrid_core::GridConfig;
    use genegrid_genome::{seeded, validate_entity, KILL_FLAG_INDEX};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_population_creation() {
        let mut rng = seeded(42);
        let population = Population::new(15, (10, 20), &mut rng).unwrap();

        assert_eq!(population.len(), 15);
        assert_eq!(population.dimensions(), (10, 20));
        assert_eq!(population.vacant().count(), 200 - 15);
        for (_, entity) in population.entities() {
            assert!(validate_entity(entity).is_ok());
        }
    }

    #[test]
    fn test_entity_names_count_down() {
        let mut rng = seeded(1);
        let population = Population::new(5, (10, 2), &mut rng).unwrap();

        let names: HashSet<&str> = population.entities().filter_map(|(_, e)| e.name()).collect();
        let expected: HashSet<&str> = ["E-1", "E-2", "E-3", "E-4", "E-5"].into_iter().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_fill_entire_grid() {
        let mut rng = seeded(9);
        let population = Population::new(20, (10, 2), &mut rng).unwrap();
        assert_eq!(population.len(), 20);
        assert_eq!(population.vacant().count(), 0);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut rng = seeded(9);
        let result = Population::new(21, (10, 2), &mut rng);
        assert!(matches!(
            result,
            Err(Error::CapacityExceeded { requested: 21, capacity: 20 })
        ));
    }

    #[test]
    fn test_zero_sized_grid_reports_capacity() {
        let result = Population::new(3, (0, 5), &mut seeded(9));
        assert!(matches!(
            result,
            Err(Error::CapacityExceeded { requested: 3, capacity: 0 })
        ));

        let population = Population::new(0, (0, 5), &mut seeded(9)).unwrap();
        assert!(population.is_empty());
        assert_eq!(population.dimensions(), (0, 5));
        assert_eq!(population.to_string(), "");
    }

    #[test]
    fn test_zero_subjects() {
        let mut rng = seeded(9);
        let population = Population::new(0, (3, 3), &mut rng).unwrap();
        assert!(population.is_empty());
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = Population::new(8, (5, 5), &mut seeded(123)).unwrap();
        let b = Population::new(8, (5, 5), &mut seeded(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_config() {
        let config = PopulationConfig {
            n_subjects: 4,
            grid: GridConfig { rows: 2, cols: 3 },
        };
        let population = Population::from_config(&config, &mut seeded(5)).unwrap();
        assert_eq!(population.len(), 4);
        assert_eq!(population.dimensions(), (2, 3));
    }

    #[test]
    fn test_place_and_get() {
        let mut population = Population::empty(3, 3).unwrap();
        let pos = Position::new(1, 2);
        let entity = Entity::new_from([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 1.0]);

        population.place(pos, entity.clone()).unwrap();
        assert_eq!(population.get(pos), Some(&entity));
        assert!(matches!(population.place(pos, entity.clone()), Err(Error::CellOccupied(_))));
        assert!(population.get(Position::new(0, 0)).is_none());

        population.get_mut(pos).unwrap().mutate_gene(KILL_FLAG_INDEX, &mut seeded(2)).unwrap();
        assert_eq!(population.len(), 1);
    }

    #[test]
    fn test_display() {
        let mut population = Population::empty(2, 3).unwrap();
        let entity = Entity::new_from([0.5; 9]);
        population.place(Position::new(0, 1), entity.clone().with_name("E-1")).unwrap();
        population.place(Position::new(1, 2), entity).unwrap();

        assert_eq!(population.to_string(), "nn  E-1 nn\nnn  nn  E?");
    }

    proptest! {
        #[test]
        fn prop_placement_fills_distinct_cells(
            rows in 1usize..8,
            cols in 1usize..8,
            fill in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let capacity = rows * cols;
            let k = ((capacity as f64) * fill).floor() as usize;
            let population = Population::new(k, (rows, cols), &mut seeded(seed)).unwrap();

            prop_assert_eq!(population.len(), k);
            prop_assert_eq!(population.vacant().count(), capacity - k);
            let positions: HashSet<Position> = population.entities().map(|(p, _)| p).collect();
            prop_assert_eq!(positions.len(), k);
        }

        #[test]
        fn prop_over_capacity_fails(rows in 0usize..8, cols in 0usize..8, extra in 1usize..5) {
            let result = Population::new(rows * cols + extra, (rows, cols), &mut seeded(0));
            let is_capacity_error = matches!(result, Err(Error::CapacityExceeded { .. }));
            prop_assert!(is_capacity_error);
        }
    }
}
