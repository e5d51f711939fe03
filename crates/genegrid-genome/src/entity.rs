//! Entity gene vector and its accessors.

use crate::random::GeneRng;
use crate::validation::validate_genes;
use genegrid_core::{Direction, Error, Position, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genes per entity
pub const GENE_COUNT: usize = 9;
/// Genes encoding movement probabilities
pub const MOVEMENT_GENES: usize = 8;
/// Genes per direction cluster
pub const CLUSTER_SIZE: usize = 4;
/// Position of the kill flag
pub const KILL_FLAG_INDEX: usize = 8;

pub type Genes = [f64; GENE_COUNT];

/// A candidate solution: nine genes and an optional identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    name: Option<String>,
    values: Genes,
}

impl Entity {
    /// Draw eight movement genes uniformly from `[0, 1)` and a kill flag from `{0, 1}`
    pub fn new_random<R: GeneRng + ?Sized>(rng: &mut R) -> Self {
        let mut values = [0.0; GENE_COUNT];
        for gene in values.iter_mut().take(MOVEMENT_GENES) {
            *gene = rng.uniform();
        }
        values[KILL_FLAG_INDEX] = f64::from(rng.binary());

        Self { name: None, values }
    }

    /// Wrap an existing gene vector. Gene ranges are not checked.
    pub fn new_from(values: Genes) -> Self {
        Self { name: None, values }
    }

    /// Like [`Entity::new_from`], rejecting genes outside their ranges
    pub fn try_new_checked(values: Genes) -> Result<Self> {
        validate_genes(&values)?;
        Ok(Self::new_from(values))
    }

    /// Build from an untyped slice, which must hold exactly nine genes
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let values = Genes::try_from(values).map_err(|_| {
            Error::InvalidArgument(format!(
                "expected {} genes, got {}",
                GENE_COUNT,
                values.len()
            ))
        })?;
        Ok(Self::new_from(values))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_values(&self) -> &Genes {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Genes {
        &mut self.values
    }

    /// Genes `0..=3`
    pub fn cluster_one(&self) -> &[f64] {
        &self.values[..CLUSTER_SIZE]
    }

    /// Genes `4..=7`
    pub fn cluster_two(&self) -> &[f64] {
        &self.values[CLUSTER_SIZE..MOVEMENT_GENES]
    }

    pub fn kill_flag(&self) -> u8 {
        u8::from(self.values[KILL_FLAG_INDEX] >= 0.5)
    }

    pub fn is_killer(&self) -> bool {
        self.kill_flag() == 1
    }

    /// Movement genes scaled to sum to one. Falls back to a uniform
    /// distribution when the genes carry no weight.
    pub fn direction_weights(&self) -> [f64; MOVEMENT_GENES] {
        let mut weights = [0.0; MOVEMENT_GENES];
        weights.copy_from_slice(&self.values[..MOVEMENT_GENES]);

        let sum: f64 = weights.iter().sum();
        if sum > 0.0 && sum.is_finite() {
            for w in &mut weights {
                *w /= sum;
            }
        } else {
            weights = [1.0 / MOVEMENT_GENES as f64; MOVEMENT_GENES];
        }

        weights
    }

    /// Sample a movement direction proportionally to the movement genes
    pub fn choose_direction<R: GeneRng + ?Sized>(&self, rng: &mut R) -> Direction {
        let weights = self.direction_weights();
        let roll = rng.uniform();

        let mut cumulative = 0.0;
        // Rounding can leave the last cumulative value just under the roll
        let mut chosen = weights
            .iter()
            .rposition(|&w| w > 0.0)
            .unwrap_or(MOVEMENT_GENES - 1);
        for (index, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if cumulative > roll {
                chosen = index;
                break;
            }
        }

        Direction::from_gene_index(chosen).unwrap_or(Direction::Left)
    }

    /// Cell reached by one sampled move from `from` on a `rows x cols` grid.
    /// A move that would leave the grid keeps the entity where it is.
    pub fn next_position<R: GeneRng + ?Sized>(
        &self,
        from: Position,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Position {
        let direction = self.choose_direction(rng);
        from.offset(direction, rows, cols).unwrap_or(from)
    }

    /// Print the gene vector to stdout
    pub fn show(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        write!(f, "[")?;
        for gene in &self.values[..MOVEMENT_GENES] {
            write!(f, "{gene:.3}, ")?;
        }
        write!(f, "{}]", self.values[KILL_FLAG_INDEX])
    }
}
