//! Demo harness: scatter random entities on a grid, breed two of them and
//! put the children back.

mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use genegrid_core::{DemoConfig, Position};
use genegrid_genome::{seeded, Entity};
use genegrid_world::Population;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "genegrid-demo")]
#[command(about = "Place gene-vector entities on a grid and run one crossover")]
struct Args {
    /// JSON configuration file; defaults apply to missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of entities to place
    #[arg(long)]
    subjects: Option<usize>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    telemetry::init_telemetry(args.log_json)?;

    let mut config = match &args.config {
        Some(path) => DemoConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(subjects) = args.subjects {
        config.population.n_subjects = subjects;
    }

    info!(
        seed = config.seed,
        n_subjects = config.population.n_subjects,
        rows = config.population.grid.rows,
        cols = config.population.grid.cols,
        "Starting genegrid demo"
    );

    let mut rng = seeded(config.seed);
    let mut population = Population::from_config(&config.population, &mut rng)?;

    println!("Initial population\n");
    population.show();

    let parents: Vec<Entity> = population
        .entities()
        .take(2)
        .map(|(_, entity)| entity.clone())
        .collect();
    let [first, second] = parents.as_slice() else {
        warn!(found = parents.len(), "Crossover needs two entities, stopping");
        return Ok(());
    };

    println!("\nParents\n");
    first.show();
    second.show();

    let (mut child_1, mut child_2) = first.crossover(second);
    for _ in 0..config.mutations {
        child_1.mutate(&mut rng);
        child_2.mutate(&mut rng);
    }

    println!("\nChildren after {} mutation(s)\n", config.mutations);
    child_1.show();
    child_2.show();

    for child in [&child_1, &child_2] {
        info!(
            name = child.name().unwrap_or_default(),
            killer = child.is_killer(),
            next_move = %child.choose_direction(&mut rng),
            "Child ready"
        );
    }

    let free: Vec<Position> = population.vacant().take(2).collect();
    if free.len() < 2 {
        warn!(free = free.len(), "Grid is full, children stay off-grid");
        return Ok(());
    }
    let (rows, cols) = population.dimensions();
    for (pos, child) in free.into_iter().zip([child_1, child_2]) {
        let next = child.next_position(pos, rows, cols, &mut rng);
        info!(
            name = child.name().unwrap_or_default(),
            %pos,
            %next,
            "Placing child"
        );
        population.place(pos, child)?;
    }

    println!("\nPopulation with children\n");
    population.show();

    info!(entities = population.len(), "Demo finished");
    Ok(())
}
