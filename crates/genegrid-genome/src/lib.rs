//! Gene-vector entities and their genetic operators.
//!
//! An [`Entity`] carries nine genes:
//! - genes `0..=3`: first movement cluster (up-left, up, up-right, right)
//! - genes `4..=7`: second movement cluster (down-right, down, down-left, left)
//! - gene `8`: kill flag, either `0` or `1`
//!
//! Randomness always comes from a caller-supplied [`GeneRng`], so seeding a
//! `ChaCha8Rng` makes every operator reproducible.

pub mod random;
pub mod entity;
pub mod operators;
pub mod validation;

pub use random::{seeded, GeneRng};
pub use entity::{Entity, Genes, CLUSTER_SIZE, GENE_COUNT, KILL_FLAG_INDEX, MOVEMENT_GENES};
pub use operators::CROSSOVER_POINT;
pub use validation::{validate_entity, validate_genes};
