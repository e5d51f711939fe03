//! Spatial arrangement of entities.
//!
//! A [`Population`] scatters entities over distinct cells of a fixed-size
//! [`Grid`]. It performs no stepping, selection or fitness evaluation.

pub mod grid;
pub mod population;

pub use grid::{Cell, Grid};
pub use population::Population;
