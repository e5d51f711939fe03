//! Configuration types for populations and the demo harness.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl GridConfig {
    /// Number of cells available for placement
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 20 }
    }
}

/// Population construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of entities placed on the grid
    pub n_subjects: usize,
    /// Grid shape
    pub grid: GridConfig,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            n_subjects: 15,
            grid: GridConfig::default(),
        }
    }
}

/// Demo harness configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Population configuration
    pub population: PopulationConfig,
    /// Mutations applied to each crossover child
    pub mutations: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            population: PopulationConfig::default(),
            mutations: 1,
        }
    }
}

impl DemoConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
