//! Range checks for gene vectors.

use crate::entity::{Entity, Genes, KILL_FLAG_INDEX, MOVEMENT_GENES};
use genegrid_core::{Error, Result};

/// Validate that an entity's genes are inside their documented ranges
pub fn validate_entity(entity: &Entity) -> Result<()> {
    validate_genes(entity.get_values())
}

/// Movement genes must lie in `[0, 1)`; the kill flag must be `0` or `1`
pub fn validate_genes(genes: &Genes) -> Result<()> {
    for (idx, gene) in genes.iter().take(MOVEMENT_GENES).enumerate() {
        if !(0.0..1.0).contains(gene) {
            return Err(Error::Validation(format!(
                "Movement gene {} is {}, expected a value in [0, 1)",
                idx, gene
            )));
        }
    }

    let flag = genes[KILL_FLAG_INDEX];
    if flag != 0.0 && flag != 1.0 {
        return Err(Error::Validation(format!(
            "Kill flag is {}, expected 0 or 1",
            flag
        )));
    }

    Ok(())
}
