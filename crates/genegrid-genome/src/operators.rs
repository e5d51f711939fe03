//! Crossover and mutation operators for entities.

use crate::entity::{Entity, Genes, GENE_COUNT, KILL_FLAG_INDEX};
use crate::random::GeneRng;
use genegrid_core::{Error, Result};
use tracing::{debug, trace};

/// Split point between the two direction clusters
pub const CROSSOVER_POINT: usize = 4;

impl Entity {
    /// Single-point crossover at the cluster boundary.
    ///
    /// The first child takes genes `0..4` from `self` and genes `4..9`
    /// (kill flag included) from `other`; the second child is the mirror
    /// image. Both children own fresh gene arrays.
    pub fn crossover(&self, other: &Entity) -> (Entity, Entity) {
        let first = splice(self.get_values(), other.get_values());
        let second = splice(other.get_values(), self.get_values());

        let (first, second) = match (self.name(), other.name()) {
            (Some(a), Some(b)) => (
                Entity::new_from(first).with_name(format!("c_{a}_{b}")),
                Entity::new_from(second).with_name(format!("c_{b}_{a}")),
            ),
            _ => (Entity::new_from(first), Entity::new_from(second)),
        };

        debug!(
            parent_a = self.name().unwrap_or("-"),
            parent_b = other.name().unwrap_or("-"),
            "Crossover produced two children"
        );

        (first, second)
    }

    /// Reroll exactly one gene, chosen uniformly among all nine
    pub fn mutate<R: GeneRng + ?Sized>(&mut self, rng: &mut R) {
        let index = rng.uniform_int(GENE_COUNT);
        self.reroll(index, rng);
    }

    /// Reroll the gene at `index` using the range rule for that position
    pub fn mutate_gene<R: GeneRng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<()> {
        if index >= GENE_COUNT {
            return Err(Error::InvalidArgument(format!(
                "gene index {} out of range 0..{}",
                index, GENE_COUNT
            )));
        }
        self.reroll(index, rng);
        Ok(())
    }

    fn reroll<R: GeneRng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let value = if index == KILL_FLAG_INDEX {
            f64::from(rng.binary())
        } else {
            rng.uniform()
        };

        let gene = &mut self.values_mut()[index];
        trace!(index, old = *gene, new = value, "Mutating gene");
        *gene = value;
    }
}

fn splice(head: &Genes, tail: &Genes) -> Genes {
    let mut child = [0.0; GENE_COUNT];
    child[..CROSSOVER_POINT].copy_from_slice(&head[..CROSSOVER_POINT]);
    child[CROSSOVER_POINT..].copy_from_slice(&tail[CROSSOVER_POINT..]);
    child
}
