//! Merkle commitment checks for decoded blocks
//!
//! Compares a header's merkle root against the root recomputed from its
//! transactions. This is the only check made on block contents here; proof of
//! work and transaction validity belong to the consensus layer.

use crate::error::Result;
use crate::merkle::compute_merkle_root_with_mutation;
use crate::types::{Block, Hash};

/// Outcome of comparing a block's claimed and recomputed merkle roots
#[must_use = "Merkle check result must be inspected"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleCheck {
    /// Header root matches and no level has duplicate siblings
    Match,
    /// Header root differs from the recomputed root
    Mismatch { expected: Hash, computed: Hash },
    /// Root matches, but only because of duplicated siblings
    Mutated,
}

impl MerkleCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, MerkleCheck::Match)
    }
}

/// Recompute and compare the merkle root of a single block
pub fn verify_merkle_root(block: &Block) -> Result<MerkleCheck> {
    let (computed, mutated) = compute_merkle_root_with_mutation(&block.tx_ids())?;
    let expected = block.header.merkle_root;

    let check = if computed != expected {
        MerkleCheck::Mismatch { expected, computed }
    } else if mutated {
        MerkleCheck::Mutated
    } else {
        MerkleCheck::Match
    };

    if !check.is_match() {
        tracing::debug!(
            block_hash = ?block.header.block_hash(),
            ?check,
            "merkle root check failed"
        );
    }

    Ok(check)
}

/// Verify many blocks independently, preserving input order
///
/// Blocks share no state, so with the `rayon` feature each block is checked
/// on the thread pool.
pub fn verify_merkle_roots(blocks: &[Block]) -> Vec<Result<MerkleCheck>> {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        blocks.par_iter().map(verify_merkle_root).collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        blocks.iter().map(verify_merkle_root).collect()
    }
}
