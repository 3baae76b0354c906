//! Transaction merkle root
//!
//! Pairwise `hash256` reduction of the transaction ids in block order. A level
//! with an odd number of nodes pairs its last node with itself.
//!
//! That duplication lets two different transaction lists share a root (a
//! list ending `[.., c]` and one ending `[.., c, c]`, CVE-2012-2459). The
//! root must stay bit-compatible with the network, so the rule is kept and
//! the condition is reported separately by
//! [`compute_merkle_root_with_mutation`].

use crate::crypto::hash256_pair;
use crate::error::{Result, WireError};
use crate::types::{Block, Hash, Transaction};

/// Reduce one level in place, returning whether it held equal adjacent siblings
fn reduce_level(hashes: &mut Vec<Hash>) -> bool {
    let mut mutated = false;
    for pos in (0..hashes.len().saturating_sub(1)).step_by(2) {
        if hashes[pos] == hashes[pos + 1] {
            mutated = true;
        }
    }

    if hashes.len() & 1 != 0 {
        hashes.push(hashes[hashes.len() - 1]);
    }

    for i in 0..hashes.len() / 2 {
        hashes[i] = hash256_pair(&hashes[2 * i], &hashes[2 * i + 1]);
    }
    hashes.truncate(hashes.len() / 2);

    mutated
}

/// Compute the merkle root together with the mutation flag
///
/// The flag is set when any level, before padding, has two identical
/// adjacent siblings. It does not change the root.
pub fn compute_merkle_root_with_mutation(leaves: &[Hash]) -> Result<(Hash, bool)> {
    if leaves.is_empty() {
        return Err(WireError::EmptyLeafSet);
    }

    let mut hashes = Vec::with_capacity(leaves.len() + 1);
    hashes.extend_from_slice(leaves);

    let mut mutated = false;
    while hashes.len() > 1 {
        mutated |= reduce_level(&mut hashes);
    }

    if mutated {
        tracing::debug!(leaves = leaves.len(), "merkle tree has duplicate siblings");
    }

    Ok((hashes[0], mutated))
}

/// Compute the merkle root of an ordered list of leaf hashes
///
/// # Examples
///
/// ```
/// use blvm_wire::merkle::compute_merkle_root;
///
/// let leaf = [7u8; 32];
/// assert_eq!(compute_merkle_root(&[leaf]).unwrap(), leaf);
/// assert!(compute_merkle_root(&[]).is_err());
/// ```
pub fn compute_merkle_root(leaves: &[Hash]) -> Result<Hash> {
    compute_merkle_root_with_mutation(leaves).map(|(root, _)| root)
}

/// Merkle root of a transaction list, using each transaction id as a leaf
pub fn calculate_merkle_root(transactions: &[Transaction]) -> Result<Hash> {
    let leaves: Vec<Hash> = transactions.iter().map(Transaction::tx_id).collect();
    compute_merkle_root(&leaves)
}

impl Block {
    /// Transaction ids in block order
    pub fn tx_ids(&self) -> Vec<Hash> {
        self.transactions.iter().map(Transaction::tx_id).collect()
    }

    /// Recompute the merkle root from this block's transactions
    pub fn compute_merkle_root(&self) -> Result<Hash> {
        compute_merkle_root(&self.tx_ids())
    }

    /// True when the header's merkle root matches the transactions
    pub fn has_valid_merkle_root(&self) -> Result<bool> {
        Ok(self.compute_merkle_root()? == self.header.merkle_root)
    }
}
