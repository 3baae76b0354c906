//! Hash primitives used by the wire layer
//!
//! Transaction ids, block hashes and merkle nodes are all `hash256`: SHA-256
//! applied twice. Built on the `sha2` crate.

use crate::types::Hash;
use sha2::{Digest, Sha256};

/// Single SHA-256
pub fn sha256(data: &[u8]) -> Hash {
    let mut result = [0u8; 32];
    result.copy_from_slice(&Sha256::digest(data));
    result
}

/// Double SHA-256 (SHA256(SHA256(data)))
pub fn hash256(data: &[u8]) -> Hash {
    sha256(&sha256(data))
}

/// `hash256` of two 32-byte nodes laid side by side
///
/// Uses a stack buffer for the 64-byte concatenation.
#[inline]
pub fn hash256_pair(left: &Hash, right: &Hash) -> Hash {
    let mut combined = [0u8; 64];
    combined[..32].copy_from_slice(left);
    combined[32..].copy_from_slice(right);
    hash256(&combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_input() {
        // SHA-256("") = e3b0c442...b855
        let digest = sha256(&[]);
        assert_eq!(digest[0], 0xe3);
        assert_eq!(digest[1], 0xb0);
        assert_eq!(digest[31], 0x55);
    }

    #[test]
    fn test_hash256_is_sha256_twice() {
        let data = b"block";
        assert_eq!(hash256(data), sha256(&sha256(data)));
    }

    #[test]
    fn test_hash256_pair_is_concatenation() {
        let left = [1u8; 32];
        let right = [2u8; 32];
        let mut concat = left.to_vec();
        concat.extend_from_slice(&right);
        assert_eq!(hash256_pair(&left, &right), hash256(&concat));
        assert_ne!(hash256_pair(&left, &right), hash256_pair(&right, &left));
    }
}
