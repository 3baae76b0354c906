#![no_main]
use blvm_wire::merkle::{compute_merkle_root, compute_merkle_root_with_mutation};
use blvm_wire::types::Hash;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let leaves: Vec<Hash> = data
        .chunks_exact(32)
        .map(|chunk| {
            let mut leaf = [0u8; 32];
            leaf.copy_from_slice(chunk);
            leaf
        })
        .collect();

    match compute_merkle_root_with_mutation(&leaves) {
        Ok((root, _)) => {
            assert_eq!(compute_merkle_root(&leaves), Ok(root));
            if leaves.len() == 1 {
                assert_eq!(root, leaves[0]);
            }
        }
        Err(_) => assert!(leaves.is_empty()),
    }
});
