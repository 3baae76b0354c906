#![no_main]
use blvm_wire::config::DecodeLimits;
use blvm_wire::serialization::{read_block, serialize_block, ByteCursor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either decode or fail cleanly, never panic
    let limits = DecodeLimits::default();
    let mut cursor = ByteCursor::new(data);
    let Ok(block) = read_block(&mut cursor, &limits) else {
        return;
    };

    // Whatever decoded must re-encode to exactly the bytes consumed
    let consumed = cursor.position();
    assert_eq!(serialize_block(&block), &data[..consumed]);

    // Merkle recomputation only fails for an empty transaction list
    match block.compute_merkle_root() {
        Ok(_) => assert!(!block.transactions.is_empty()),
        Err(e) => assert!(block.transactions.is_empty(), "unexpected error {e}"),
    }
});
