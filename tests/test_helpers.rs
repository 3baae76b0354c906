//! Shared fixtures for integration tests
//!
//! Included with `mod test_helpers;` from each test file, so not every
//! helper is used by every test crate.

#![allow(dead_code)]

use blvm_wire::types::*;

/// Mainnet genesis block header (80 bytes)
pub const GENESIS_HEADER_HEX: &str = concat!(
    "01000000",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "3ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a",
    "29ab5f49",
    "ffff001d",
    "1dac2b7c",
);

/// Mainnet genesis coinbase transaction
pub const GENESIS_COINBASE_HEX: &str = concat!(
    "01000000",
    "01",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "ffffffff",
    "4d",
    "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72",
    "206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73",
    "ffffffff",
    "01",
    "00f2052a01000000",
    "43",
    "4104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef",
    "38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac",
    "00000000",
);

/// Genesis merkle root (= coinbase txid), internal byte order
pub const GENESIS_MERKLE_ROOT_HEX: &str =
    "3ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a";

/// Genesis block hash as displayed by explorers (reversed byte order)
pub const GENESIS_BLOCK_HASH_DISPLAY_HEX: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

/// Full genesis block message payload
pub fn genesis_block_bytes() -> Vec<u8> {
    let mut bytes = hex::decode(GENESIS_HEADER_HEX).unwrap();
    bytes.push(0x01);
    bytes.extend(hex::decode(GENESIS_COINBASE_HEX).unwrap());
    bytes
}

pub fn hash_from_hex(hex_str: &str) -> Hash {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hex::decode(hex_str).unwrap());
    hash
}

/// Create a one-input, one-output transaction distinguished by `tag`
pub fn create_test_tx(tag: u8) -> Transaction {
    Transaction {
        version: 1,
        inputs: vec![TransactionInput {
            prevout: OutPoint {
                hash: [tag; 32],
                index: tag as u32,
            },
            script_sig: vec![0x51, tag],
            sequence: 0xffffffff,
            witness: Witness::new(),
        }],
        outputs: vec![TransactionOutput {
            value: 1000 + tag as i64,
            script_pubkey: vec![0x76, 0xa9, tag],
        }],
        lock_time: 0,
    }
}

/// Header with every field zero except `version`
pub fn zero_header(version: i32) -> BlockHeader {
    BlockHeader {
        version,
        prev_block_hash: [0; 32],
        merkle_root: [0; 32],
        timestamp: 0,
        bits: 0,
        nonce: 0,
    }
}

/// Block whose header commits to its transactions
pub fn create_block(transactions: Vec<Transaction>) -> Block {
    let merkle_root = blvm_wire::calculate_merkle_root(&transactions).unwrap();
    Block::new(
        BlockHeader {
            version: 0x20000000,
            prev_block_hash: [0xab; 32],
            merkle_root,
            timestamp: 1_700_000_000,
            bits: 0x1703a30c,
            nonce: 0xdeadbeef,
        },
        transactions,
    )
}
