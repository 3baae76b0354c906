//! # blvm-wire
//!
//! Wire encoding of the peer-to-peer `block` message and derivation of a
//! block's transaction merkle root.
//!
//! Everything here is a pure function over immutable inputs: decoding reads
//! from a [`serialization::ByteCursor`], encoding appends to a caller-owned
//! `Vec<u8>`, and the merkle engine reduces a slice of leaf hashes. Message
//! framing (magic, command, length, checksum), networking and block
//! validation live elsewhere.
//!
//! ## Usage
//!
//! ```rust
//! use blvm_wire::serialization::{deserialize_block, serialize_block};
//! use blvm_wire::types::*;
//!
//! let coinbase = Transaction {
//!     version: 1,
//!     inputs: vec![TransactionInput {
//!         prevout: OutPoint::null(),
//!         script_sig: vec![0x51],
//!         sequence: 0xffffffff,
//!         witness: Witness::new(),
//!     }],
//!     outputs: vec![TransactionOutput {
//!         value: 50_0000_0000,
//!         script_pubkey: vec![0x51],
//!     }],
//!     lock_time: 0,
//! };
//! let header = BlockHeader {
//!     version: 1,
//!     prev_block_hash: [0; 32],
//!     merkle_root: coinbase.tx_id(),
//!     timestamp: 0,
//!     bits: 0x207fffff,
//!     nonce: 0,
//! };
//! let block = Block::new(header, vec![coinbase]);
//!
//! let bytes = serialize_block(&block);
//! let decoded = deserialize_block(&bytes).unwrap();
//! assert_eq!(decoded, block);
//! assert!(decoded.has_valid_merkle_root().unwrap());
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod merkle;
pub mod message;
pub mod serialization;
pub mod types;
pub mod verify;

pub use error::{Result, WireError};
pub use merkle::{calculate_merkle_root, compute_merkle_root, compute_merkle_root_with_mutation};
pub use message::{Command, NetworkMessage, PingMessage, PongMessage, VerackMessage};
pub use types::{Block, BlockHash, BlockHeader, Hash, Transaction};
pub use verify::{verify_merkle_root, verify_merkle_roots, MerkleCheck};
