//! Wire format serialization/deserialization
//!
//! Encoding must match the reference node's byte layout exactly; any
//! difference changes transaction ids and merkle roots.
//!
//! All multi-byte integers are little-endian.

pub mod block;
pub mod cursor;
pub mod transaction;
pub mod varint;

pub use block::{
    deserialize_block, deserialize_block_header, deserialize_block_with_limits, read_block,
    serialize_block, serialize_block_header, write_block, BLOCK_HEADER_SIZE,
};
pub use cursor::ByteCursor;
pub use transaction::{
    calculate_tx_id, calculate_wtx_id, deserialize_transaction, read_transaction,
    serialize_transaction, serialize_transaction_legacy,
};
pub use varint::{decode_varint, encode_varint, write_varint};
