//! Block message wire format serialization/deserialization
//!
//! Layout:
//! - Version (4 bytes, little-endian, signed)
//! - Previous block hash (32 bytes, as stored)
//! - Merkle root (32 bytes, as stored)
//! - Timestamp (4 bytes, little-endian)
//! - Bits (4 bytes, little-endian)
//! - Nonce (4 bytes, little-endian)
//! - Transaction count (VarInt)
//! - Transactions, each in its own wire format
//!
//! There is no length or checksum at this layer; the message envelope
//! carries those.

use super::cursor::ByteCursor;
use super::transaction::{read_transaction, write_transaction, MIN_TRANSACTION_SIZE};
use super::varint::write_varint;
use crate::config::{get_wire_config, DecodeLimits};
use crate::crypto::hash256;
use crate::error::Result;
use crate::types::*;

/// Size of the fixed header prefix
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Append the 80-byte header encoding to `buf`
pub fn write_block_header(buf: &mut Vec<u8>, header: &BlockHeader) {
    buf.extend_from_slice(&header.version.to_le_bytes());
    buf.extend_from_slice(&header.prev_block_hash);
    buf.extend_from_slice(&header.merkle_root);
    buf.extend_from_slice(&header.timestamp.to_le_bytes());
    buf.extend_from_slice(&header.bits.to_le_bytes());
    buf.extend_from_slice(&header.nonce.to_le_bytes());
}

/// Serialize a block header (exactly 80 bytes)
pub fn serialize_block_header(header: &BlockHeader) -> Vec<u8> {
    let mut result = Vec::with_capacity(BLOCK_HEADER_SIZE);
    write_block_header(&mut result, header);
    debug_assert_eq!(result.len(), BLOCK_HEADER_SIZE);
    result
}

/// Read the 80-byte header from the cursor
pub fn read_block_header(cursor: &mut ByteCursor<'_>) -> Result<BlockHeader> {
    Ok(BlockHeader {
        version: cursor.read_i32_le()?,
        prev_block_hash: cursor.read_array()?,
        merkle_root: cursor.read_array()?,
        timestamp: cursor.read_u32_le()?,
        bits: cursor.read_u32_le()?,
        nonce: cursor.read_u32_le()?,
    })
}

/// Deserialize a block header from the first 80 bytes of `data`
pub fn deserialize_block_header(data: &[u8]) -> Result<BlockHeader> {
    read_block_header(&mut ByteCursor::new(data))
}

impl BlockHeader {
    /// `hash256` of the 80-byte header encoding, in internal byte order
    pub fn block_hash(&self) -> BlockHash {
        BlockHash(hash256(&serialize_block_header(self)))
    }
}

/// Append the full block encoding to `buf`
pub fn write_block(buf: &mut Vec<u8>, block: &Block) {
    write_block_header(buf, &block.header);
    write_varint(buf, block.transaction_count());
    for tx in block.transactions.iter() {
        write_transaction(buf, tx);
    }
}

/// Serialize a block message to wire format
///
/// Total: every block has a well-defined encoding.
pub fn serialize_block(block: &Block) -> Vec<u8> {
    let mut result = Vec::with_capacity(BLOCK_HEADER_SIZE + 1);
    write_block(&mut result, block);
    tracing::trace!(
        bytes = result.len(),
        transactions = block.transactions.len(),
        "serialized block"
    );
    result
}

/// Read a block message from the cursor
///
/// Consumes the header, the count, and exactly that many transactions. Bytes
/// after the last transaction stay in the cursor.
pub fn read_block(cursor: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<Block> {
    let start = cursor.position();
    let header = read_block_header(cursor)?;

    let tx_count = cursor.read_varint()?;
    cursor.ensure_items(tx_count, MIN_TRANSACTION_SIZE)?;
    limits.check("block transaction count", tx_count, limits.max_block_transactions)?;

    let mut transactions = Vec::with_capacity(limits.capacity_for(tx_count));
    for _ in 0..tx_count {
        transactions.push(read_transaction(cursor, limits)?);
    }

    tracing::trace!(
        bytes = cursor.position() - start,
        transactions = transactions.len(),
        "deserialized block"
    );

    Ok(Block::new(header, transactions))
}

/// Deserialize a block message with explicit decode limits
pub fn deserialize_block_with_limits(data: &[u8], limits: &DecodeLimits) -> Result<Block> {
    read_block(&mut ByteCursor::new(data), limits)
}

/// Deserialize a block message using the global configuration's limits
///
/// Trailing bytes after the last transaction are ignored.
pub fn deserialize_block(data: &[u8]) -> Result<Block> {
    deserialize_block_with_limits(data, &get_wire_config().decode_limits)
}
