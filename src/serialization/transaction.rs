//! Transaction wire format serialization/deserialization
//!
//! Two layouts share one decoder:
//!
//! Legacy:
//! - Version (4 bytes, little-endian, signed)
//! - Input count (VarInt), inputs
//! - Output count (VarInt), outputs
//! - Lock time (4 bytes, little-endian)
//!
//! Segregated witness: version, marker `0x00`, flag `0x01`, inputs, outputs,
//! one witness stack per input, lock time.
//!
//! The transaction id always hashes the legacy layout, so witness data never
//! changes a block's merkle root.

use super::cursor::ByteCursor;
use super::varint::write_varint;
use crate::config::{get_wire_config, DecodeLimits};
use crate::crypto::hash256;
use crate::error::{Result, WireError};
use crate::types::*;
use std::borrow::Cow;

const WITNESS_MARKER: u8 = 0x00;
const WITNESS_FLAG: u8 = 0x01;

/// Version, two empty counts, lock time
pub(crate) const MIN_TRANSACTION_SIZE: usize = 10;
/// Outpoint, empty script length, sequence
const MIN_INPUT_SIZE: usize = 41;
/// Value, empty script length
const MIN_OUTPUT_SIZE: usize = 9;
/// Empty item length
const MIN_WITNESS_ITEM_SIZE: usize = 1;

fn write_inputs_and_outputs(buf: &mut Vec<u8>, tx: &Transaction) {
    write_varint(buf, tx.inputs.len() as u64);
    for input in &tx.inputs {
        buf.extend_from_slice(&input.prevout.hash);
        buf.extend_from_slice(&input.prevout.index.to_le_bytes());
        write_varint(buf, input.script_sig.len() as u64);
        buf.extend_from_slice(&input.script_sig);
        buf.extend_from_slice(&input.sequence.to_le_bytes());
    }

    write_varint(buf, tx.outputs.len() as u64);
    for output in &tx.outputs {
        buf.extend_from_slice(&output.value.to_le_bytes());
        write_varint(buf, output.script_pubkey.len() as u64);
        buf.extend_from_slice(&output.script_pubkey);
    }
}

/// Append the legacy (witness-stripped) encoding of `tx` to `buf`
pub fn write_transaction_legacy(buf: &mut Vec<u8>, tx: &Transaction) {
    buf.extend_from_slice(&tx.version.to_le_bytes());
    write_inputs_and_outputs(buf, tx);
    buf.extend_from_slice(&tx.lock_time.to_le_bytes());
}

/// Append the full encoding of `tx` to `buf`
///
/// Uses the witness layout only when some input carries witness data.
pub fn write_transaction(buf: &mut Vec<u8>, tx: &Transaction) {
    if !tx.has_witness() {
        write_transaction_legacy(buf, tx);
        return;
    }

    buf.extend_from_slice(&tx.version.to_le_bytes());
    buf.push(WITNESS_MARKER);
    buf.push(WITNESS_FLAG);
    write_inputs_and_outputs(buf, tx);
    for input in &tx.inputs {
        write_varint(buf, input.witness.len() as u64);
        for item in &input.witness {
            write_varint(buf, item.len() as u64);
            buf.extend_from_slice(item);
        }
    }
    buf.extend_from_slice(&tx.lock_time.to_le_bytes());
}

/// Serialize a transaction to wire format (witness layout if it has witness data)
pub fn serialize_transaction(tx: &Transaction) -> Vec<u8> {
    let mut result = Vec::new();
    write_transaction(&mut result, tx);
    result
}

/// Serialize a transaction without witness data
pub fn serialize_transaction_legacy(tx: &Transaction) -> Vec<u8> {
    let mut result = Vec::new();
    write_transaction_legacy(&mut result, tx);
    result
}

/// Transaction id: `hash256` of the legacy encoding, in internal byte order
pub fn calculate_tx_id(tx: &Transaction) -> Hash {
    hash256(&serialize_transaction_legacy(tx))
}

/// Witness transaction id: `hash256` of the full encoding
///
/// Equal to the transaction id for transactions without witness data.
pub fn calculate_wtx_id(tx: &Transaction) -> Hash {
    hash256(&serialize_transaction(tx))
}

impl Transaction {
    /// Transaction id, used as this transaction's merkle leaf
    pub fn tx_id(&self) -> Hash {
        calculate_tx_id(self)
    }

    pub fn wtx_id(&self) -> Hash {
        calculate_wtx_id(self)
    }
}

fn read_script(cursor: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<ByteString> {
    let len = cursor.read_varint()?;
    cursor.ensure_items(len, 1)?;
    limits.check("script length", len, limits.max_script_length)?;
    // Fits in usize: ensure_items proved that many bytes are present
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    Ok(cursor.read_bytes(len)?.to_vec())
}

fn read_input(cursor: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<TransactionInput> {
    let hash = cursor.read_array::<32>()?;
    let index = cursor.read_u32_le()?;
    let script_sig = read_script(cursor, limits)?;
    let sequence = cursor.read_u32_le()?;
    Ok(TransactionInput {
        prevout: OutPoint { hash, index },
        script_sig,
        sequence,
        witness: Witness::new(),
    })
}

fn read_output(cursor: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<TransactionOutput> {
    let value = cursor.read_i64_le()?;
    let script_pubkey = read_script(cursor, limits)?;
    Ok(TransactionOutput {
        value,
        script_pubkey,
    })
}

fn read_witness(cursor: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<Witness> {
    let count = cursor.read_varint()?;
    cursor.ensure_items(count, MIN_WITNESS_ITEM_SIZE)?;
    limits.check("witness item count", count, limits.max_witness_items)?;
    let mut witness = Witness::with_capacity(limits.capacity_for(count));
    for _ in 0..count {
        witness.push(read_script(cursor, limits)?);
    }
    Ok(witness)
}

/// Read one transaction from the cursor, consuming exactly its bytes
pub fn read_transaction(cursor: &mut ByteCursor<'_>, limits: &DecodeLimits) -> Result<Transaction> {
    let version = cursor.read_i32_le()?;

    let segwit = cursor.peek(2) == Some(&[WITNESS_MARKER, WITNESS_FLAG][..]);
    if segwit {
        cursor.read_bytes(2)?;
    }

    let input_count = cursor.read_varint()?;
    cursor.ensure_items(input_count, MIN_INPUT_SIZE)?;
    limits.check("input count", input_count, limits.max_transaction_inputs)?;
    let mut inputs = Vec::with_capacity(limits.capacity_for(input_count));
    for _ in 0..input_count {
        inputs.push(read_input(cursor, limits)?);
    }

    let output_count = cursor.read_varint()?;
    cursor.ensure_items(output_count, MIN_OUTPUT_SIZE)?;
    limits.check("output count", output_count, limits.max_transaction_outputs)?;
    let mut outputs = Vec::with_capacity(limits.capacity_for(output_count));
    for _ in 0..output_count {
        outputs.push(read_output(cursor, limits)?);
    }

    if segwit {
        for input in inputs.iter_mut() {
            input.witness = read_witness(cursor, limits)?;
        }
        if inputs.iter().all(|input| input.witness.is_empty()) {
            return Err(WireError::Malformed(Cow::Borrowed(
                "superfluous witness record",
            )));
        }
    }

    let lock_time = cursor.read_u32_le()?;

    Ok(Transaction {
        version,
        inputs,
        outputs,
        lock_time,
    })
}

/// Deserialize a transaction, returning it with the number of bytes consumed
pub fn deserialize_transaction_with_offset(data: &[u8]) -> Result<(Transaction, usize)> {
    let mut cursor = ByteCursor::new(data);
    let tx = read_transaction(&mut cursor, &get_wire_config().decode_limits)?;
    Ok((tx, cursor.position()))
}

/// Deserialize a transaction from wire format; trailing bytes are ignored
pub fn deserialize_transaction(data: &[u8]) -> Result<Transaction> {
    deserialize_transaction_with_offset(data).map(|(tx, _)| tx)
}
