//! Core wire types for the block message

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit hash, kept in internal (wire) byte order
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Witness stack for a single input
pub type Witness = Vec<ByteString>;

/// Block hash: newtype wrapper for type safety
///
/// Keeps block hashes apart from transaction ids and merkle nodes.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub Hash);

impl BlockHash {
    /// Hash bytes in the reversed order block explorers display
    pub fn to_display_bytes(self) -> Hash {
        let mut reversed = self.0;
        reversed.reverse();
        reversed
    }
}

impl From<Hash> for BlockHash {
    #[inline]
    fn from(hash: Hash) -> Self {
        BlockHash(hash)
    }
}

impl From<BlockHash> for Hash {
    #[inline]
    fn from(hash: BlockHash) -> Self {
        hash.0
    }
}

/// Reference to a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The null outpoint spent by a coinbase input
    pub fn null() -> Self {
        OutPoint {
            hash: [0u8; 32],
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash == [0u8; 32] && self.index == u32::MAX
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
    /// Segregated witness stack; empty for legacy inputs
    #[serde(default)]
    pub witness: Witness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: i64,
    pub script_pubkey: ByteString,
}

/// Transaction as carried inside a block message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// True when any input carries witness data
    pub fn has_witness(&self) -> bool {
        self.inputs.iter().any(|input| !input.witness.is_empty())
    }

    /// True for a single-input transaction spending the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

/// Block header: the fixed 80-byte prefix of a block message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub merkle_root: Hash,
    /// Unix seconds; the u32 width rolls over in 2106
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Block message: header plus its ordered transactions
///
/// The transaction count on the wire is always `transactions.len()`, so the
/// two cannot disagree. Transactions live in a boxed slice since a block is
/// never extended after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Box<[Transaction]>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Block {
            header,
            transactions: transactions.into_boxed_slice(),
        }
    }

    /// Count written as the VarInt prefix of the transaction list
    #[inline]
    pub fn transaction_count(&self) -> u64 {
        self.transactions.len() as u64
    }
}
