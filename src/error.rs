//! Error types for wire decoding and merkle computation

use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum WireError {
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Cannot compute merkle root of an empty leaf set")]
    EmptyLeafSet,

    #[error("Non-canonical VarInt encoding for value {0}")]
    NonCanonicalVarInt(u64),

    #[error("{what} of {value} exceeds limit {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    #[error("Malformed encoding: {0}")]
    Malformed(Cow<'static, str>),

    #[error("Unknown message command: {0}")]
    UnknownCommand(Cow<'static, str>),

    #[error("Configuration error: {0}")]
    Config(Cow<'static, str>),
}

impl WireError {
    /// True for any failure caused by running out of input bytes
    pub fn is_truncation(&self) -> bool {
        matches!(self, WireError::TruncatedInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
