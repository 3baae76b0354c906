//! Message payloads keyed by command name
//!
//! The envelope (magic, command, length, checksum) is handled by the framing
//! layer, which hands over the command name and the raw payload. This module
//! maps that pair to a [`NetworkMessage`] and back.

use crate::config::{get_wire_config, DecodeLimits};
use crate::error::{Result, WireError};
use crate::serialization::block::{read_block, write_block};
use crate::serialization::cursor::ByteCursor;
use crate::types::Block;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Command names carried in the message envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Block,
    Verack,
    Ping,
    Pong,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Block, Command::Verack, Command::Ping, Command::Pong];

    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Block => "block",
            Command::Verack => "verack",
            Command::Ping => "ping",
            Command::Pong => "pong",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = WireError;

    /// Parse a command name; NUL padding from the 12-byte envelope field is ignored
    fn from_str(name: &str) -> Result<Self> {
        let trimmed = name.trim_end_matches('\0');
        Command::ALL
            .into_iter()
            .find(|command| command.as_str() == trimmed)
            .ok_or_else(|| WireError::UnknownCommand(Cow::Owned(trimmed.to_string())))
    }
}

/// Reply to `version`; the payload is empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerackMessage;

/// Liveness probe carrying a random nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingMessage {
    pub nonce: u64,
}

impl PingMessage {
    /// The pong answering this ping echoes its nonce
    pub fn pong(&self) -> PongMessage {
        PongMessage { nonce: self.nonce }
    }
}

/// Answer to a ping, echoing the ping's nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongMessage {
    pub nonce: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkMessage {
    Block(Block),
    Verack(VerackMessage),
    Ping(PingMessage),
    Pong(PongMessage),
}

impl NetworkMessage {
    pub fn command(&self) -> Command {
        match self {
            NetworkMessage::Block(_) => Command::Block,
            NetworkMessage::Verack(_) => Command::Verack,
            NetworkMessage::Ping(_) => Command::Ping,
            NetworkMessage::Pong(_) => Command::Pong,
        }
    }

    /// Append the payload encoding to `buf`
    pub fn write_payload(&self, buf: &mut Vec<u8>) {
        match self {
            NetworkMessage::Block(block) => write_block(buf, block),
            NetworkMessage::Verack(_) => {}
            NetworkMessage::Ping(PingMessage { nonce })
            | NetworkMessage::Pong(PongMessage { nonce }) => {
                buf.extend_from_slice(&nonce.to_le_bytes())
            }
        }
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        self.write_payload(&mut payload);
        payload
    }

    /// Decode a payload for a known command with explicit limits
    ///
    /// Bytes beyond the message's own encoding are ignored for every command.
    pub fn decode_payload_with_limits(
        command: Command,
        payload: &[u8],
        limits: &DecodeLimits,
    ) -> Result<Self> {
        let mut cursor = ByteCursor::new(payload);
        let message = match command {
            Command::Block => NetworkMessage::Block(read_block(&mut cursor, limits)?),
            Command::Verack => NetworkMessage::Verack(VerackMessage),
            Command::Ping => NetworkMessage::Ping(PingMessage {
                nonce: cursor.read_u64_le()?,
            }),
            Command::Pong => NetworkMessage::Pong(PongMessage {
                nonce: cursor.read_u64_le()?,
            }),
        };

        if !cursor.is_empty() {
            tracing::trace!(
                %command,
                trailing = cursor.remaining(),
                "ignoring trailing payload bytes"
            );
        }

        Ok(message)
    }

    pub fn decode_payload(command: Command, payload: &[u8]) -> Result<Self> {
        Self::decode_payload_with_limits(command, payload, &get_wire_config().decode_limits)
    }

    /// Decode a payload given the raw command name from the envelope
    pub fn decode(command_name: &str, payload: &[u8]) -> Result<Self> {
        Self::decode_payload(command_name.parse()?, payload)
    }
}

impl From<Block> for NetworkMessage {
    fn from(block: Block) -> Self {
        NetworkMessage::Block(block)
    }
}

impl From<VerackMessage> for NetworkMessage {
    fn from(message: VerackMessage) -> Self {
        NetworkMessage::Verack(message)
    }
}

impl From<PingMessage> for NetworkMessage {
    fn from(message: PingMessage) -> Self {
        NetworkMessage::Ping(message)
    }
}

impl From<PongMessage> for NetworkMessage {
    fn from(message: PongMessage) -> Self {
        NetworkMessage::Pong(message)
    }
}
