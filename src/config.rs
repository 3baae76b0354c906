//! Configuration for blvm-wire
//!
//! Decoding reads counts and lengths from untrusted input. These limits bound
//! how far a decoder will follow such a value before giving up, and how much
//! memory it reserves up front. Settings can be loaded from JSON, environment
//! variables, or passed programmatically.

use crate::error::{Result, WireError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Bounds applied while decoding untrusted bytes
///
/// None of these change the wire format; they only decide when an encoded
/// count is too large to be plausible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum transactions in one block message
    /// Default: 1,000,000. A 4,000,000 weight unit block holds at most
    /// 100,000 of the smallest decodable (10-byte, 40 WU) transactions, so
    /// this only trips on counts no valid block can carry.
    #[serde(default = "default_max_block_transactions")]
    pub max_block_transactions: u64,

    /// Maximum inputs in one transaction
    #[serde(default = "default_max_transaction_inputs")]
    pub max_transaction_inputs: u64,

    /// Maximum outputs in one transaction
    #[serde(default = "default_max_transaction_outputs")]
    pub max_transaction_outputs: u64,

    /// Maximum length of a single script or witness item in bytes
    /// Default: 4,000,000 (whole block weight budget)
    #[serde(default = "default_max_script_length")]
    pub max_script_length: u64,

    /// Maximum witness stack items for one input
    #[serde(default = "default_max_witness_items")]
    pub max_witness_items: u64,

    /// Largest element count reserved ahead of decoding a list
    ///
    /// Lists longer than this still decode; they just grow as elements arrive.
    #[serde(default = "default_max_preallocation")]
    pub max_preallocation: usize,
}

fn default_max_block_transactions() -> u64 {
    1_000_000
}

fn default_max_transaction_inputs() -> u64 {
    1_000_000
}

fn default_max_transaction_outputs() -> u64 {
    1_000_000
}

fn default_max_script_length() -> u64 {
    4_000_000
}

fn default_max_witness_items() -> u64 {
    1_000_000
}

fn default_max_preallocation() -> usize {
    4096
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_block_transactions: default_max_block_transactions(),
            max_transaction_inputs: default_max_transaction_inputs(),
            max_transaction_outputs: default_max_transaction_outputs(),
            max_script_length: default_max_script_length(),
            max_witness_items: default_max_witness_items(),
            max_preallocation: default_max_preallocation(),
        }
    }
}

impl DecodeLimits {
    /// Reject `value` if it is above `limit`
    pub(crate) fn check(&self, what: &'static str, value: u64, limit: u64) -> Result<()> {
        if value > limit {
            tracing::warn!(what, value, limit, "decode limit exceeded");
            return Err(WireError::LimitExceeded { what, value, limit });
        }
        Ok(())
    }

    /// Capacity to reserve for a list announcing `count` elements
    #[inline]
    pub(crate) fn capacity_for(&self, count: u64) -> usize {
        usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(self.max_preallocation)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireConfig {
    #[serde(default)]
    pub decode_limits: DecodeLimits,
}

impl WireConfig {
    /// Parse configuration from a JSON document
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| WireError::Config(Cow::Owned(format!("invalid JSON config: {e}"))))
    }

    /// Serialize configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WireError::Config(Cow::Owned(e.to_string())))
    }

    /// Load configuration from environment variables
    ///
    /// Variables use the `BLVM_WIRE_DECODE_LIMITS_` prefix followed by the
    /// upper-cased field name. Unset or unparsable variables keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WireConfig::from_env`] with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let limits = &mut config.decode_limits;

        let read_u64 = |name: &str, target: &mut u64| {
            if let Some(val) = lookup(&format!("BLVM_WIRE_DECODE_LIMITS_{name}")) {
                match val.trim().parse::<u64>() {
                    Ok(parsed) => *target = parsed,
                    Err(_) => tracing::warn!(name, value = %val, "ignoring unparsable limit"),
                }
            }
        };

        read_u64("MAX_BLOCK_TRANSACTIONS", &mut limits.max_block_transactions);
        read_u64("MAX_TRANSACTION_INPUTS", &mut limits.max_transaction_inputs);
        read_u64("MAX_TRANSACTION_OUTPUTS", &mut limits.max_transaction_outputs);
        read_u64("MAX_SCRIPT_LENGTH", &mut limits.max_script_length);
        read_u64("MAX_WITNESS_ITEMS", &mut limits.max_witness_items);

        let mut prealloc = limits.max_preallocation as u64;
        read_u64("MAX_PREALLOCATION", &mut prealloc);
        limits.max_preallocation = usize::try_from(prealloc).unwrap_or(usize::MAX);

        config
    }
}

/// Global wire configuration instance
static GLOBAL_WIRE_CONFIG: std::sync::OnceLock<WireConfig> = std::sync::OnceLock::new();

/// Initialize global wire configuration
///
/// Call once at startup, before decoding. Fails if a configuration was
/// already installed.
pub fn init_wire_config(config: WireConfig) -> Result<()> {
    GLOBAL_WIRE_CONFIG
        .set(config)
        .map_err(|_| WireError::Config(Cow::Borrowed("wire config already initialized")))
}

/// Get global wire configuration
///
/// Falls back to the environment when no configuration was installed.
pub fn get_wire_config() -> &'static WireConfig {
    GLOBAL_WIRE_CONFIG.get_or_init(WireConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("BLVM_WIRE_DECODE_LIMITS_MAX_BLOCK_TRANSACTIONS", "10"),
            ("BLVM_WIRE_DECODE_LIMITS_MAX_PREALLOCATION", "2"),
            ("BLVM_WIRE_DECODE_LIMITS_MAX_SCRIPT_LENGTH", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = WireConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.decode_limits.max_block_transactions, 10);
        assert_eq!(config.decode_limits.max_preallocation, 2);
        assert_eq!(
            config.decode_limits.max_script_length,
            default_max_script_length()
        );
    }

    #[test]
    fn test_capacity_is_capped() {
        let limits = DecodeLimits::default();
        assert_eq!(limits.capacity_for(3), 3);
        assert_eq!(limits.capacity_for(u64::MAX), limits.max_preallocation);
    }

    #[test]
    fn test_check_rejects_above_limit() {
        let limits = DecodeLimits::default();
        assert!(limits.check("inputs", 5, 5).is_ok());
        assert_eq!(
            limits.check("inputs", 6, 5),
            Err(WireError::LimitExceeded {
                what: "inputs",
                value: 6,
                limit: 5
            })
        );
    }
}
