//! Error type shared by every engine operation.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, CidrError>;

/// Errors returned by the address codec, block arithmetic and the
/// range/merge/group operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid mask size: {prefix} (expected 0..={width})")]
    InvalidPrefix { prefix: String, width: u8 },

    /// Splitter recursion reached a block that does not contain the target
    /// range. Only a logic defect can produce this.
    #[error("{lo}, {hi} out of range for network {network}/{prefix}, broadcast {broadcast}")]
    RangeOutOfBounds {
        lo: String,
        hi: String,
        network: String,
        prefix: u8,
        broadcast: String,
    },

    #[error("end < start: {start} > {end}")]
    EndBeforeStart { start: String, end: String },

    #[error("mismatched IP address types: {start} and {end}")]
    MismatchedFamily { start: String, end: String },

    #[error("cannot merge a list mixing IPv4 and IPv6 networks")]
    UnsupportedMixedFamily,
}

impl CidrError {
    pub(crate) fn invalid_prefix(prefix: impl ToString, width: u8) -> Self {
        CidrError::InvalidPrefix {
            prefix: prefix.to_string(),
            width,
        }
    }
}
