//! CIDR reconciliation engine.
//!
//! Converts inclusive address ranges into minimal CIDR block lists, merges
//! overlapping or adjacent blocks, and groups loose addresses into blocks, for
//! both IPv4 (32-bit) and IPv6 (128-bit) addresses.
//!
//! ```
//! use cidr_reconcile::{merge_cidrs, range_to_cidrs};
//!
//! assert_eq!(range_to_cidrs("10.0.0.0", "10.0.0.3").unwrap(), vec!["10.0.0.0/30"]);
//! let merged = merge_cidrs(Some(&["10.0.0.0/24", "10.0.0.128/25"][..])).unwrap();
//! assert_eq!(merged, Some(vec!["10.0.0.0/24".to_string()]));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, Result};
pub use models::{Address, Family, NetworkBlock};
pub use processing::{
    addresses_to_cidrs, addresses_to_networks, merge_cidrs, merge_networks, range_to_cidrs,
    range_to_networks,
};
