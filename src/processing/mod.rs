//! CIDR reconciliation logic.
//!
//! - [`splitter`] - Range to minimal blocks
//! - [`merger`] - Merging overlapping/adjacent blocks
//! - [`grouper`] - Grouping loose addresses into runs

mod grouper;
mod merger;
mod splitter;

// Re-export public functions
pub use grouper::{addresses_to_cidrs, addresses_to_networks, group_runs};
pub use merger::{coalesce_ranges, merge_cidrs, merge_networks, merge_ranges};
pub use splitter::{range_to_cidrs, range_to_networks, split_range};
