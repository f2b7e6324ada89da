//! Domain models for CIDR reconciliation.
//!
//! - [`Address`] and [`Family`] - the address codec
//! - [`AddrBits`] and the block arithmetic functions
//! - [`NetworkBlock`] - an `address/prefix` block
//! - [`ClosedRange`] and [`Cidr`] - width-generic working types

mod address;
mod bits;
mod network;
mod range;

// Re-export public types
pub use address::{Address, Family};
pub use bits::{broadcast, netmask, network, set_bit, AddrBits};
pub use network::NetworkBlock;
pub use range::{Cidr, ClosedRange};
