//! Network block (`address/prefix`) with CIDR text support.

use super::bits::mask_bits;
use super::{Address, Family};
use crate::error::{CidrError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A network block. The address is kept as given, so "10.0.0.7/24" is
/// accepted; [`NetworkBlock::normalized`] clears the host bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkBlock {
    addr: Address,
    prefix: u8,
}

impl NetworkBlock {
    /// Create a block, checking the prefix against the address family.
    pub fn new(addr: Address, prefix: u8) -> Result<NetworkBlock> {
        if prefix > addr.width() {
            return Err(CidrError::invalid_prefix(prefix, addr.width()));
        }
        Ok(NetworkBlock { addr, prefix })
    }

    /// Caller guarantees `prefix <= addr.width()`.
    pub(crate) fn from_parts(addr: Address, prefix: u8) -> NetworkBlock {
        NetworkBlock { addr, prefix }
    }

    /// Parse CIDR text such as "10.0.0.0/24" or "2001:db8::/32".
    pub fn parse(text: &str) -> Result<NetworkBlock> {
        let text = text.trim();
        let (addr, prefix) = text
            .split_once('/')
            .ok_or_else(|| CidrError::InvalidAddress(text.to_string()))?;
        let addr = Address::parse(addr)?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| CidrError::invalid_prefix(prefix, addr.width()))?;
        NetworkBlock::new(addr, prefix)
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Address {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    /// Lowest address of the block.
    pub fn network(&self) -> Address {
        match self.addr {
            Address::V4(bits) => Address::V4(bits & mask_bits::<u32>(self.prefix)),
            Address::V6(bits) => Address::V6(bits & mask_bits::<u128>(self.prefix)),
        }
    }

    /// Highest address of the block.
    pub fn broadcast(&self) -> Address {
        match self.addr {
            Address::V4(bits) => Address::V4(bits | !mask_bits::<u32>(self.prefix)),
            Address::V6(bits) => Address::V6(bits | !mask_bits::<u128>(self.prefix)),
        }
    }

    /// Same block with the host bits cleared.
    pub fn normalized(&self) -> NetworkBlock {
        NetworkBlock {
            addr: self.network(),
            prefix: self.prefix,
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.addr == self.network()
    }

    /// `(first, last)` addresses of the block.
    pub fn to_range(&self) -> (Address, Address) {
        (self.network(), self.broadcast())
    }

    /// True when `addr` is of the same family and inside the block.
    pub fn contains(&self, addr: Address) -> bool {
        addr.family() == self.family() && self.network() <= addr && addr <= self.broadcast()
    }
}

impl FromStr for NetworkBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        NetworkBlock::parse(s)
    }
}

impl fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::parse(&s)
            .map_err(|e| de::Error::custom(format!("invalid CIDR format: {s}: {e}")))
    }
}
