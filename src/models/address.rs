//! Address codec.
//!
//! Converts textual IPv4/IPv6 literals to fixed-width integers and back.
//! The two families are never converted into each other.

use crate::error::{CidrError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family: 32-bit IPv4 or 128-bit IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Bit width of addresses in this family.
    pub fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An address as an unsigned integer tagged with its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Address {
    V4(u32),
    V6(u128),
}

impl Address {
    /// Parse an IPv4 or IPv6 literal (e.g. "10.0.0.1", "2001:db8::1").
    pub fn parse(text: &str) -> Result<Address> {
        let text = text.trim();
        text.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| CidrError::InvalidAddress(text.to_string()))
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn width(&self) -> u8 {
        self.family().width()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::V4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address::V6(u128::from(addr))
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(bits) => IpAddr::V4(Ipv4Addr::from(bits)),
            Address::V6(bits) => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }
}

impl FromStr for Address {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v4() {
        assert_eq!(Address::parse("10.0.0.1").unwrap(), Address::V4(0x0A00_0001));
        assert_eq!(Address::parse(" 0.0.0.0 ").unwrap(), Address::V4(0));
        assert_eq!(
            Address::parse("255.255.255.255").unwrap(),
            Address::V4(u32::MAX)
        );
    }

    #[test]
    fn test_parse_v6() {
        assert_eq!(Address::parse("::").unwrap(), Address::V6(0));
        assert_eq!(Address::parse("::1").unwrap(), Address::V6(1));
        assert_eq!(
            Address::parse("2001:db8::").unwrap(),
            Address::V6(0x2001_0db8u128 << 96)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "10.0.0", "10.0.0.256", "abc", "10.0.0.1/24", "1::2::3"] {
            assert_eq!(
                Address::parse(text).unwrap_err(),
                CidrError::InvalidAddress(text.to_string()),
                "{text} should not parse"
            );
        }
    }

    #[test]
    fn test_mapped_v6_stays_wide() {
        let addr = Address::parse("::ffff:10.0.0.1").unwrap();
        assert_eq!(addr.family(), Family::V6);
        assert_eq!(addr.width(), 128);
    }

    #[test]
    fn test_format_round_trip() {
        for text in [
            "0.0.0.0",
            "10.0.0.1",
            "255.255.255.255",
            "::",
            "::1",
            "2001:db8::8a2e:370:7334",
            "fe80::1",
        ] {
            assert_eq!(Address::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_format_canonicalises_v6() {
        let addr = Address::parse("2001:0DB8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(addr.to_string(), "2001:db8::1");
    }

    #[test]
    fn test_ordering_within_family() {
        assert!(Address::parse("10.0.0.1").unwrap() < Address::parse("10.0.0.2").unwrap());
        assert!(Address::parse("9.255.255.255").unwrap() < Address::parse("10.0.0.0").unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let addr = Address::parse("192.168.1.1").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"192.168.1.1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"nope\"").is_err());
    }
}
