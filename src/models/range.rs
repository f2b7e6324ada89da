//! Width-generic closed ranges and prefix blocks used by the processing code.

use super::bits::{broadcast, network, AddrBits};
use super::NetworkBlock;
use crate::error::{CidrError, Result};

/// Inclusive address range `[first, last]` with `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedRange<T> {
    pub first: T,
    pub last: T,
}

impl<T: AddrBits> ClosedRange<T> {
    pub fn new(first: T, last: T) -> Result<Self> {
        if last < first {
            return Err(CidrError::EndBeforeStart {
                start: first.to_address().to_string(),
                end: last.to_address().to_string(),
            });
        }
        Ok(ClosedRange { first, last })
    }

    /// Range covered by a single address.
    pub fn single(addr: T) -> Self {
        ClosedRange {
            first: addr,
            last: addr,
        }
    }

    /// Range covered by the block `addr/prefix`; `addr` need not be canonical.
    pub fn of_block(addr: T, prefix: u8) -> Result<Self> {
        Ok(ClosedRange {
            first: network(addr, prefix)?,
            last: broadcast(addr, prefix)?,
        })
    }

    pub fn contains(&self, addr: T) -> bool {
        self.first <= addr && addr <= self.last
    }

    /// True when `next` overlaps this range or starts right after it.
    ///
    /// A range ending at the last address of the family touches anything that
    /// comes after it in sorted order.
    pub fn touches(&self, next: &Self) -> bool {
        match self.last.checked_next() {
            Some(after) => next.first <= after && self.first <= next.last,
            None => self.first <= next.last,
        }
    }
}

/// Prefix block `addr/prefix` over a raw address integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cidr<T> {
    pub addr: T,
    pub prefix: u8,
}

impl<T: AddrBits> From<Cidr<T>> for NetworkBlock {
    fn from(cidr: Cidr<T>) -> Self {
        NetworkBlock::from_parts(cidr.addr.to_address(), cidr.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_reversed() {
        assert!(ClosedRange::new(1u32, 5).is_ok());
        assert!(ClosedRange::new(5u32, 5).is_ok());
        assert_eq!(
            ClosedRange::new(5u32, 1).unwrap_err(),
            CidrError::EndBeforeStart {
                start: "0.0.0.5".to_string(),
                end: "0.0.0.1".to_string()
            }
        );
    }

    #[test]
    fn test_of_block_normalises() {
        // 10.0.0.77/24
        let range = ClosedRange::of_block(0x0A00_004Du32, 24).unwrap();
        assert_eq!(range.first, 0x0A00_0000);
        assert_eq!(range.last, 0x0A00_00FF);
        assert!(range.contains(0x0A00_004D));
        assert!(!range.contains(0x0A00_0100));
    }

    #[test]
    fn test_of_block_whole_space() {
        let range = ClosedRange::of_block(0u128, 0).unwrap();
        assert_eq!(range.first, 0);
        assert_eq!(range.last, u128::MAX);
    }

    #[test]
    fn test_touches() {
        let a = ClosedRange::new(0u32, 9).unwrap();
        assert!(a.touches(&ClosedRange::new(10, 20).unwrap()), "adjacent");
        assert!(a.touches(&ClosedRange::new(5, 20).unwrap()), "overlap");
        assert!(a.touches(&ClosedRange::new(3, 4).unwrap()), "nested");
        assert!(!a.touches(&ClosedRange::new(11, 20).unwrap()), "gap");

        let top = ClosedRange::new(u32::MAX - 1, u32::MAX).unwrap();
        assert!(top.touches(&ClosedRange::single(u32::MAX)));
    }
}
