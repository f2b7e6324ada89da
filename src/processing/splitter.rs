//! Range splitter.
//!
//! Decomposes an inclusive address range into the minimal ascending list of
//! prefix blocks by bisecting the address space as a binary trie.

use crate::error::{CidrError, Result};
use crate::models::{broadcast, set_bit, AddrBits, Address, Cidr, ClosedRange, NetworkBlock};
use colored::Colorize;

/// Split `[lo, hi]` into the minimal ordered set of blocks covering it exactly.
pub fn split_range<T: AddrBits>(lo: T, hi: T) -> Result<Vec<Cidr<T>>> {
    let range = ClosedRange::new(lo, hi)?;
    let mut cidrs = Vec::new();
    split_into(T::ZERO, 0, range.first, range.last, &mut cidrs)?;
    log::trace!(
        "split_range({}, {}) -> {} blocks",
        lo.to_address(),
        hi.to_address(),
        cidrs.len()
    );
    Ok(cidrs)
}

/// Recursively cover `[lo, hi]`, which must lie inside the block `addr/prefix`.
pub(crate) fn split_into<T: AddrBits>(
    addr: T,
    prefix: u8,
    lo: T,
    hi: T,
    cidrs: &mut Vec<Cidr<T>>,
) -> Result<()> {
    if prefix > T::WIDTH {
        return Err(CidrError::invalid_prefix(prefix, T::WIDTH));
    }

    let bc = broadcast(addr, prefix)?;
    if lo < addr || hi > bc {
        return Err(CidrError::RangeOutOfBounds {
            lo: lo.to_address().to_string(),
            hi: hi.to_address().to_string(),
            network: addr.to_address().to_string(),
            prefix,
            broadcast: bc.to_address().to_string(),
        });
    }

    if lo == addr && hi == bc {
        cidrs.push(Cidr { addr, prefix });
        return Ok(());
    }

    let prefix = prefix + 1;
    let lower_half = addr;
    let upper_half = set_bit(addr, prefix, true)?;
    if hi < upper_half {
        split_into(lower_half, prefix, lo, hi, cidrs)
    } else if lo >= upper_half {
        split_into(upper_half, prefix, lo, hi, cidrs)
    } else {
        split_into(lower_half, prefix, lo, broadcast(lower_half, prefix)?, cidrs)?;
        split_into(upper_half, prefix, upper_half, hi, cidrs)
    }
}

/// Convert an inclusive address range into network blocks.
///
/// Both ends must belong to the same family.
pub fn range_to_networks(start: Address, end: Address) -> Result<Vec<NetworkBlock>> {
    log::debug!(
        "range_to_networks({start}, {end})",
        start = start.to_string().on_blue(),
        end = end.to_string().on_blue()
    );
    match (start, end) {
        (Address::V4(lo), Address::V4(hi)) => Ok(into_networks(split_range(lo, hi)?)),
        (Address::V6(lo), Address::V6(hi)) => Ok(into_networks(split_range(lo, hi)?)),
        _ => Err(CidrError::MismatchedFamily {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

/// Textual form of [`range_to_networks`].
///
/// # Examples
/// ```
/// use cidr_reconcile::range_to_cidrs;
/// let cidrs = range_to_cidrs("10.0.0.1", "10.0.0.4").unwrap();
/// assert_eq!(cidrs, vec!["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/32"]);
/// ```
pub fn range_to_cidrs(start: &str, end: &str) -> Result<Vec<String>> {
    let start = Address::parse(start)?;
    let end = Address::parse(end)?;
    let networks = range_to_networks(start, end)?;
    Ok(networks.iter().map(|n| n.to_string()).collect())
}

pub(crate) fn into_networks<T: AddrBits>(cidrs: Vec<Cidr<T>>) -> Vec<NetworkBlock> {
    cidrs.into_iter().map(NetworkBlock::from).collect()
}
