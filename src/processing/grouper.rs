//! Contiguity grouper.
//!
//! Turns an unordered list of individual addresses into blocks by finding runs
//! of consecutive addresses.

use super::splitter::{into_networks, split_range};
use crate::error::{CidrError, Result};
use crate::models::{AddrBits, Address, ClosedRange, Family, NetworkBlock};
use itertools::Itertools;

/// Sort addresses and collapse them into maximal runs of consecutive values.
/// Repeated addresses stay inside their run.
pub fn group_runs<T: AddrBits>(mut addrs: Vec<T>) -> Vec<ClosedRange<T>> {
    addrs.sort_unstable();
    addrs
        .into_iter()
        .map(ClosedRange::single)
        .coalesce(|run, next| {
            if run.last == next.first || run.last.checked_next() == Some(next.first) {
                Ok(ClosedRange {
                    first: run.first,
                    last: next.last,
                })
            } else {
                Err((run, next))
            }
        })
        .collect()
}

fn group_family<T: AddrBits>(first: Address, addresses: &[Address]) -> Result<Vec<NetworkBlock>> {
    let addrs = addresses
        .iter()
        .map(|addr| {
            T::from_address(*addr).ok_or_else(|| CidrError::MismatchedFamily {
                start: first.to_string(),
                end: addr.to_string(),
            })
        })
        .collect::<Result<Vec<T>>>()?;

    let runs = group_runs(addrs);
    log::debug!(
        "group: {} addresses in {} runs",
        addresses.len(),
        runs.len()
    );

    let mut cidrs = Vec::new();
    for run in runs {
        cidrs.extend(split_range(run.first, run.last)?);
    }
    Ok(into_networks(cidrs))
}

/// Convert individual addresses into the minimal blocks covering them.
///
/// An empty list yields `None`. All addresses must be of the same family.
pub fn addresses_to_networks(addresses: &[Address]) -> Result<Option<Vec<NetworkBlock>>> {
    let Some(&first) = addresses.first() else {
        return Ok(None);
    };
    let networks = match first.family() {
        Family::V4 => group_family::<u32>(first, addresses)?,
        Family::V6 => group_family::<u128>(first, addresses)?,
    };
    Ok(Some(networks))
}

/// Textual form of [`addresses_to_networks`].
///
/// # Examples
/// ```
/// use cidr_reconcile::addresses_to_cidrs;
/// let cidrs = addresses_to_cidrs(&["10.0.0.2", "10.0.0.1", "10.0.0.3"]).unwrap();
/// assert_eq!(cidrs, Some(vec!["10.0.0.1/32".to_string(), "10.0.0.2/31".to_string()]));
/// ```
pub fn addresses_to_cidrs<S: AsRef<str>>(addresses: &[S]) -> Result<Option<Vec<String>>> {
    let addresses = addresses
        .iter()
        .map(|addr| Address::parse(addr.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let networks = addresses_to_networks(&addresses)?;
    Ok(networks.map(|nets| nets.iter().map(|n| n.to_string()).collect()))
}
