//! Block merger.
//!
//! Collapses overlapping, adjacent, nested and duplicate blocks into the
//! smallest equivalent set.

use super::splitter::{into_networks, split_range};
use crate::error::{CidrError, Result};
use crate::models::{AddrBits, Cidr, ClosedRange, Family, NetworkBlock};

/// Sort ranges by last address (then first) and coalesce those that overlap
/// or touch, in one backward sweep.
pub fn coalesce_ranges<T: AddrBits>(mut ranges: Vec<ClosedRange<T>>) -> Vec<ClosedRange<T>> {
    ranges.sort_by(|a, b| a.last.cmp(&b.last).then(a.first.cmp(&b.first)));

    let mut absorbed = vec![false; ranges.len()];
    for i in (1..ranges.len()).rev() {
        let current = ranges[i];
        let previous = &mut ranges[i - 1];
        if previous.touches(&current) {
            previous.last = previous.last.max(current.last);
            previous.first = previous.first.min(current.first);
            absorbed[i] = true;
        }
    }

    ranges
        .into_iter()
        .zip(absorbed)
        .filter_map(|(range, gone)| (!gone).then_some(range))
        .collect()
}

/// Merge closed ranges and re-expand them into minimal blocks.
pub fn merge_ranges<T: AddrBits>(ranges: Vec<ClosedRange<T>>) -> Result<Vec<Cidr<T>>> {
    let input_count = ranges.len();
    let coalesced = coalesce_ranges(ranges);
    log::debug!(
        "merge_ranges: {} ranges coalesced into {}",
        input_count,
        coalesced.len()
    );

    let mut merged = Vec::new();
    for range in coalesced {
        merged.extend(split_range(range.first, range.last)?);
    }
    Ok(merged)
}

fn merge_family<T: AddrBits>(blocks: &[NetworkBlock]) -> Result<Vec<NetworkBlock>> {
    let ranges = blocks
        .iter()
        .map(|block| {
            let addr = T::from_address(block.addr()).ok_or(CidrError::UnsupportedMixedFamily)?;
            ClosedRange::of_block(addr, block.prefix())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(into_networks(merge_ranges(ranges)?))
}

/// Merge a list of network blocks into the smallest equivalent list.
///
/// `None` yields `None` and an empty slice yields an empty list. Every block
/// must be of the same family.
pub fn merge_networks(blocks: Option<&[NetworkBlock]>) -> Result<Option<Vec<NetworkBlock>>> {
    let Some(blocks) = blocks else {
        return Ok(None);
    };
    let Some(first) = blocks.first() else {
        return Ok(Some(Vec::new()));
    };

    let merged = match first.family() {
        Family::V4 => merge_family::<u32>(blocks)?,
        Family::V6 => merge_family::<u128>(blocks)?,
    };
    log::debug!(
        "merge_networks: {} {} blocks -> {}",
        blocks.len(),
        first.family(),
        merged.len()
    );
    Ok(Some(merged))
}

/// Textual form of [`merge_networks`] over `address/prefix` strings.
///
/// # Examples
/// ```
/// use cidr_reconcile::merge_cidrs;
/// let merged = merge_cidrs(Some(&["10.0.0.0/24", "10.0.1.0/24"][..])).unwrap();
/// assert_eq!(merged, Some(vec!["10.0.0.0/23".to_string()]));
/// ```
pub fn merge_cidrs<S: AsRef<str>>(cidrs: Option<&[S]>) -> Result<Option<Vec<String>>> {
    let Some(cidrs) = cidrs else {
        return Ok(None);
    };
    let networks = cidrs
        .iter()
        .map(|cidr| NetworkBlock::parse(cidr.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let merged = merge_networks(Some(networks.as_slice()))?;
    Ok(merged.map(|nets| nets.iter().map(|n| n.to_string()).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(cidrs: &[&str]) -> Vec<String> {
        merge_cidrs(Some(cidrs))
            .expect("merge should succeed")
            .expect("non-empty input gives a result")
    }

    #[test]
    fn test_coalesce_ranges() {
        let ranges = vec![
            ClosedRange::new(20u32, 30).unwrap(),
            ClosedRange::new(0, 9).unwrap(),
            ClosedRange::new(10, 12).unwrap(),
            ClosedRange::new(5, 6).unwrap(),
            ClosedRange::new(40, 50).unwrap(),
            ClosedRange::new(45, 45).unwrap(),
        ];
        let coalesced = coalesce_ranges(ranges);
        assert_eq!(
            coalesced,
            vec![
                ClosedRange::new(0, 12).unwrap(),
                ClosedRange::new(20, 30).unwrap(),
                ClosedRange::new(40, 50).unwrap(),
            ]
        );
    }

    #[test]
    fn test_coalesce_chain_through_wide_range() {
        // sorted by last: [0,1] [5,6] [0,10]; the wide range pulls both in
        let ranges = vec![
            ClosedRange::new(0u32, 10).unwrap(),
            ClosedRange::new(5, 6).unwrap(),
            ClosedRange::new(0, 1).unwrap(),
        ];
        assert_eq!(
            coalesce_ranges(ranges),
            vec![ClosedRange::new(0, 10).unwrap()]
        );
    }

    #[test]
    fn test_coalesce_at_top_of_space() {
        let ranges = vec![
            ClosedRange::single(u32::MAX),
            ClosedRange::new(u32::MAX - 3, u32::MAX).unwrap(),
        ];
        assert_eq!(
            coalesce_ranges(ranges),
            vec![ClosedRange::new(u32::MAX - 3, u32::MAX).unwrap()]
        );
    }

    #[test]
    fn test_merge_adjacent() {
        assert_eq!(merge(&["10.0.0.0/24", "10.0.1.0/24"]), vec!["10.0.0.0/23"]);
    }

    #[test]
    fn test_merge_nested() {
        assert_eq!(merge(&["10.0.0.0/24", "10.0.0.128/25"]), vec!["10.0.0.0/24"]);
        assert_eq!(merge(&["10.0.0.128/25", "10.0.0.0/8"]), vec!["10.0.0.0/8"]);
    }

    #[test]
    fn test_merge_duplicates() {
        assert_eq!(
            merge(&["192.168.0.0/16", "192.168.0.0/16", "192.168.0.0/16"]),
            vec!["192.168.0.0/16"]
        );
    }

    #[test]
    fn test_merge_unaligned_neighbours() {
        // 10.0.1.0/24 + 10.0.2.0/24 cannot form a /23
        assert_eq!(
            merge(&["10.0.2.0/24", "10.0.1.0/24"]),
            vec!["10.0.1.0/24", "10.0.2.0/24"]
        );
    }

    #[test]
    fn test_merge_non_canonical_input() {
        assert_eq!(
            merge(&["10.0.0.77/24", "10.0.1.200/24"]),
            vec!["10.0.0.0/23"]
        );
    }

    #[test]
    fn test_merge_disjoint_sorted_output() {
        assert_eq!(
            merge(&["172.16.0.0/12", "10.0.0.0/8", "192.168.0.0/16"]),
            vec!["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]
        );
    }

    #[test]
    fn test_merge_to_whole_space() {
        assert_eq!(merge(&["0.0.0.0/1", "128.0.0.0/1"]), vec!["0.0.0.0/0"]);
        assert_eq!(merge(&["::/1", "8000::/1"]), vec!["::/0"]);
    }

    #[test]
    fn test_merge_v6() {
        assert_eq!(
            merge(&["2001:db8::/33", "2001:db8:8000::/33", "2001:db8:1::/48"]),
            vec!["2001:db8::/32"]
        );
    }

    #[test]
    fn test_merge_absent_and_empty() {
        assert_eq!(merge_cidrs::<&str>(None).unwrap(), None);
        assert_eq!(merge_cidrs::<&str>(Some(&[])).unwrap(), Some(vec![]));
        assert_eq!(merge_networks(None).unwrap(), None);
        assert_eq!(merge_networks(Some(&[])).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_merge_mixed_family() {
        assert_eq!(
            merge_cidrs(Some(&["10.0.0.0/8", "::/0"][..])).unwrap_err(),
            CidrError::UnsupportedMixedFamily
        );
        assert_eq!(
            merge_cidrs(Some(&["2001:db8::/32", "10.0.0.0/8"][..])).unwrap_err(),
            CidrError::UnsupportedMixedFamily
        );
    }

    #[test]
    fn test_merge_invalid_text() {
        assert_eq!(
            merge_cidrs(Some(&["10.0.0.0/24", "bogus/24"][..])).unwrap_err(),
            CidrError::InvalidAddress("bogus".to_string())
        );
    }
}
