//! Fixed-width address integers and block arithmetic.
//!
//! [`AddrBits`] abstracts over the 32-bit and 128-bit address families so the
//! splitter and merger are written once. Masks are built so that no shift ever
//! reaches the full width of the integer.

use super::Address;
use crate::error::{CidrError, Result};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl};

/// Unsigned integer backing one address family.
pub trait AddrBits:
    Copy
    + Ord
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Bit width of the family (32 or 128).
    const WIDTH: u8;
    const ZERO: Self;
    const ONE: Self;
    /// All bits set, the last address of the family.
    const ONES: Self;

    /// `self + 1`, or `None` past the last address.
    fn checked_next(self) -> Option<Self>;

    /// Wrap into the family-tagged [`Address`].
    fn to_address(self) -> Address;

    /// Extract from an [`Address`] of the same family.
    fn from_address(addr: Address) -> Option<Self>;
}

macro_rules! impl_addr_bits {
    ($t:ty, $variant:ident) => {
        impl AddrBits for $t {
            const WIDTH: u8 = <$t>::BITS as u8;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ONES: Self = <$t>::MAX;

            fn checked_next(self) -> Option<Self> {
                self.checked_add(1)
            }

            fn to_address(self) -> Address {
                Address::$variant(self)
            }

            fn from_address(addr: Address) -> Option<Self> {
                match addr {
                    Address::$variant(bits) => Some(bits),
                    _ => None,
                }
            }
        }
    };
}

impl_addr_bits!(u32, V4);
impl_addr_bits!(u128, V6);

fn check_prefix<T: AddrBits>(prefix: u8) -> Result<()> {
    if prefix > T::WIDTH {
        Err(CidrError::invalid_prefix(prefix, T::WIDTH))
    } else {
        Ok(())
    }
}

/// Mask with the top `prefix` bits set. Callers guarantee `prefix <= WIDTH`.
pub(crate) fn mask_bits<T: AddrBits>(prefix: u8) -> T {
    if prefix == 0 {
        T::ZERO
    } else {
        T::ONES << u32::from(T::WIDTH - prefix.min(T::WIDTH))
    }
}

/// Convert a prefix length to a netmask.
///
/// # Examples
/// ```
/// use cidr_reconcile::models::netmask;
/// assert_eq!(netmask::<u32>(24).unwrap(), 0xFFFF_FF00);
/// assert_eq!(netmask::<u128>(0).unwrap(), 0);
/// ```
pub fn netmask<T: AddrBits>(prefix: u8) -> Result<T> {
    check_prefix::<T>(prefix)?;
    Ok(mask_bits(prefix))
}

/// Network (lowest) address of the block holding `addr`.
pub fn network<T: AddrBits>(addr: T, prefix: u8) -> Result<T> {
    Ok(addr & netmask::<T>(prefix)?)
}

/// Broadcast (highest) address of the block holding `addr`.
pub fn broadcast<T: AddrBits>(addr: T, prefix: u8) -> Result<T> {
    Ok(addr | !netmask::<T>(prefix)?)
}

/// Force the `bit`-th bit, counted from 1 at the most significant end.
pub fn set_bit<T: AddrBits>(addr: T, bit: u8, on: bool) -> Result<T> {
    if bit == 0 || bit > T::WIDTH {
        return Err(CidrError::invalid_prefix(bit, T::WIDTH));
    }
    let mask = T::ONE << u32::from(T::WIDTH - bit);
    Ok(if on { addr | mask } else { addr & !mask })
}
