//! Host/wire byte-order conversion.
//!
//! The wire format is big-endian (network order). Every scalar that crosses
//! the wire goes through [`convert`], which is a verbatim copy on big-endian
//! hosts and a byte reversal on little-endian hosts. The conversion is an
//! involution, so the same function is used for host-to-wire and wire-to-host.

use crate::error::{Error, Result};

/// Returns true if the host stores multi-byte integers most significant byte
/// first.
///
/// Evaluated by laying out `1u32` in native order and checking whether its
/// first byte is zero.
#[inline(always)]
#[must_use]
pub const fn is_big_endian() -> bool {
    1u32.to_ne_bytes()[0] == 0
}

/// Byte order of a host or of the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// Canonical order of every scalar on the wire.
    pub const WIRE: Self = Self::Big;

    /// Byte order of the running host.
    #[inline(always)]
    #[must_use]
    pub const fn host() -> Self {
        if is_big_endian() {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Returns true if a host with this order must reorder bytes to reach
    /// wire order.
    #[inline(always)]
    #[must_use]
    pub const fn needs_swap(self) -> bool {
        !matches!(self, Self::Big)
    }
}

/// Converts `bytes` between host order and wire order on the running host.
///
/// # Example
/// ```
/// use bytewire_core::endian::convert;
///
/// let wire = convert(0x1234u16.to_ne_bytes());
/// assert_eq!(wire, [0x12, 0x34]);
/// assert_eq!(u16::from_ne_bytes(convert(wire)), 0x1234);
/// ```
#[inline(always)]
#[must_use]
pub fn convert<const N: usize>(bytes: [u8; N]) -> [u8; N] {
    convert_for(ByteOrder::host(), bytes)
}

/// Converts `bytes` between `host` order and wire order.
///
/// Widths 2, 4 and 8 use the integer swap of that width; width 1 is copied;
/// any other width is reversed byte by byte.
#[inline]
#[must_use]
pub fn convert_for<const N: usize>(host: ByteOrder, bytes: [u8; N]) -> [u8; N] {
    if !host.needs_swap() {
        return bytes;
    }

    let mut out = [0u8; N];
    match N {
        0 | 1 => out = bytes,
        2 => {
            let mut word = [0u8; 2];
            word.copy_from_slice(&bytes);
            out.copy_from_slice(&u16::from_ne_bytes(word).swap_bytes().to_ne_bytes());
        }
        4 => {
            let mut word = [0u8; 4];
            word.copy_from_slice(&bytes);
            out.copy_from_slice(&u32::from_ne_bytes(word).swap_bytes().to_ne_bytes());
        }
        8 => {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes);
            out.copy_from_slice(&u64::from_ne_bytes(word).swap_bytes().to_ne_bytes());
        }
        _ => reverse_into(&bytes, &mut out),
    }
    out
}

/// Converts a runtime-width field from `source` into `dest`.
///
/// # Errors
/// Returns [`Error::WidthMismatch`] if the slices differ in length.
pub fn convert_slice(host: ByteOrder, source: &[u8], dest: &mut [u8]) -> Result<usize> {
    if source.len() != dest.len() {
        return Err(Error::WidthMismatch {
            source_len: source.len(),
            dest_len: dest.len(),
        });
    }

    if host.needs_swap() {
        reverse_into(source, dest);
    } else {
        dest.copy_from_slice(source);
    }
    Ok(dest.len())
}

#[inline(always)]
fn reverse_into(source: &[u8], dest: &mut [u8]) {
    let size = source.len();
    for (i, byte) in dest.iter_mut().enumerate() {
        *byte = source[size - 1 - i];
    }
}
