//! Wire encodings for individual message fields.
//!
//! [`WireField`] is implemented for:
//! - fixed-width integers (`u8`..`u64`, `i8`..`i64`) and `f32`/`f64`
//! - [`Blob<N>`], an `N`-byte container converted as a single scalar
//! - fixed arrays `[T; N]` of any wire field, walked in index order
//! - message types (emitted by `#[derive(WireMessage)]`)
//! - packed groups (emitted by [`crate::packed_bits!`])

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::Result;

/// A value that occupies a fixed number of bytes on the wire.
pub trait WireField {
    /// Wire size of the field in bytes.
    const WIRE_SIZE: usize;

    /// Writes the field at the cursor and advances it by [`Self::WIRE_SIZE`].
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferTooShort`] if the field does not fit.
    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<()>;

    /// Reads the field from the cursor and advances it by [`Self::WIRE_SIZE`].
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferTooShort`] if the buffer ends early.
    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<()>;
}

macro_rules! impl_scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireField for $ty {
                const WIRE_SIZE: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
                    cursor.write_field(self.to_ne_bytes())
                }

                #[inline(always)]
                fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<()> {
                    *self = <$ty>::from_ne_bytes(cursor.read_field()?);
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_field!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T: WireField, const N: usize> WireField for [T; N] {
    const WIRE_SIZE: usize = T::WIRE_SIZE * N;

    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        for element in self {
            element.write_to(cursor)?;
        }
        Ok(())
    }

    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<()> {
        for element in self.iter_mut() {
            element.read_from(cursor)?;
        }
        Ok(())
    }
}

/// An `N`-byte container transmitted as one scalar of width `N`.
///
/// Unlike `[u8; N]`, which is written element by element, a blob is
/// byte-order converted as a whole: on a little-endian host its bytes are
/// reversed on the wire. Use it for multi-byte containers whose width is not
/// 1, 2, 4 or 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blob<const N: usize>(pub [u8; N]);

impl<const N: usize> Blob<N> {
    /// Creates a blob from host-order bytes.
    #[must_use]
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Returns the host-order bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> Default for Blob<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> From<[u8; N]> for Blob<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> WireField for Blob<N> {
    const WIRE_SIZE: usize = N;

    #[inline]
    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        cursor.write_field(self.0)
    }

    #[inline]
    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<()> {
        self.0 = cursor.read_field()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::ByteOrder;
    use crate::error::Error;

    fn write<T: WireField>(value: &T) -> Vec<u8> {
        let mut buf = vec![0u8; T::WIRE_SIZE];
        let mut cursor = WriteCursor::new(&mut buf);
        value.write_to(&mut cursor).unwrap();
        assert_eq!(cursor.position(), T::WIRE_SIZE);
        buf
    }

    fn read<T: WireField + Default>(buf: &[u8]) -> T {
        let mut value = T::default();
        let mut cursor = ReadCursor::new(buf);
        value.read_from(&mut cursor).unwrap();
        assert_eq!(cursor.position(), T::WIRE_SIZE);
        value
    }

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(u8::WIRE_SIZE, 1);
        assert_eq!(i16::WIRE_SIZE, 2);
        assert_eq!(u32::WIRE_SIZE, 4);
        assert_eq!(f32::WIRE_SIZE, 4);
        assert_eq!(i64::WIRE_SIZE, 8);
        assert_eq!(f64::WIRE_SIZE, 8);
    }

    #[test]
    fn test_scalars_are_big_endian() {
        assert_eq!(write(&0x1234u16), [0x12, 0x34]);
        assert_eq!(write(&-2i32), [0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(write(&1.0f32), 1.0f32.to_be_bytes());
        assert_eq!(
            write(&0x0102_0304_0506_0708u64),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_scalar_read_back() {
        assert_eq!(read::<u16>(&[0x12, 0x34]), 0x1234);
        assert_eq!(read::<i8>(&[0x80]), i8::MIN);
        assert_eq!(read::<i64>(&(-42i64).to_be_bytes()), -42);
        assert_eq!(read::<f64>(&std::f64::consts::PI.to_be_bytes()), std::f64::consts::PI);
    }

    #[test]
    fn test_array_is_element_wise() {
        let values = [0x0102u16, 0x0304, 0x0506];
        assert_eq!(<[u16; 3]>::WIRE_SIZE, 6);
        assert_eq!(write(&values), [1, 2, 3, 4, 5, 6]);
        assert_eq!(read::<[u16; 3]>(&[1, 2, 3, 4, 5, 6]), values);
    }

    #[test]
    fn test_byte_array_keeps_order() {
        assert_eq!(write(&[1u8, 2, 3]), [1, 2, 3]);
    }

    #[test]
    fn test_blob_is_converted_as_one_scalar() {
        let blob = Blob::new([1u8, 2, 3]);
        let wire = write(&blob);
        if ByteOrder::host() == ByteOrder::Little {
            assert_eq!(wire, [3, 2, 1]);
        } else {
            assert_eq!(wire, [1, 2, 3]);
        }
        assert_eq!(read::<Blob<3>>(&wire), blob);
    }

    #[test]
    fn test_blob_default_is_zeroed() {
        assert_eq!(Blob::<5>::default().as_bytes(), &[0u8; 5]);
        assert_eq!(Blob::from([7u8; 2]), Blob::new([7, 7]));
    }

    #[test]
    fn test_array_overflow_stops_at_failing_element() {
        let values = [1u32, 2];
        let mut buf = [0u8; 6];
        let mut cursor = WriteCursor::new(&mut buf);
        assert_eq!(
            values.write_to(&mut cursor),
            Err(Error::buffer_too_short(8, 6))
        );
        assert_eq!(cursor.position(), 4);
    }
}
