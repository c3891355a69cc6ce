//! Packed sub-byte field groups.
//!
//! Several narrow logical fields can share one container integer. On the wire
//! the container is a single opaque scalar; the cursor advances by the
//! container width only. In memory, [`BitField`] descriptors give mask/shift
//! access to each logical field, numbered from the least significant bit.
//!
//! Groups are usually declared with [`crate::packed_bits!`]:
//!
//! ```
//! bytewire_core::packed_bits! {
//!     /// Power and fault flags of a light bulb.
//!     pub struct LightStatus: u8 {
//!         const POWER_ON = 0, 1;
//!         const POWER_LEVEL = 1, 3;
//!         const BROKEN = 4, 1;
//!     }
//! }
//!
//! let status = LightStatus::default()
//!     .with(LightStatus::POWER_ON, 1)
//!     .with(LightStatus::POWER_LEVEL, 5);
//! assert_eq!(status.bits(), 0b0000_1011);
//! assert_eq!(status.get(LightStatus::POWER_LEVEL), 5);
//! ```

use std::marker::PhantomData;

use crate::field::WireField;

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can hold a packed group.
pub trait PackedContainer: Copy + Default + WireField + sealed::Sealed {
    /// Width of the container in bits.
    const BITS: u32;

    /// Widens the container to `u64`.
    fn to_u64(self) -> u64;

    /// Narrows a `u64` to the container, dropping high bits.
    fn from_u64_truncate(bits: u64) -> Self;
}

macro_rules! impl_packed_container {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl PackedContainer for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_u64_truncate(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_packed_container!(u8, u16, u32, u64);

/// Location of one logical field inside a packed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField<C> {
    offset: u32,
    width: u32,
    _container: PhantomData<C>,
}

impl<C: PackedContainer> BitField<C> {
    /// Describes a field of `width` bits starting `offset` bits above the
    /// least significant bit.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`) if the width is zero
    /// or the field extends past the container.
    #[must_use]
    pub const fn new(offset: u32, width: u32) -> Self {
        assert!(width > 0, "bit field must be at least one bit wide");
        assert!(
            offset + width <= C::BITS,
            "bit field extends past its container"
        );
        Self {
            offset,
            width,
            _container: PhantomData,
        }
    }

    /// Bit offset from the least significant bit.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Width in bits.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask of the field's bits, in container position.
    #[must_use]
    pub const fn mask(&self) -> u64 {
        let low = if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        };
        low << self.offset
    }

    /// Extracts the field's value from `container`.
    #[inline]
    #[must_use]
    pub fn get(&self, container: C) -> C {
        C::from_u64_truncate((container.to_u64() & self.mask()) >> self.offset)
    }

    /// Stores `value` into the field; bits above the field width are dropped.
    #[inline]
    pub fn set(&self, container: &mut C, value: C) {
        let mask = self.mask();
        let bits = (container.to_u64() & !mask) | ((value.to_u64() << self.offset) & mask);
        *container = C::from_u64_truncate(bits);
    }
}

/// Declares a packed group newtype over a container integer.
///
/// The generated type stores the raw container, exposes one [`BitField`]
/// constant per logical field, and implements [`WireField`] by writing the
/// container as a single scalar.
///
/// Each field is `offset, width` with bit 0 the least significant bit of the
/// container; declaration order does not affect placement. For a layout that
/// fills from the most significant bit, count offsets down from the top:
/// `const POWER_ON = 7, 1;` in a `u8` puts the flag at `0b1000_0000`.
#[macro_export]
macro_rules! packed_bits {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $container:ty {
            $(
                $(#[$field_meta:meta])*
                const $field:ident = $offset:expr, $width:expr;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name($container);

        impl $name {
            $(
                $(#[$field_meta])*
                pub const $field: $crate::packed::BitField<$container> =
                    $crate::packed::BitField::new($offset, $width);
            )*

            /// Wraps a raw container value.
            #[must_use]
            pub const fn from_bits(bits: $container) -> Self {
                Self(bits)
            }

            /// Returns the raw container value.
            #[must_use]
            pub const fn bits(&self) -> $container {
                self.0
            }

            /// Reads one logical field.
            #[must_use]
            pub fn get(&self, field: $crate::packed::BitField<$container>) -> $container {
                field.get(self.0)
            }

            /// Writes one logical field, truncating `value` to the field width.
            pub fn set(&mut self, field: $crate::packed::BitField<$container>, value: $container) {
                field.set(&mut self.0, value);
            }

            /// Returns a copy with one logical field replaced.
            #[must_use]
            pub fn with(mut self, field: $crate::packed::BitField<$container>, value: $container) -> Self {
                self.set(field, value);
                self
            }
        }

        impl $crate::field::WireField for $name {
            const WIRE_SIZE: usize = <$container as $crate::field::WireField>::WIRE_SIZE;

            #[inline]
            fn write_to(&self, cursor: &mut $crate::cursor::WriteCursor<'_>) -> $crate::Result<()> {
                $crate::field::WireField::write_to(&self.0, cursor)
            }

            #[inline]
            fn read_from(&mut self, cursor: &mut $crate::cursor::ReadCursor<'_>) -> $crate::Result<()> {
                $crate::field::WireField::read_from(&mut self.0, cursor)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{ReadCursor, WriteCursor};

    crate::packed_bits! {
        #[allow(dead_code)]
        struct LightStatus: u8 {
            const POWER_ON = 0, 1;
            const POWER_LEVEL = 1, 3;
            const BROKEN = 4, 1;
        }
    }

    crate::packed_bits! {
        #[allow(dead_code)]
        struct Flags16: u16 {
            const LOW = 0, 4;
            const HIGH = 12, 4;
        }
    }

    #[test]
    fn test_bit_field_mask() {
        let field = BitField::<u8>::new(1, 3);
        assert_eq!(field.mask(), 0b0000_1110);
        assert_eq!(BitField::<u64>::new(0, 64).mask(), u64::MAX);
        assert_eq!(BitField::<u16>::new(15, 1).mask(), 0x8000);
    }

    #[test]
    fn test_get_and_set() {
        let mut status = LightStatus::default();
        status.set(LightStatus::POWER_ON, 1);
        status.set(LightStatus::POWER_LEVEL, 0b101);
        status.set(LightStatus::BROKEN, 1);

        assert_eq!(status.bits(), 0b0001_1011);
        assert_eq!(status.get(LightStatus::POWER_ON), 1);
        assert_eq!(status.get(LightStatus::POWER_LEVEL), 0b101);
        assert_eq!(status.get(LightStatus::BROKEN), 1);

        status.set(LightStatus::POWER_LEVEL, 0);
        assert_eq!(status.bits(), 0b0001_0001);
    }

    crate::packed_bits! {
        #[allow(dead_code)]
        struct HighFirst: u8 {
            const POWER_ON = 7, 1;
            const POWER_LEVEL = 4, 3;
        }
    }

    #[test]
    fn test_offsets_count_from_least_significant_bit() {
        let status = LightStatus::default().with(LightStatus::POWER_ON, 1);
        assert_eq!(status.bits(), 0b0000_0001);

        let status = HighFirst::default().with(HighFirst::POWER_ON, 1);
        assert_eq!(status.bits(), 0b1000_0000);

        let status = status.with(HighFirst::POWER_LEVEL, 0b101);
        assert_eq!(status.bits(), 0b1101_0000);
        assert_eq!(status.get(HighFirst::POWER_LEVEL), 0b101);
    }

    #[test]
    fn test_set_truncates_to_width() {
        let status = LightStatus::default().with(LightStatus::POWER_ON, 0xFF);
        assert_eq!(status.bits(), 0b0000_0001);
        assert_eq!(status.get(LightStatus::POWER_LEVEL), 0);
    }

    #[test]
    fn test_fields_do_not_overlap() {
        let status = LightStatus::from_bits(0xFF);
        assert_eq!(status.get(LightStatus::POWER_ON), 1);
        assert_eq!(status.get(LightStatus::POWER_LEVEL), 0b111);
        assert_eq!(status.get(LightStatus::BROKEN), 1);
    }

    #[test]
    fn test_group_advances_by_container_width() {
        let status = LightStatus::default().with(LightStatus::BROKEN, 1);
        let flags = Flags16::default()
            .with(Flags16::LOW, 0xA)
            .with(Flags16::HIGH, 0x5);
        assert_eq!(LightStatus::WIRE_SIZE, 1);
        assert_eq!(Flags16::WIRE_SIZE, 2);

        let mut buf = [0u8; 3];
        let mut cursor = WriteCursor::new(&mut buf);
        status.write_to(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 1);
        flags.write_to(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 3);
        assert_eq!(buf, [0b0001_0000, 0x50, 0x0A]);

        let mut decoded_status = LightStatus::default();
        let mut decoded_flags = Flags16::default();
        let mut cursor = ReadCursor::new(&buf);
        decoded_status.read_from(&mut cursor).unwrap();
        decoded_flags.read_from(&mut cursor).unwrap();
        assert_eq!(decoded_status, status);
        assert_eq!(decoded_flags, flags);
    }
}
