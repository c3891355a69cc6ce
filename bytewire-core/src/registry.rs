//! Compile-time metadata for a closed set of message types.
//!
//! A schema groups message types under a dense identifier enumeration and
//! folds their sizes into a schema-wide maximum. Identifiers are metadata for
//! a transport or dispatch layer; they are never written into a message's own
//! bytes.
//!
//! Schemas are usually declared with [`crate::wire_schema!`].

use std::fmt::Debug;

use crate::message::WireMessage;

/// Raw identifier value reserved as "no message type".
pub const INVALID_ID: u16 = 0xFFFF;

/// Dense identifier enumeration for a schema's message types.
///
/// Values run from 0 to `COUNT - 1` in declaration order. [`Self::INVALID`]
/// and [`Self::COUNT`] exist for range checks and are never transmitted as
/// real identifiers.
pub trait MessageId: Copy + Eq + Debug + 'static {
    /// Number of identifiers; one past the largest valid raw value.
    const COUNT: u16;

    /// Reserved raw value that never names a message type.
    const INVALID: u16 = INVALID_ID;

    /// Returns the raw identifier value.
    fn raw(self) -> u16;

    /// Looks up an identifier by raw value.
    ///
    /// Returns `None` for [`Self::INVALID`] and for anything at or past
    /// [`Self::COUNT`].
    fn from_raw(raw: u16) -> Option<Self>;
}

/// A message type that belongs to schema `S`.
///
/// Membership is per schema: the same message type may appear in several
/// schemas and carry a different identifier in each.
pub trait SchemaMessage<S: Schema>: WireMessage {
    /// Identifier of this message type within `S`.
    const ID: S::Id;
}

/// A closed set of message types.
pub trait Schema {
    /// Identifier enumeration of the schema.
    type Id: MessageId;

    /// Largest wire size of any message type in the schema.
    ///
    /// A single buffer of this size can receive any message of the schema.
    const MAX_MESSAGE_SIZE: usize;

    /// Wire size of the message type named by `id`.
    fn size_of(id: Self::Id) -> usize;
}

/// Folds a list of message sizes into their maximum, 0 for an empty list.
///
/// # Example
/// ```
/// use bytewire_core::registry::max_size;
///
/// const MAX: usize = max_size(&[5, 12, 7]);
/// assert_eq!(MAX, 12);
/// ```
#[must_use]
pub const fn max_size(sizes: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] > max {
            max = sizes[i];
        }
        i += 1;
    }
    max
}

/// Declares a schema over a closed set of message types.
///
/// Generates:
/// - a `#[repr(u16)]` identifier enum implementing [`MessageId`], with one
///   variant per message type numbered densely in declaration order
/// - a [`SchemaMessage`] impl for every listed type, scoped to this schema
/// - a unit schema type implementing [`Schema`], with an inherent
///   `MAX_MESSAGE_SIZE` usable as an array length
/// - a tagged union over the message types with `id`, `size`, `serialize` and
///   `deserialize`
///
/// Every listed type must implement `WireMessage`, `Debug`, `Clone` and
/// `PartialEq`.
///
/// # Example
/// ```ignore
/// wire_schema! {
///     /// Lighting messages.
///     pub schema Lighting {
///         id LightingId;
///         message LightingMessage;
///
///         Bulb => LightBulbStatus,
///         Strip => LedStripStatus,
///     }
/// }
///
/// let mut buffer = AlignedBuffer::<{ Lighting::MAX_MESSAGE_SIZE }>::new();
/// ```
#[macro_export]
macro_rules! wire_schema {
    (
        $(#[$meta:meta])*
        $vis:vis schema $schema:ident {
            id $id:ident;
            message $message:ident;

            $( $(#[$variant_meta:meta])* $variant:ident => $ty:ty ),+ $(,)?
        }
    ) => {
        #[doc = concat!("Message identifiers of [`", stringify!($schema), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        $vis enum $id {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $id {
            /// Every identifier, in raw value order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        const _: () = assert!(
            $id::ALL.len() < $crate::registry::INVALID_ID as usize,
            "schema has too many message types for a u16 identifier"
        );

        impl $crate::registry::MessageId for $id {
            const COUNT: u16 = Self::ALL.len() as u16;

            #[inline]
            fn raw(self) -> u16 {
                self as u16
            }

            #[inline]
            fn from_raw(raw: u16) -> ::core::option::Option<Self> {
                Self::ALL.get(raw as usize).copied()
            }
        }

        impl ::core::convert::From<$id> for u16 {
            fn from(id: $id) -> u16 {
                id as u16
            }
        }

        impl ::core::convert::TryFrom<u16> for $id {
            type Error = $crate::Error;

            fn try_from(raw: u16) -> $crate::Result<Self> {
                <$id as $crate::registry::MessageId>::from_raw(raw)
                    .ok_or($crate::Error::UnknownMessageId { raw })
            }
        }

        $(
            impl $crate::registry::SchemaMessage<$schema> for $ty {
                const ID: $id = $id::$variant;
            }
        )+

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $schema;

        impl $schema {
            /// Largest wire size of any message type in the schema.
            pub const MAX_MESSAGE_SIZE: usize = $crate::registry::max_size(&[
                $(<$ty as $crate::message::WireMessage>::SIZE),+
            ]);
        }

        impl $crate::registry::Schema for $schema {
            type Id = $id;

            const MAX_MESSAGE_SIZE: usize = $crate::registry::max_size(&[
                $(<$ty as $crate::message::WireMessage>::SIZE),+
            ]);

            fn size_of(id: $id) -> usize {
                match id {
                    $($id::$variant => <$ty as $crate::message::WireMessage>::SIZE,)+
                }
            }
        }

        #[doc = concat!("Any message of [`", stringify!($schema), "`].")]
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $message {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $message {
            /// Identifier of the contained message type.
            #[must_use]
            pub fn id(&self) -> $id {
                match self {
                    $(Self::$variant(_) => $id::$variant,)+
                }
            }

            /// Wire size of the contained message.
            #[must_use]
            pub fn size(&self) -> usize {
                match self {
                    $(Self::$variant(_) => <$ty as $crate::message::WireMessage>::SIZE,)+
                }
            }

            /// Serializes the contained message into the start of `buffer`.
            ///
            /// # Errors
            /// Fails if `buffer` is shorter than [`Self::size`].
            pub fn serialize(&self, buffer: &mut [u8]) -> $crate::Result<usize> {
                match self {
                    $(Self::$variant(message) => $crate::message::WireMessage::serialize(message, buffer),)+
                }
            }

            /// Deserializes the start of `buffer` into the contained message.
            ///
            /// # Errors
            /// Fails if `buffer` is shorter than [`Self::size`].
            pub fn deserialize(&mut self, buffer: &[u8]) -> $crate::Result<usize> {
                match self {
                    $(Self::$variant(message) => $crate::message::WireMessage::deserialize(message, buffer),)+
                }
            }
        }

        $(
            impl ::core::convert::From<$ty> for $message {
                fn from(message: $ty) -> Self {
                    Self::$variant(message)
                }
            }
        )+
    };
}
