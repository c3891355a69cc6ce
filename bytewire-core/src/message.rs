//! The serializable message contract.
//!
//! Every message type implements [`WireMessage`], usually through
//! `#[derive(WireMessage)]`. A message walks its fields in declaration order
//! through a [`WriteCursor`] or [`ReadCursor`]; the provided
//! [`WireMessage::serialize`] and [`WireMessage::deserialize`] wrap that walk
//! with an up-front capacity check so a short buffer is rejected before
//! anything is written or read.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::{Error, Result};

/// Trait for fixed-layout messages that serialize to a flat big-endian buffer.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Default, PartialEq, WireMessage)]
/// struct LightBulbStatus {
///     brightness: u8,
///     color: [u8; 3],
///     flags: u8,
/// }
///
/// let status = LightBulbStatus { brightness: 5, color: [10, 20, 30], flags: 1 };
/// let mut buffer = [0u8; LightBulbStatus::SIZE];
/// assert_eq!(status.serialize(&mut buffer)?, 5);
/// assert_eq!(buffer, [5, 10, 20, 30, 1]);
/// ```
pub trait WireMessage {
    /// Wire size of the message in bytes, the sum of its field sizes.
    const SIZE: usize;

    /// Writes every field in declaration order at the cursor.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if the cursor runs out of space.
    fn write_fields(&self, cursor: &mut WriteCursor<'_>) -> Result<()>;

    /// Reads every field in declaration order from the cursor.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if the cursor runs out of data.
    fn read_fields(&mut self, cursor: &mut ReadCursor<'_>) -> Result<()>;

    /// Serializes the message into the start of `buffer`.
    ///
    /// Returns the number of bytes written, always [`Self::SIZE`].
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if `buffer` is shorter than
    /// [`Self::SIZE`]; the buffer is left untouched.
    fn serialize(&self, buffer: &mut [u8]) -> Result<usize> {
        if buffer.len() < Self::SIZE {
            tracing::debug!(
                message_type = std::any::type_name::<Self>(),
                required = Self::SIZE,
                available = buffer.len(),
                "serialize rejected"
            );
            return Err(Error::buffer_too_short(Self::SIZE, buffer.len()));
        }

        let mut cursor = WriteCursor::new(&mut buffer[..Self::SIZE]);
        self.write_fields(&mut cursor)?;
        let written = cursor.position();
        debug_assert_eq!(written, Self::SIZE);
        tracing::trace!(
            message_type = std::any::type_name::<Self>(),
            bytes = written,
            "serialized"
        );
        Ok(written)
    }

    /// Deserializes the message from the start of `buffer` in place.
    ///
    /// Returns the number of bytes read, always [`Self::SIZE`].
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if `buffer` is shorter than
    /// [`Self::SIZE`]; `self` is left unchanged.
    fn deserialize(&mut self, buffer: &[u8]) -> Result<usize> {
        if buffer.len() < Self::SIZE {
            tracing::debug!(
                message_type = std::any::type_name::<Self>(),
                required = Self::SIZE,
                available = buffer.len(),
                "deserialize rejected"
            );
            return Err(Error::buffer_too_short(Self::SIZE, buffer.len()));
        }

        let mut cursor = ReadCursor::new(&buffer[..Self::SIZE]);
        self.read_fields(&mut cursor)?;
        let read = cursor.position();
        debug_assert_eq!(read, Self::SIZE);
        tracing::trace!(
            message_type = std::any::type_name::<Self>(),
            bytes = read,
            "deserialized"
        );
        Ok(read)
    }

    /// Builds a default instance and deserializes `buffer` into it.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if `buffer` is shorter than
    /// [`Self::SIZE`].
    fn decode(buffer: &[u8]) -> Result<Self>
    where
        Self: Default + Sized,
    {
        let mut message = Self::default();
        message.deserialize(buffer)?;
        Ok(message)
    }
}
