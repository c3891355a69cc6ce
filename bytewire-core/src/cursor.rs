//! Bounds-checked cursors for walking a message's fields.
//!
//! This module provides:
//! - [`WriteCursor`] for serializing fields into a caller-owned buffer
//! - [`ReadCursor`] for deserializing fields from a caller-owned buffer
//!
//! Both cursors convert every field between host and wire order through
//! [`crate::endian`] and advance by the field's width. A field that would run
//! past the end of the buffer fails with [`Error::BufferTooShort`] before any
//! byte is touched.

use crate::endian::{ByteOrder, convert, convert_slice};
use crate::error::{Error, Result};
use crate::message::WireMessage;

/// Cursor that writes wire-order fields into a mutable buffer.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> WriteCursor<'a> {
    /// Creates a cursor positioned at the first byte of `buffer`.
    ///
    /// # Arguments
    /// * `buffer` - Mutable byte buffer to write to
    #[must_use]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Returns the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        self.buffer
    }

    /// Returns the current write position, which is also the number of bytes
    /// written so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the remaining capacity.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns true if no capacity is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `count` bytes remain.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] with the absolute size needed.
    #[inline]
    pub fn ensure(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(Error::buffer_too_short(
                self.position + count,
                self.buffer.len(),
            ));
        }
        Ok(())
    }

    /// Converts a field's host-order bytes to wire order, writes them at the
    /// current position and advances.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if fewer than `N` bytes remain.
    #[inline]
    pub fn write_field<const N: usize>(&mut self, host_bytes: [u8; N]) -> Result<()> {
        self.ensure(N)?;
        self.buffer[self.position..self.position + N].copy_from_slice(&convert(host_bytes));
        self.position += N;
        Ok(())
    }

    /// Writes a runtime-width field in host order, converted to wire order.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if the field does not fit.
    pub fn write_slice(&mut self, host_bytes: &[u8]) -> Result<()> {
        let len = host_bytes.len();
        self.ensure(len)?;
        let dest = &mut self.buffer[self.position..self.position + len];
        convert_slice(ByteOrder::host(), host_bytes, dest)?;
        self.position += len;
        Ok(())
    }

    /// Serializes a nested message at the current position and advances by
    /// the number of bytes it reports.
    ///
    /// # Errors
    /// Propagates the nested message's error.
    pub fn write_message<M: WireMessage + ?Sized>(&mut self, message: &M) -> Result<()> {
        let written = message.serialize(&mut self.buffer[self.position..])?;
        self.position += written;
        Ok(())
    }
}

/// Cursor that reads wire-order fields from a buffer.
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ReadCursor<'a> {
    /// Creates a cursor positioned at the first byte of `buffer`.
    ///
    /// # Arguments
    /// * `buffer` - Byte buffer to read from
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Returns the current read position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns true if every byte has been read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `count` bytes remain.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] with the absolute size needed.
    #[inline]
    pub fn ensure(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(Error::buffer_too_short(
                self.position + count,
                self.buffer.len(),
            ));
        }
        Ok(())
    }

    /// Reads `N` wire-order bytes at the current position, converts them to
    /// host order and advances.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if fewer than `N` bytes remain.
    #[inline]
    pub fn read_field<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut wire = [0u8; N];
        wire.copy_from_slice(&self.buffer[self.position..self.position + N]);
        self.position += N;
        Ok(convert(wire))
    }

    /// Reads a runtime-width field into `host_bytes`, converted to host order.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] if the field runs past the buffer.
    pub fn read_into_slice(&mut self, host_bytes: &mut [u8]) -> Result<()> {
        let len = host_bytes.len();
        self.ensure(len)?;
        let source = &self.buffer[self.position..self.position + len];
        convert_slice(ByteOrder::host(), source, host_bytes)?;
        self.position += len;
        Ok(())
    }

    /// Deserializes a nested message at the current position and advances by
    /// the number of bytes it reports.
    ///
    /// # Errors
    /// Propagates the nested message's error.
    pub fn read_message<M: WireMessage + ?Sized>(&mut self, message: &mut M) -> Result<()> {
        let read = message.deserialize(&self.buffer[self.position..])?;
        self.position += read;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_cursor_basic() {
        let mut buf = [0u8; 16];
        let mut cursor = WriteCursor::new(&mut buf);

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), 16);

        cursor.write_field(0xFFu8.to_ne_bytes()).unwrap();
        assert_eq!(cursor.position(), 1);

        cursor.write_field(0x1234u16.to_ne_bytes()).unwrap();
        assert_eq!(cursor.position(), 3);

        cursor.write_field(0xDEAD_BEEFu32.to_ne_bytes()).unwrap();
        assert_eq!(cursor.position(), 7);

        cursor.write_field(0x0102_0304_0506_0708u64.to_ne_bytes()).unwrap();
        assert_eq!(cursor.position(), 15);
        assert_eq!(cursor.remaining(), 1);

        assert_eq!(
            buf[..15],
            [
                0xFF, 0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF, 1, 2, 3, 4, 5, 6, 7, 8
            ]
        );
    }

    #[test]
    fn test_write_cursor_overflow_leaves_buffer_untouched() {
        let mut buf = [0xAAu8; 3];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write_field([1u8, 2]).unwrap();

        let err = cursor.write_field(0x1234u16.to_ne_bytes()).unwrap_err();
        assert_eq!(err, Error::buffer_too_short(4, 3));
        assert_eq!(cursor.position(), 2);
        assert_eq!(buf[2], 0xAA);
    }

    #[test]
    fn test_write_slice_reverses_odd_width() {
        let mut buf = [0u8; 3];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write_slice(&[1, 2, 3]).unwrap();
        assert!(cursor.is_empty());

        if ByteOrder::host() == ByteOrder::Little {
            assert_eq!(buf, [3, 2, 1]);
        } else {
            assert_eq!(buf, [1, 2, 3]);
        }
    }

    #[test]
    fn test_read_cursor_basic() {
        let data = [0xFF, 0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF];
        let mut cursor = ReadCursor::new(&data);

        assert_eq!(u8::from_ne_bytes(cursor.read_field().unwrap()), 0xFF);
        assert_eq!(u16::from_ne_bytes(cursor.read_field().unwrap()), 0x1234);
        assert_eq!(u32::from_ne_bytes(cursor.read_field().unwrap()), 0xDEAD_BEEF);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_cursor_overflow() {
        let data = [1u8, 2, 3];
        let mut cursor = ReadCursor::new(&data);
        cursor.read_field::<2>().unwrap();

        let err = cursor.read_field::<4>().unwrap_err();
        assert_eq!(err, Error::buffer_too_short(6, 3));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_slice_round_trip() {
        let mut buf = [0u8; 5];
        WriteCursor::new(&mut buf)
            .write_slice(&[1, 2, 3, 4, 5])
            .unwrap();

        let mut out = [0u8; 5];
        let mut cursor = ReadCursor::new(&buf);
        cursor.read_into_slice(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 5]);
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_read_into_slice_overflow() {
        let data = [1u8, 2];
        let mut out = [0u8; 3];
        let mut cursor = ReadCursor::new(&data);
        assert_eq!(
            cursor.read_into_slice(&mut out),
            Err(Error::buffer_too_short(3, 2))
        );
        assert_eq!(out, [0, 0, 0]);
    }
}
