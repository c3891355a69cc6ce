//! Caller-owned receive buffers.
//!
//! The codec never allocates. [`AlignedBuffer`] is a fixed-size, cache-line
//! aligned array a caller can size once for a whole schema:
//!
//! ```ignore
//! let mut buffer = AlignedBuffer::<{ Lighting::MAX_MESSAGE_SIZE }>::new();
//! message.serialize(buffer.as_mut_slice())?;
//! ```

/// Cache line size assumed for buffer alignment.
pub const CACHE_LINE: usize = 64;

/// Cache-line aligned buffer for optimal CPU cache performance.
///
/// # Type Parameters
/// * `N` - Buffer size in bytes
#[repr(C, align(64))]
#[derive(Clone, PartialEq, Eq)]
pub struct AlignedBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> AlignedBuffer<N> {
    /// Creates a new zeroed aligned buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0u8; N] }
    }

    /// Returns the capacity of the buffer in bytes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the buffer as a byte slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the buffer as a mutable byte slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Fills the buffer with zeros.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl<const N: usize> Default for AlignedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for AlignedBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for AlignedBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> std::fmt::Debug for AlignedBuffer<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("capacity", &N)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::WriteCursor;
    use crate::field::WireField;

    #[test]
    fn test_aligned_buffer_creation() {
        let buf: AlignedBuffer<1024> = AlignedBuffer::new();
        assert_eq!(buf.capacity(), 1024);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_aligned_buffer_alignment() {
        let buf: AlignedBuffer<8> = AlignedBuffer::new();
        let ptr = buf.as_slice().as_ptr() as usize;
        assert_eq!(ptr % CACHE_LINE, 0, "Buffer should be 64-byte aligned");
    }

    #[test]
    fn test_aligned_buffer_clear() {
        let mut buf: AlignedBuffer<16> = AlignedBuffer::default();
        buf.as_mut_slice()[3] = 0xAB;
        buf.as_mut()[4] = 0xCD;
        assert_eq!(buf.as_ref()[3..5], [0xAB, 0xCD]);

        buf.clear();
        assert_eq!(buf, AlignedBuffer::new());
    }

    #[test]
    fn test_aligned_buffer_debug() {
        let buf: AlignedBuffer<256> = AlignedBuffer::new();
        let debug_str = format!("{:?}", buf);
        assert!(debug_str.contains("AlignedBuffer"));
        assert!(debug_str.contains("256"));
    }

    #[test]
    fn test_serialize_into_aligned_buffer() {
        let value = 0x0102_0304u32;
        let mut buf: AlignedBuffer<8> = AlignedBuffer::new();
        let mut cursor = WriteCursor::new(buf.as_mut_slice());
        value.write_to(&mut cursor).unwrap();
        assert_eq!(buf.as_slice()[..4], [1, 2, 3, 4]);
    }
}
