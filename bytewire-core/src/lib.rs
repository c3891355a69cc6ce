//! # bytewire core
//!
//! Core types and traits for fixed-layout, big-endian binary messages.
//!
//! This crate provides:
//! - Host/wire byte-order conversion ([`endian`])
//! - Bounds-checked field cursors ([`cursor`])
//! - The [`WireField`] and [`WireMessage`] traits
//! - Packed sub-byte field groups ([`packed_bits!`])
//! - Schema metadata: identifiers and maximum message size ([`wire_schema!`])
//! - Cache-line aligned receive buffers
//!
//! Messages are flat: fields appear in declaration order with no padding,
//! framing, length prefix or type tag, and every scalar is big-endian.

pub mod buffer;
pub mod cursor;
pub mod endian;
pub mod error;
pub mod field;
pub mod message;
pub mod packed;
pub mod registry;

pub use buffer::AlignedBuffer;
pub use cursor::{ReadCursor, WriteCursor};
pub use endian::{ByteOrder, convert, is_big_endian};
pub use error::{Error, Result};
pub use field::{Blob, WireField};
pub use message::WireMessage;
pub use packed::{BitField, PackedContainer};
pub use registry::{INVALID_ID, MessageId, Schema, SchemaMessage, max_size};
