//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, traits and macros.
//!
//! ```ignore
//! use bytewire::prelude::*;
//! ```

// Core traits
pub use bytewire_core::field::WireField;
pub use bytewire_core::message::WireMessage;
pub use bytewire_core::registry::{MessageId, Schema, SchemaMessage};

// Core types
pub use bytewire_core::buffer::AlignedBuffer;
pub use bytewire_core::endian::ByteOrder;
pub use bytewire_core::error::{Error as WireError, Result as WireResult};
pub use bytewire_core::field::Blob;
pub use bytewire_core::packed::BitField;

// Macros
pub use bytewire_core::{packed_bits, wire_schema};

#[cfg(feature = "derive")]
pub use bytewire_derive::WireMessage;
