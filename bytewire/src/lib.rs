//! # bytewire
//!
//! Fixed-layout, big-endian binary message encoding for Rust.
//!
//! A message is a plain struct whose fields are written to a caller-owned
//! buffer in declaration order, with no padding, framing or type tag. Every
//! multi-byte scalar is big-endian on the wire, whatever the host.
//!
//! ## Features
//!
//! - **Compile-time sizes** - `SIZE` and `MAX_MESSAGE_SIZE` are associated
//!   constants, usable as array lengths
//! - **No allocation** - serialization writes into a slice the caller owns
//! - **Composition** - nested messages, fixed arrays and packed sub-byte groups
//! - **Schemas** - dense message identifiers and a schema-wide maximum size
//!
//! ## Quick Start
//!
//! ```
//! use bytewire::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq, WireMessage)]
//! struct LightBulbStatus {
//!     brightness: u8,
//!     color: [u8; 3],
//!     flags: u8,
//! }
//!
//! let status = LightBulbStatus { brightness: 5, color: [10, 20, 30], flags: 1 };
//! let mut buffer = [0u8; LightBulbStatus::SIZE];
//! assert_eq!(status.serialize(&mut buffer), Ok(5));
//! assert_eq!(buffer, [5, 10, 20, 30, 1]);
//!
//! let decoded = LightBulbStatus::decode(&buffer).unwrap();
//! assert_eq!(decoded, status);
//! ```
//!
//! ## Crate Organization
//!
//! - [`endian`] - host/wire byte-order conversion
//! - [`cursor`] - bounds-checked field cursors
//! - [`field`] - [`WireField`] encodings for scalars, arrays and blobs
//! - [`message`] - the [`WireMessage`] contract
//! - [`packed`] - packed sub-byte groups ([`packed_bits!`])
//! - [`registry`] - schemas, identifiers and maximum sizes ([`wire_schema!`])
//! - [`buffer`] - cache-line aligned receive buffers

pub mod prelude;

pub use bytewire_core::*;

#[cfg(feature = "derive")]
pub use bytewire_derive::WireMessage;
