//! # bytewire derive
//!
//! Procedural macro for bytewire message definitions.
//!
//! `#[derive(WireMessage)]` implements `WireMessage` and `WireField` for a
//! struct by walking its fields in declaration order. The message size is the
//! sum of the fields' wire sizes and is computed at compile time.

mod generate;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `WireMessage` (and `WireField`, so the type can be nested) for a
/// struct.
///
/// Every field type must implement `WireField`: integers, floats, `Blob<N>`,
/// packed groups, other derived messages, and fixed arrays of any of these.
///
/// # Attributes
/// - `#[wire(crate = "path")]` on the struct overrides the path of the runtime
///   crate (default `::bytewire`).
///
/// # Example
/// ```ignore
/// #[derive(Debug, Default, PartialEq, WireMessage)]
/// struct LedStripStatus {
///     bulbs: [LightBulbStatus; 2],
///     connected: u8,
///     mode: u8,
/// }
///
/// assert_eq!(LedStripStatus::SIZE, 2 * LightBulbStatus::SIZE + 2);
/// ```
#[proc_macro_derive(WireMessage, attributes(wire))]
pub fn derive_wire_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match parse::MessageDefinition::parse(input) {
        Ok(message) => generate::generate_message(&message).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
