//! # bytewire bench
//!
//! Benchmarking utilities and sample messages for bytewire performance
//! testing.

pub mod encoding;
pub mod messages;
