//! Encoding/decoding benchmark helpers.

use std::time::{Duration, Instant};

use bytewire::prelude::*;

use crate::messages::BenchSchema;

/// Serializes `message` `iterations` times into a schema-sized buffer.
///
/// # Errors
/// Propagates the first serialization error.
pub fn benchmark_encode<M: WireMessage>(iterations: usize, message: &M) -> WireResult<Duration> {
    let mut buffer = AlignedBuffer::<{ BenchSchema::MAX_MESSAGE_SIZE }>::new();
    let start = Instant::now();

    for _ in 0..iterations {
        message.serialize(buffer.as_mut_slice())?;
    }

    Ok(start.elapsed())
}

/// Deserializes `data` into `message` `iterations` times.
///
/// # Errors
/// Propagates the first deserialization error.
pub fn benchmark_decode<M: WireMessage>(
    iterations: usize,
    data: &[u8],
    message: &mut M,
) -> WireResult<Duration> {
    let start = Instant::now();

    for _ in 0..iterations {
        message.deserialize(data)?;
    }

    Ok(start.elapsed())
}
