//! Sample messages shared by the benchmarks.

use bytewire::prelude::*;

packed_bits! {
    /// Power and fault flags of a bulb.
    pub struct LightStatus: u8 {
        const POWER_ON = 0, 1;
        const POWER_LEVEL = 1, 3;
        const BROKEN = 4, 1;
    }
}

/// Five single-byte fields.
#[derive(Debug, Default, Clone, PartialEq, WireMessage)]
pub struct LightBulbStatus {
    pub brightness: u8,
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub status: LightStatus,
}

/// Array of nested messages followed by scalars.
#[derive(Debug, Default, Clone, PartialEq, WireMessage)]
pub struct LedStripStatus {
    pub bulbs: [LightBulbStatus; 8],
    pub connected: u8,
    pub mode: u8,
}

/// Multi-byte scalars only, so every field needs a byte swap on
/// little-endian hosts.
#[derive(Debug, Default, Clone, PartialEq, WireMessage)]
pub struct SensorFrame {
    pub sequence: u64,
    pub sensor: u16,
    pub readings: [i32; 8],
    pub gain: f64,
}

wire_schema! {
    /// Messages used by the benchmarks.
    pub schema BenchSchema {
        id BenchId;
        message BenchMessage;

        Bulb => LightBulbStatus,
        Strip => LedStripStatus,
        Sensor => SensorFrame,
    }
}

/// Returns a bulb with every field set.
#[must_use]
pub fn sample_bulb(seed: u8) -> LightBulbStatus {
    LightBulbStatus {
        brightness: seed,
        color_r: seed.wrapping_mul(3),
        color_g: seed.wrapping_mul(5),
        color_b: seed.wrapping_mul(7),
        status: LightStatus::default()
            .with(LightStatus::POWER_ON, 1)
            .with(LightStatus::POWER_LEVEL, seed & 0b111),
    }
}

/// Returns a strip of eight distinct bulbs.
#[must_use]
pub fn sample_strip() -> LedStripStatus {
    LedStripStatus {
        bulbs: std::array::from_fn(|i| sample_bulb(i as u8)),
        connected: 1,
        mode: 2,
    }
}

/// Returns a sensor frame with every field set.
#[must_use]
pub fn sample_sensor() -> SensorFrame {
    SensorFrame {
        sequence: 0x0102_0304_0506_0708,
        sensor: 0x0A0B,
        readings: [-4, -3, -2, -1, 1, 2, 3, 4],
        gain: 0.75,
    }
}
