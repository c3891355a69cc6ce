//! Example lighting schema: bulbs with packed status flags, grouped into LED
//! strips.
//!
//! Run with: `RUST_LOG=trace cargo run --example lighting`

use bytewire::prelude::*;

packed_bits! {
    /// Power and fault flags of a bulb.
    pub struct LightStatus: u8 {
        const POWER_ON = 0, 1;
        const POWER_LEVEL = 1, 3;
        const BROKEN = 4, 1;
    }
}

/// State of a single RGB bulb.
#[derive(Debug, Default, Clone, PartialEq, WireMessage)]
pub struct LightBulbStatus {
    pub brightness: u8,
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub status: LightStatus,
}

/// State of a two-bulb LED strip.
#[derive(Debug, Default, Clone, PartialEq, WireMessage)]
pub struct LedStripStatus {
    pub bulbs: [LightBulbStatus; 2],
    pub connected: u8,
    pub mode: u8,
}

/// Power reading reported by a strip controller.
#[derive(Debug, Default, Clone, PartialEq, WireMessage)]
pub struct PowerReport {
    pub millivolts: u16,
    pub milliamps: u32,
}

wire_schema! {
    /// Messages exchanged with lighting controllers.
    pub schema Lighting {
        id LightingId;
        message LightingMessage;

        Bulb => LightBulbStatus,
        Strip => LedStripStatus,
        Power => PowerReport,
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bulb = LightBulbStatus {
        brightness: 5,
        color_r: 10,
        color_g: 20,
        color_b: 30,
        status: LightStatus::default().with(LightStatus::POWER_ON, 1),
    };
    let strip = LedStripStatus {
        bulbs: [bulb.clone(), bulb.clone()],
        connected: 1,
        mode: 3,
    };
    let power = PowerReport {
        millivolts: 12_000,
        milliamps: 350,
    };

    println!("Lighting schema");
    for &id in LightingId::ALL {
        println!("  {:?} = {} ({} bytes)", id, id.raw(), Lighting::size_of(id));
    }
    println!("  max message size = {} bytes", Lighting::MAX_MESSAGE_SIZE);
    println!();

    let mut buffer = AlignedBuffer::<{ Lighting::MAX_MESSAGE_SIZE }>::new();
    let messages: [LightingMessage; 3] = [bulb.into(), strip.into(), power.into()];

    for message in &messages {
        buffer.clear();
        let written = message.serialize(buffer.as_mut_slice())?;
        println!(
            "{:?}: {}",
            message.id(),
            hex(&buffer.as_slice()[..written])
        );

        let mut decoded = match message.id() {
            LightingId::Bulb => LightingMessage::Bulb(LightBulbStatus::default()),
            LightingId::Strip => LightingMessage::Strip(LedStripStatus::default()),
            LightingId::Power => LightingMessage::Power(PowerReport::default()),
        };
        decoded.deserialize(buffer.as_slice())?;
        assert_eq!(&decoded, message);
    }

    let mut short = [0u8; 4];
    match messages[0].serialize(&mut short) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("\nshort buffer: {err}"),
    }

    Ok(())
}
