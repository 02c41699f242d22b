//! Scan a simulated field holding three Type B cards under each
//! compliance mode and print what was found.
//!
//! RUST_LOG=debug cargo run --example field_scan

use anyhow::Result;
use libnfcb::prelude::*;
use libnfcb::test_support::{SimulatedCard, SimulatedField};

fn field() -> SimulatedField {
    let field = SimulatedField::new();
    field.insert(SimulatedCard::new([0x3a, 0x5c, 0x12, 0x9e]).with_slots(&[0, 1, 3]));
    field.insert(SimulatedCard::new([0x08, 0x11, 0xa0, 0x42]).with_slots(&[0, 1, 1]));
    field.insert(SimulatedCard::new([0xc4, 0x00, 0x7f, 0x21]).with_slots(&[0, 0, 0]));
    field
}

fn main() -> Result<()> {
    env_logger::init();

    for mode in [ComplianceMode::Iso, ComplianceMode::Emv, ComplianceMode::Nfc] {
        let mut poller = PollerBuilder::new()
            .with_transceiver(Box::new(field()))
            .build()?;

        let detected = poller.technology_detection(mode)?;
        println!("{}: detection [{}]", mode, bytes_to_hex_spaced(&detected));

        // Only ISO rounds continue from the detection response
        match poller.slotted_collision_resolution(
            mode,
            8,
            SlotCount::One,
            SlotCount::Sixteen,
            Some(detected.as_slice()),
        ) {
            Ok(res) => {
                for dev in &res.devices {
                    let sensb = dev.sensb_res();
                    println!(
                        "  NFCID0 {}  FSCI {}  ISO-DEP {}  TR2 {} fc{}",
                        dev.nfcid0().to_hex(),
                        sensb.fsci(),
                        sensb.is_iso_dep_supported(),
                        sensb.tr2_fdt(),
                        if dev.is_sleep() { "  (asleep)" } else { "" }
                    );
                }
                if res.collision_pending {
                    println!("  collision still pending");
                }
            }
            Err(e) => println!("  anticollision failed: {}", e),
        }
    }
    Ok(())
}
