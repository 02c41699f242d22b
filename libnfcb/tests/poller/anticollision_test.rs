#[path = "../common/mod.rs"]
mod common;

use std::collections::HashSet;

use libnfcb::Error;
use libnfcb::test_support::{SimulatedCard, SimulatedField, initialized_poller, sensb_res_bytes};
use libnfcb::transport::mock::MockTransceiver;
use libnfcb::types::{ComplianceMode, SensCommand, SlotCount};
use proptest::prelude::*;

fn first_bytes(devices: &libnfcb::card::DeviceList) -> Vec<u8> {
    devices.iter().map(|d| d.nfcid0().as_bytes()[0]).collect()
}

#[test]
fn iso_single_device_single_slot() {
    let field = common::field_of(vec![common::card(0x42, &[])]);
    let mut poller = common::poller_on(&field);

    let detected = poller.technology_detection(ComplianceMode::Iso).unwrap();
    assert_eq!(detected, sensb_res_bytes([0x42; 4]));

    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Iso,
            4,
            SlotCount::One,
            SlotCount::Sixteen,
            Some(detected.as_slice()),
        )
        .unwrap();
    assert_eq!(first_bytes(&res.devices), vec![0x42]);
    assert!(!res.collision_pending);
    // Only the detection went over the air
    assert_eq!(field.sent().len(), 1);
}

#[test]
fn iso_continues_from_presence_check_response() {
    let field = common::field_of(vec![common::card(0x42, &[])]);
    let mut poller = common::poller_on(&field);

    let rx = poller
        .check_presence(SensCommand::SensbReq, SlotCount::One)
        .unwrap();
    assert_eq!(rx.len(), 12);

    // Detection only: a single answering device is not a collision
    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Iso,
            0,
            SlotCount::One,
            SlotCount::Sixteen,
            Some(rx.as_slice()),
        )
        .unwrap();
    assert_eq!(first_bytes(&res.devices), vec![0x42]);
    assert!(!res.devices.get(0).unwrap().is_sleep());
    assert_eq!(field.sent().len(), 1);
}

#[test]
fn iso_without_detection_escalates_to_find_device() {
    let field = common::field_of(vec![common::card(0x42, &[])]);
    let mut poller = common::poller_on(&field);

    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Iso,
            4,
            SlotCount::One,
            SlotCount::Sixteen,
            None,
        )
        .unwrap();
    assert_eq!(first_bytes(&res.devices), vec![0x42]);
    assert!(res.devices.get(0).unwrap().is_sleep());
    // Nothing captured for slot 0 at one slot, so the round polled again at two
    assert_eq!(field.sent()[0], vec![0x05, 0x00, 0x01]);
}

#[test]
fn iso_round_ignores_earlier_exchanges() {
    let field = common::field_of(vec![common::card(0x42, &[])]);
    let mut poller = common::poller_on(&field);

    poller.technology_detection(ComplianceMode::Iso).unwrap();
    poller.sleep(&libnfcb::Nfcid0::from_bytes([0x42; 4])).unwrap();
    assert!(field.cards()[0].is_halted());

    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Iso,
            4,
            SlotCount::One,
            SlotCount::Two,
            None,
        )
        .unwrap();
    // The sleeping card stays silent and is not reported again
    assert!(res.devices.is_empty());
    assert!(!res.collision_pending);
    assert_eq!(
        &field.sent()[2..],
        &[vec![0x05, 0x00, 0x01], vec![0x15]]
    );
}

#[test]
fn nfc_first_slot_collision_resolved_at_sixteen_after_one_retry() {
    let field = common::field_of(vec![
        common::card(0x01, &[0, 0]),
        common::card(0x02, &[0, 1]),
        common::card(0x03, &[5]),
    ]);
    let mut poller = common::poller_on(&field);

    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Nfc,
            16,
            SlotCount::Sixteen,
            SlotCount::Sixteen,
            None,
        )
        .unwrap();
    assert_eq!(first_bytes(&res.devices), vec![0x03, 0x01, 0x02]);
    assert!(!res.collision_pending);

    let sent = field.sent();
    let wakeups = sent.iter().filter(|f| **f == [0x05, 0x00, 0x0c]).count();
    let repeats = sent.iter().filter(|f| **f == [0x05, 0x00, 0x04]).count();
    assert_eq!((wakeups, repeats), (1, 1));
}

// Two devices garble the SLOT_MARKER of slot code 1 while a third answers
// the wake-up alone: one retry at 16 slots separates them.
#[test]
fn nfc_slot_marker_collision_resolved_at_sixteen_after_one_retry() {
    let field = common::field_of(vec![
        common::card(0x01, &[1, 0]),
        common::card(0x02, &[1, 2]),
        common::card(0x03, &[0]),
    ]);
    let mut poller = common::poller_on(&field);

    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Nfc,
            16,
            SlotCount::Sixteen,
            SlotCount::Sixteen,
            None,
        )
        .unwrap();
    assert_eq!(first_bytes(&res.devices), vec![0x03, 0x01, 0x02]);
    assert!(!res.collision_pending);

    let sent = field.sent();
    let wakeups = sent.iter().filter(|f| **f == [0x05, 0x00, 0x0c]).count();
    let repeats = sent.iter().filter(|f| **f == [0x05, 0x00, 0x04]).count();
    assert_eq!((wakeups, repeats), (1, 1));
    assert_eq!(sent[1], vec![0x15]);
    // The first device is put to sleep before the retry
    assert_eq!(sent[16], vec![0x50, 0x03, 0x03, 0x03, 0x03]);
}

#[test]
fn emv_empty_wakeup_is_framing() {
    let field = SimulatedField::noisy();
    let mut poller = common::poller_on(&field);
    assert!(matches!(
        poller.collision_resolution(ComplianceMode::Emv, 1),
        Err(Error::Framing)
    ));
}

#[test]
fn detection_only_collision_reports_error() {
    let field = common::field_of(vec![common::card(0x01, &[]), common::card(0x02, &[])]);
    let mut poller = common::poller_on(&field);
    let res = poller.slotted_collision_resolution(
        ComplianceMode::Nfc,
        0,
        SlotCount::One,
        SlotCount::Sixteen,
        None,
    );
    assert!(matches!(res, Err(Error::Collision)));
}

#[test]
fn emv_escalates_when_pass_finds_nothing() {
    let mut mock = MockTransceiver::new();
    mock.push_response(vec![0x50, 0x01, 0x02]); // ALLB_REQ, 2 slots: malformed
    mock.push_error(Error::Timeout); // slot marker 1
    mock.push_response(sensb_res_bytes([0x77; 4])); // SENSB_REQ, 4 slots
    let shared = libnfcb::test_support::Shared::new(mock);
    let mut poller = initialized_poller(shared.clone()).unwrap();

    let res = poller
        .slotted_collision_resolution(
            ComplianceMode::Emv,
            4,
            SlotCount::Two,
            SlotCount::Sixteen,
            None,
        )
        .unwrap();
    assert_eq!(first_bytes(&res.devices), vec![0x77]);
    assert_eq!(
        shared.borrow().sent,
        vec![vec![0x05, 0x00, 0x09], vec![0x15], vec![0x05, 0x00, 0x02]]
    );
}

#[test]
fn collision_resolution_over_full_range() {
    let field = common::field_of(vec![
        common::card(0x0a, &[0, 1, 3]),
        common::card(0x0b, &[0, 1, 2]),
        common::card(0x0c, &[0, 0, 0]),
    ]);
    let mut poller = common::poller_on(&field);
    let devices = poller.collision_resolution(ComplianceMode::Nfc, 8).unwrap();

    let mut found = first_bytes(&devices);
    found.sort_unstable();
    assert_eq!(found, vec![0x0a, 0x0b, 0x0c]);
    assert!(field.cards().iter().filter(|c| c.is_halted()).count() >= 2);
}

fn populated_field(scripts: &[Vec<u8>]) -> SimulatedField {
    let field = SimulatedField::new();
    for (i, script) in scripts.iter().enumerate() {
        field.insert(SimulatedCard::new([i as u8 + 1; 4]).with_slots(script));
    }
    field
}

proptest! {
    #[test]
    fn nfc_rounds_find_each_device_once(
        scripts in prop::collection::vec(prop::collection::vec(0u8..16, 0..6), 1..6),
        limit in 1u8..8,
    ) {
        let field = populated_field(&scripts);
        let mut poller = initialized_poller(field.clone()).unwrap();

        let outcome = poller.slotted_collision_resolution(
            ComplianceMode::Nfc,
            limit,
            SlotCount::One,
            SlotCount::Sixteen,
            None,
        );
        if let Ok(res) = outcome {
            let ids: HashSet<_> = res.devices.iter().map(|d| *d.nfcid0()).collect();
            prop_assert_eq!(ids.len(), res.devices.len());
            prop_assert!(res.devices.len() <= scripts.len());
            prop_assert!(res.devices.len() <= limit as usize);
            if !res.collision_pending && res.devices.len() < limit as usize {
                prop_assert_eq!(res.devices.len(), scripts.len());
            }
        }
    }

    #[test]
    fn emv_rounds_find_at_most_one_device(
        scripts in prop::collection::vec(prop::collection::vec(0u8..16, 0..6), 1..6),
    ) {
        let field = populated_field(&scripts);
        let mut poller = initialized_poller(field).unwrap();
        match poller.collision_resolution(ComplianceMode::Emv, 8) {
            Ok(devices) => prop_assert!(devices.len() <= 1),
            Err(e) => prop_assert!(matches!(e, Error::Framing)),
        }
    }
}
