#[path = "../common/mod.rs"]
mod common;

use libnfcb::Error;
use libnfcb::test_support::{Shared, SimulatedCard, SimulatedField, initialized_poller};
use libnfcb::transport::mock::MockTransceiver;
use libnfcb::types::{ComplianceMode, SensCommand, SlotCount};

#[test]
fn presence_check_returns_validated_response() {
    let mock = common::mock_with(vec![common::sensb_res_frame()]);
    let mut poller = initialized_poller(mock).unwrap();
    let rx = poller
        .check_presence(SensCommand::SensbReq, SlotCount::One)
        .unwrap();
    assert_eq!(rx, common::sensb_res_frame());
}

#[test]
fn presence_check_with_rfu_bit_is_protocol_error() {
    let mut frame = common::sensb_res_frame();
    frame[10] |= 0x08;
    let mut poller = initialized_poller(common::mock_with(vec![frame])).unwrap();
    let err = poller
        .check_presence(SensCommand::AllbReq, SlotCount::One)
        .unwrap_err();
    assert!(err.is_protocol_error());
}

#[test]
fn slot_marker_out_of_range_transmits_nothing() {
    let mock = Shared::new(MockTransceiver::new());
    let mut poller = initialized_poller(mock.clone()).unwrap();
    assert!(matches!(poller.slot_marker(0), Err(Error::InvalidParameter(_))));
    assert!(matches!(poller.slot_marker(17), Err(Error::InvalidParameter(_))));
    assert!(mock.borrow().sent.is_empty());
}

#[test]
fn slot_marker_transceiver_errors_pass_through() {
    let mock = Shared::new(MockTransceiver::new());
    mock.borrow_mut()
        .push_error(Error::Transceiver("field off".into()));
    let mut poller = initialized_poller(mock.clone()).unwrap();
    assert!(matches!(poller.slot_marker(4), Err(Error::Transceiver(_))));
    assert!(matches!(poller.slot_marker(4), Err(Error::Timeout)));
}

#[test]
fn sleep_silences_card_until_allb() {
    let field = SimulatedField::new();
    field.insert(SimulatedCard::new(common::sample_nfcid0_bytes()));
    let mut poller = common::poller_on(&field);

    poller.sleep(&common::sample_nfcid0()).unwrap();
    assert!(matches!(
        poller.check_presence(SensCommand::SensbReq, SlotCount::One),
        Err(Error::Timeout)
    ));
    assert!(
        poller
            .check_presence(SensCommand::AllbReq, SlotCount::One)
            .is_ok()
    );
}

#[test]
fn technology_detection_on_noise_is_idempotent() {
    let field = SimulatedField::noisy();
    let mut poller = common::poller_on(&field);
    for _ in 0..2 {
        let rx = poller.technology_detection(ComplianceMode::Nfc).unwrap();
        assert!(rx.is_empty());
    }
    assert_eq!(field.sent().len(), 2);
}

#[test]
fn technology_detection_on_silence_times_out_every_time() {
    let field = SimulatedField::new();
    let mut poller = common::poller_on(&field);
    for _ in 0..2 {
        assert!(matches!(
            poller.technology_detection(ComplianceMode::Iso),
            Err(Error::Timeout)
        ));
    }
}
