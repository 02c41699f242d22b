#[path = "../common/mod.rs"]
mod common;

use libnfcb::Error;
use libnfcb::transport::Transceiver;
use libnfcb::test_support::SimulatedField;

#[test]
fn rejects_unknown_frames() {
    let mut field = SimulatedField::new();
    assert!(matches!(
        field.transceive(&[0x26], 2, 0),
        Err(Error::Transceiver(_))
    ));
}

#[test]
fn sleep_of_unknown_card_times_out() {
    let mut field = common::field_of(vec![common::card(0x01, &[])]);
    assert!(matches!(
        field.transceive(&[0x50, 0x02, 0x02, 0x02, 0x02], 1, 0),
        Err(Error::Timeout)
    ));
    assert!(!field.cards()[0].is_halted());
}

#[test]
fn marker_fifteen_opens_last_of_sixteen_slots() {
    let mut field = common::field_of(vec![common::card(0x09, &[15])]);
    assert!(matches!(
        field.transceive(&[0x05, 0x00, 0x04], 13, 0),
        Err(Error::Timeout)
    ));
    assert!(field.transceive(&[0xf5], 13, 0).is_ok());
}
