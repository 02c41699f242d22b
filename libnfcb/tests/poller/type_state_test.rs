#[path = "../common/mod.rs"]
mod common;

use libnfcb::poller::{Poller, PollerBuilder, PollerConfig};
use libnfcb::test_support::Shared;
use libnfcb::transport::mock::MockTransceiver;
use libnfcb::types::{ErrorHandling, RfMode};

#[test]
fn initialize_transitions_and_keeps_config() {
    common::init_logger();
    let mock = Shared::new(MockTransceiver::new());

    let poller = Poller::new_with_transceiver(Box::new(mock.clone()));
    assert_eq!(poller.config(), PollerConfig::default());
    // Nothing is configured until initialization
    assert!(mock.borrow().mode.is_none());

    let initialized = poller.initialize_with_params(0x41, 0x10).unwrap();
    assert_eq!(initialized.config().afi(), 0x41);
    assert!(initialized.config().extended_sensb_res());

    let m = mock.borrow();
    assert_eq!(m.mode.map(|(mode, _, _)| mode), Some(RfMode::PollNfcb));
    assert_eq!(m.error_handling, Some(ErrorHandling::Nfc));
}

#[test]
fn builder_config_is_used_for_requests() {
    let mock = Shared::new(MockTransceiver::new());
    let mut poller = PollerBuilder::new()
        .with_transceiver(Box::new(mock.clone()))
        .config(PollerConfig::new(0x12, 0x20))
        .build()
        .unwrap();

    let _ = poller.check_presence(
        libnfcb::SensCommand::SensbReq,
        libnfcb::SlotCount::Two,
    );
    assert_eq!(mock.borrow().sent, vec![vec![0x05, 0x12, 0x21]]);
}

#[test]
fn reconfigure_reapplies_rf_settings() {
    let mock = Shared::new(MockTransceiver::new());
    let mut poller = Poller::new_with_transceiver(Box::new(mock.clone()))
        .initialize()
        .unwrap();
    mock.borrow_mut().mode = None;

    poller.reconfigure(0x00, 0x30).unwrap();
    assert!(mock.borrow().mode.is_some());
    assert_eq!(poller.config().param(), 0x30);

    mock.borrow_mut().mode_failures = 1;
    assert!(poller.reconfigure(0x00, 0x00).is_err());
    // Failed reconfiguration leaves the session untouched
    assert_eq!(poller.config().param(), 0x30);
}
