use libnfcb::protocol::tr2_to_fdt;
use libnfcb::utils::{fc_to_duration, ms_to_fc};
use std::time::Duration;

#[test]
fn tr2_table() {
    assert_eq!(
        [0u8, 1, 2, 3].map(tr2_to_fdt),
        [1792, 3328, 5376, 9472]
    );
}

#[test]
fn tr2_ignores_upper_bits() {
    for code in 0u8..=255 {
        assert_eq!(tr2_to_fdt(code), tr2_to_fdt(code & 0x03));
    }
}

#[test]
fn carrier_cycle_conversions() {
    assert_eq!(ms_to_fc(1), 13_560);
    assert_eq!(fc_to_duration(13_560 * 3), Duration::from_millis(3));
}
