//! Timing helpers. Frame wait and delay times are expressed in carrier
//! cycles (1/fc, fc = 13.56 MHz), the unit the RF layer is configured in.

use std::time::Duration;

use crate::constants::CARRIER_HZ;

/// Convert milliseconds to carrier cycles, saturating at `u32::MAX`.
pub const fn ms_to_fc(ms: u32) -> u32 {
    ms.saturating_mul((CARRIER_HZ / 1000) as u32)
}

/// Convert carrier cycles to microseconds, rounding down.
pub fn fc_to_micros(fc: u32) -> u64 {
    (fc as u64 * 1_000_000) / CARRIER_HZ
}

/// Convert carrier cycles to a Duration.
pub fn fc_to_duration(fc: u32) -> Duration {
    Duration::from_nanos((fc as u64 * 1_000_000_000) / CARRIER_HZ)
}
