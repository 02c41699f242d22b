// libnfcb/src/protocol/commands/slot_marker.rs

use crate::constants::{
    CMD_SENSB_REQ, SLOT_MARKER_SC_SHIFT, SLOT_MARKER_SLOTCODE_MAX, SLOT_MARKER_SLOTCODE_MIN,
};
use crate::{Error, Result};

/// Reject slot codes outside 1..=16.
pub fn validate_slot_code(slot_code: u8) -> Result<()> {
    if !(SLOT_MARKER_SLOTCODE_MIN..=SLOT_MARKER_SLOTCODE_MAX).contains(&slot_code) {
        return Err(Error::InvalidParameter(format!(
            "slot code {} outside {}..={}",
            slot_code, SLOT_MARKER_SLOTCODE_MIN, SLOT_MARKER_SLOTCODE_MAX
        )));
    }
    Ok(())
}

/// Encode SLOT_MARKER (APn): slot code in the high nibble, 0x05 below.
/// The high nibble holds four bits, so slot code 16 encodes as 0.
pub fn encode_slot_marker(slot_code: u8) -> [u8; 1] {
    [(slot_code << SLOT_MARKER_SC_SHIFT) | CMD_SENSB_REQ]
}
