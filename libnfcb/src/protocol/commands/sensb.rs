// libnfcb/src/protocol/commands/sensb.rs

use crate::constants::{CMD_SENSB_REQ, SENSB_REQ_LEN, SENSB_REQ_PARAM_MASK};
use crate::types::{SensCommand, SlotCount};

/// Encode SENSB_REQ / ALLB_REQ: command, AFI, PARAM.
///
/// Only the advanced/extended feature bits of `param` are kept; the
/// request flavour and slot exponent are OR-ed in.
pub fn encode_sensb_req(
    afi: u8,
    param: u8,
    sens: SensCommand,
    slots: SlotCount,
) -> [u8; SENSB_REQ_LEN] {
    let param = (param & SENSB_REQ_PARAM_MASK) | sens as u8 | slots.exponent();
    [CMD_SENSB_REQ, afi, param]
}
