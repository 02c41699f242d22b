// libnfcb/src/protocol/commands/sleep.rs

use crate::constants::{CMD_SLPB_REQ, SLPB_REQ_LEN};
use crate::types::Nfcid0;

/// Encode SLPB_REQ (HLTB): command + NFCID0 of the target.
pub fn encode_slpb_req(nfcid0: &Nfcid0) -> [u8; SLPB_REQ_LEN] {
    let id = nfcid0.as_bytes();
    [CMD_SLPB_REQ, id[0], id[1], id[2], id[3]]
}
