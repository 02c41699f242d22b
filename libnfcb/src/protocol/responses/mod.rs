// libnfcb/src/protocol/responses/mod.rs

/// SENSB_RES.
pub mod sensb;
/// SLPB_RES.
pub mod sleep;

pub use sensb::SensbRes;
pub use sleep::decode_slpb_res;

use crate::protocol::commands::Command;

/// Decoded listen-side answer. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// SENSB_RES, answer to SENSB_REQ/ALLB_REQ or SLOT_MARKER
    Sensb(SensbRes),
    /// SLPB_RES
    Slpb,
}

impl Response {
    /// Decode the raw bytes received in answer to `cmd`.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::SensbReq { .. } | Command::SlotMarker { .. } => {
                SensbRes::parse(data).map(Self::Sensb)
            }
            Command::SlpbReq { .. } => decode_slpb_res(data).map(|()| Self::Slpb),
        }
    }

    /// Command byte carried by this response.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::Sensb(_) => crate::constants::CMD_SENSB_RES,
            Response::Slpb => crate::constants::CMD_SLPB_RES,
        }
    }
}
