// libnfcb/src/protocol/commands/mod.rs

/// SENSB_REQ / ALLB_REQ.
pub mod sensb;
/// SLPB_REQ.
pub mod sleep;
/// SLOT_MARKER.
pub mod slot_marker;

pub use sensb::encode_sensb_req;
pub use sleep::encode_slpb_req;
pub use slot_marker::{encode_slot_marker, validate_slot_code};

use crate::constants::{
    ACTIVATION_FWT, CMD_SENSB_REQ, CMD_SENSB_RES, CMD_SLPB_REQ, CMD_SLPB_RES, FWT_SENSB,
    SENSB_RES_EXT_LEN, SLPB_RES_LEN,
};
use crate::types::{Nfcid0, SensCommand, SlotCount};

/// Poll-side NFC-B request. Per-command encoders live in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SENSB_REQ or ALLB_REQ
    SensbReq {
        /// Application family identifier
        afi: u8,
        /// PARAM feature bits
        param: u8,
        /// Which devices may answer
        sens: SensCommand,
        /// Slot count announced to the field
        slots: SlotCount,
    },
    /// SLOT_MARKER opening one slot
    SlotMarker {
        /// 1-based slot code, 1..=15
        slot_code: u8,
    },
    /// SLPB_REQ
    SlpbReq {
        /// PUPI of the device to put to sleep
        nfcid0: Nfcid0,
    },
}

impl Command {
    /// First byte on the wire.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::SensbReq { .. } => CMD_SENSB_REQ,
            Self::SlotMarker { slot_code } => encode_slot_marker(*slot_code)[0],
            Self::SlpbReq { .. } => CMD_SLPB_REQ,
        }
    }

    /// Command byte the answering listen device echoes back.
    pub fn response_code(&self) -> u8 {
        match self {
            Self::SensbReq { .. } | Self::SlotMarker { .. } => CMD_SENSB_RES,
            Self::SlpbReq { .. } => CMD_SLPB_RES,
        }
    }

    /// Receive buffer size to hand to the transceiver.
    pub fn max_response_len(&self) -> usize {
        match self {
            Self::SensbReq { .. } | Self::SlotMarker { .. } => SENSB_RES_EXT_LEN,
            Self::SlpbReq { .. } => SLPB_RES_LEN,
        }
    }

    /// Frame wait time in carrier cycles.
    pub fn fwt(&self) -> u32 {
        match self {
            Self::SensbReq { .. } => FWT_SENSB,
            Self::SlotMarker { .. } | Self::SlpbReq { .. } => ACTIVATION_FWT,
        }
    }

    /// Wire bytes of the request.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SensbReq {
                afi,
                param,
                sens,
                slots,
            } => encode_sensb_req(*afi, *param, *sens, *slots).to_vec(),
            Self::SlotMarker { slot_code } => encode_slot_marker(*slot_code).to_vec(),
            Self::SlpbReq { nfcid0 } => encode_slpb_req(nfcid0).to_vec(),
        }
    }
}
