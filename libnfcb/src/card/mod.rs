// libnfcb/src/card/mod.rs

use crate::protocol::SensbRes;
use crate::types::Nfcid0;

mod list;
pub use list::DeviceList;

/// A listen device identified during an anticollision round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenDevice {
    sensb_res: SensbRes,
    is_sleep: bool,
}

impl ListenDevice {
    /// A freshly identified device is awake.
    pub fn new(sensb_res: SensbRes) -> Self {
        Self {
            sensb_res,
            is_sleep: false,
        }
    }

    /// SENSB_RES the device answered with.
    pub fn sensb_res(&self) -> &SensbRes {
        &self.sensb_res
    }

    /// PUPI of the device.
    pub fn nfcid0(&self) -> &Nfcid0 {
        self.sensb_res.nfcid0()
    }

    /// Length of the SENSB_RES this device answered with.
    pub fn sensb_res_len(&self) -> usize {
        self.sensb_res.frame_len()
    }

    /// True once SLPB_REQ was sent to the device.
    pub fn is_sleep(&self) -> bool {
        self.is_sleep
    }

    /// Record that the device was sent SLPB_REQ. There is no way back to
    /// awake within a round.
    pub(crate) fn mark_sleep(&mut self) {
        self.is_sleep = true;
    }
}
