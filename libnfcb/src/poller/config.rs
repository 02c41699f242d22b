// libnfcb/src/poller/config.rs

use crate::constants::{
    DEFAULT_AFI, DEFAULT_PARAM, SENSB_REQ_ADV_FEATURE, SENSB_REQ_EXT_SENSB_RES_SUPPORTED,
    SENSB_REQ_PARAM_MASK,
};

/// Session values carried in every SENSB_REQ. They persist across rounds
/// until the poller is reconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollerConfig {
    afi: u8,
    param: u8,
}

impl PollerConfig {
    /// PARAM is masked down to the advanced-feature and extended-SENSB_RES
    /// bits; slot and command bits are chosen per request.
    pub fn new(afi: u8, param: u8) -> Self {
        Self {
            afi,
            param: param & SENSB_REQ_PARAM_MASK,
        }
    }

    /// Application family identifier. 0x00 addresses every family.
    pub fn afi(&self) -> u8 {
        self.afi
    }

    /// PARAM feature bits OR-ed into every SENSB_REQ.
    pub fn param(&self) -> u8 {
        self.param
    }

    /// Advanced protocol features announced.
    pub fn advanced_features(&self) -> bool {
        self.param & SENSB_REQ_ADV_FEATURE != 0
    }

    /// Extended SENSB_RES accepted.
    pub fn extended_sensb_res(&self) -> bool {
        self.param & SENSB_REQ_EXT_SENSB_RES_SUPPORTED != 0
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AFI, DEFAULT_PARAM)
    }
}
