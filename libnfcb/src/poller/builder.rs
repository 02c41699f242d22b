// libnfcb/src/poller/builder.rs

use crate::poller::config::PollerConfig;
use crate::poller::handle::{Initialized, Poller, Uninitialized};
use crate::transport::Transceiver;
use crate::{Error, Result};

/// Helper to construct a Poller with optional session configuration.
pub struct PollerBuilder {
    transceiver: Option<Box<dyn Transceiver>>,
    config: PollerConfig,
}

impl PollerBuilder {
    /// Builder with the default AFI and PARAM and no transceiver.
    pub fn new() -> Self {
        Self {
            transceiver: None,
            config: PollerConfig::default(),
        }
    }

    /// Provide the RF transceiver (e.g. MockTransceiver)
    pub fn with_transceiver(mut self, transceiver: Box<dyn Transceiver>) -> Self {
        self.transceiver = Some(transceiver);
        self
    }

    /// Application family to address.
    pub fn afi(mut self, afi: u8) -> Self {
        self.config = PollerConfig::new(afi, self.config.param());
        self
    }

    /// PARAM feature bits (masked).
    pub fn param(mut self, param: u8) -> Self {
        self.config = PollerConfig::new(self.config.afi(), param);
        self
    }

    /// Replace AFI and PARAM at once.
    pub fn config(mut self, config: PollerConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Poller.
    pub fn build_uninitialized(self) -> Result<Poller<Uninitialized>> {
        match self.transceiver {
            Some(t) => Ok(Poller::with_config(t, self.config)),
            None => Err(Error::InvalidParameter("no transceiver provided".into())),
        }
    }

    /// Build and run the RF initialization in one step.
    pub fn build(self) -> Result<Poller<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}

impl Default for PollerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
