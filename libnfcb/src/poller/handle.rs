// libnfcb/src/poller/handle.rs

use std::marker::PhantomData;

use log::{debug, trace};

use crate::constants::{FDT_LISTEN_NFCB_POLLER, FDT_POLL_NFCB_POLLER, GT_NFCB};
use crate::poller::config::PollerConfig;
use crate::protocol::{Command, Response, SensbRes, validate_slot_code};
use crate::transport::Transceiver;
use crate::types::{BitRate, ComplianceMode, ErrorHandling, Nfcid0, RfMode, SensCommand, SlotCount};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state marker: RF not configured yet.
pub struct Uninitialized;
/// RF configured for NFC-B polling.
pub struct Initialized;

/// What one SENSB_REQ or SLOT_MARKER exchange left behind: the received
/// bytes (empty when nothing usable arrived) and the classified status.
#[derive(Debug)]
pub(crate) struct Exchange {
    pub(crate) response: Vec<u8>,
    pub(crate) status: Result<()>,
}

impl Exchange {
    /// Bytes captured by an earlier exchange, e.g. a technology detection.
    /// They are judged by the validator only, so an empty buffer reads as
    /// garbled.
    pub(crate) fn carried(response: Vec<u8>) -> Self {
        Self {
            response,
            status: Ok(()),
        }
    }

    pub(crate) fn timed_out(&self) -> bool {
        matches!(self.status, Err(Error::Timeout))
    }

    /// The validated SENSB_RES, if the slot held exactly one device.
    pub(crate) fn identified(&self) -> Option<SensbRes> {
        match self.status {
            Ok(()) => SensbRes::parse(&self.response).ok(),
            Err(_) => None,
        }
    }

    pub(crate) fn into_result(self) -> Result<Vec<u8>> {
        self.status.map(|()| self.response)
    }
}

/// NFC-B poller handle that enforces initialization state at compile time.
pub struct Poller<State = Uninitialized> {
    pub(crate) transceiver: Box<dyn Transceiver>,
    pub(crate) config: PollerConfig,
    _state: PhantomData<State>,
}

impl Poller<Uninitialized> {
    /// Create a Poller from an existing Transceiver instance, with the
    /// default AFI and PARAM.
    pub fn new_with_transceiver(transceiver: Box<dyn Transceiver>) -> Self {
        Self::with_config(transceiver, PollerConfig::default())
    }

    /// Create a Poller with an explicit session configuration.
    pub fn with_config(transceiver: Box<dyn Transceiver>, config: PollerConfig) -> Self {
        Self {
            transceiver,
            config,
            _state: PhantomData,
        }
    }

    /// Configure the transceiver for NFC-B polling at 106 kbit/s. The
    /// session keeps the AFI/PARAM this handle was created with.
    pub fn initialize(self) -> Result<Poller<Initialized>> {
        let mut this = self;
        configure_rf(&mut *this.transceiver)?;
        debug!(
            "NFC-B poller initialized (AFI {:#04x}, PARAM {:#04x})",
            this.config.afi(),
            this.config.param()
        );

        Ok(Poller {
            transceiver: this.transceiver,
            config: this.config,
            _state: PhantomData,
        })
    }

    /// Same as `initialize` but with an explicit AFI and PARAM. Only the
    /// advanced-feature and extended-SENSB_RES bits of PARAM are kept.
    pub fn initialize_with_params(self, afi: u8, param: u8) -> Result<Poller<Initialized>> {
        let mut this = self;
        this.config = PollerConfig::new(afi, param);
        this.initialize()
    }

    /// Current AFI/PARAM session values.
    pub fn config(&self) -> PollerConfig {
        self.config
    }
}

impl Poller<Initialized> {
    /// Current AFI/PARAM session values.
    pub fn config(&self) -> PollerConfig {
        self.config
    }

    /// Re-run the RF configuration and replace AFI/PARAM for following
    /// rounds.
    pub fn reconfigure(&mut self, afi: u8, param: u8) -> Result<()> {
        configure_rf(&mut *self.transceiver)?;
        self.config = PollerConfig::new(afi, param);
        Ok(())
    }

    /// Send SENSB_REQ or ALLB_REQ and return the validated SENSB_RES bytes.
    ///
    /// A garbled reception (CRC or framing error) is not an error: it
    /// returns an empty buffer so the caller can treat it as a collision.
    pub fn check_presence(&mut self, sens: SensCommand, slots: SlotCount) -> Result<Vec<u8>> {
        self.presence_exchange(sens, slots).into_result()
    }

    /// Open slot `slot_code` (1..=16) and return the validated SENSB_RES
    /// bytes. A garbled reception is reported as `Error::Collision`.
    pub fn slot_marker(&mut self, slot_code: u8) -> Result<Vec<u8>> {
        validate_slot_code(slot_code)?;
        self.slot_marker_exchange(slot_code).into_result()
    }

    /// Put the device with `nfcid0` into SLEEP state.
    pub fn sleep(&mut self, nfcid0: &Nfcid0) -> Result<()> {
        let cmd = Command::SlpbReq { nfcid0: *nfcid0 };
        let rx = self.transceive(&cmd)?;
        Response::decode(&cmd, &rx).map(|_| ())
    }

    /// Look for NFC-B devices with a single-slot SENSB_REQ.
    ///
    /// Hand the returned bytes to an ISO collision resolution to continue
    /// from this response instead of polling again.
    pub fn technology_detection(&mut self, mode: ComplianceMode) -> Result<Vec<u8>> {
        debug!("{} technology detection", mode);
        self.presence_exchange(SensCommand::SensbReq, SlotCount::One)
            .into_result()
    }

    pub(crate) fn presence_exchange(&mut self, sens: SensCommand, slots: SlotCount) -> Exchange {
        let cmd = Command::SensbReq {
            afi: self.config.afi(),
            param: self.config.param(),
            sens,
            slots,
        };
        match self.transceive(&cmd) {
            Ok(rx) => {
                let status = SensbRes::parse(&rx).map(|_| ());
                Exchange { response: rx, status }
            }
            Err(e) if e.is_transmission_error() => {
                trace!("garbled answer to {:?}: {}", sens, e);
                Exchange::carried(Vec::new())
            }
            Err(e) => Exchange {
                response: Vec::new(),
                status: Err(e),
            },
        }
    }

    pub(crate) fn slot_marker_exchange(&mut self, slot_code: u8) -> Exchange {
        let cmd = Command::SlotMarker { slot_code };
        match self.transceive(&cmd) {
            Ok(rx) => {
                let status = SensbRes::parse(&rx).map(|_| ());
                Exchange { response: rx, status }
            }
            Err(e) => {
                let status = if e.is_transmission_error() {
                    Err(Error::Collision)
                } else {
                    Err(e)
                };
                Exchange {
                    response: Vec::new(),
                    status,
                }
            }
        }
    }

    fn transceive(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let tx = cmd.encode();
        trace!("tx [{}]", bytes_to_hex_spaced(&tx));
        let rx = self
            .transceiver
            .transceive(&tx, cmd.max_response_len(), cmd.fwt())?;
        trace!("rx [{}]", bytes_to_hex_spaced(&rx));
        Ok(rx)
    }
}

fn configure_rf(transceiver: &mut dyn Transceiver) -> Result<()> {
    transceiver.set_mode(RfMode::PollNfcb, BitRate::Br106, BitRate::Br106)?;
    transceiver.set_error_handling(ErrorHandling::Nfc);
    transceiver.set_guard_time(GT_NFCB);
    transceiver.set_fdt_listen(FDT_LISTEN_NFCB_POLLER);
    transceiver.set_fdt_poll(FDT_POLL_NFCB_POLLER);
    Ok(())
}
