// libnfcb/src/transport/mock.rs

use crate::transport::traits::Transceiver;
use crate::types::{BitRate, ErrorHandling, RfMode};
use crate::{Error, Result};

/// Mock transceiver for unit tests. Records every transmitted frame and
/// RF setting, and plays back queued outcomes in order. An empty queue
/// behaves like an empty field (timeout).
#[derive(Debug, Default)]
pub struct MockTransceiver {
    /// Every transmitted frame
    pub sent: Vec<Vec<u8>>,
    /// (max_rx_len, fwt) of every transceive call
    pub rx_params: Vec<(usize, u32)>,
    /// Queued transceive outcomes, played front first
    pub outcomes: Vec<Result<Vec<u8>>>,
    /// Last mode set
    pub mode: Option<(RfMode, BitRate, BitRate)>,
    /// Last error handling policy set
    pub error_handling: Option<ErrorHandling>,
    /// Last guard time set, in carrier cycles
    pub guard_time: Option<u32>,
    /// Last FDT listen set, in carrier cycles
    pub fdt_listen: Option<u32>,
    /// Last FDT poll set, in carrier cycles
    pub fdt_poll: Option<u32>,
    /// Testing hook: number of set_mode calls that should fail
    pub mode_failures: usize,
}

impl MockTransceiver {
    /// Mock with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a received frame.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.outcomes.push(Ok(resp));
    }

    /// Queue a failed exchange.
    pub fn push_error(&mut self, err: Error) {
        self.outcomes.push(Err(err));
    }

    /// Remove and return the last transmitted frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceiver for MockTransceiver {
    fn set_mode(&mut self, mode: RfMode, tx_rate: BitRate, rx_rate: BitRate) -> Result<()> {
        if self.mode_failures > 0 {
            self.mode_failures -= 1;
            return Err(Error::Transceiver("set_mode rejected".into()));
        }
        self.mode = Some((mode, tx_rate, rx_rate));
        Ok(())
    }

    fn set_error_handling(&mut self, handling: ErrorHandling) {
        self.error_handling = Some(handling);
    }

    fn set_guard_time(&mut self, fc: u32) {
        self.guard_time = Some(fc);
    }

    fn set_fdt_listen(&mut self, fc: u32) {
        self.fdt_listen = Some(fc);
    }

    fn set_fdt_poll(&mut self, fc: u32) {
        self.fdt_poll = Some(fc);
    }

    fn transceive(&mut self, tx: &[u8], max_rx_len: usize, fwt: u32) -> Result<Vec<u8>> {
        self.sent.push(tx.to_vec());
        self.rx_params.push((max_rx_len, fwt));
        if self.outcomes.is_empty() {
            Err(Error::Timeout)
        } else {
            self.outcomes.remove(0)
        }
    }
}
