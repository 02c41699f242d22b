// libnfcb/src/transport/traits.rs

use crate::Result;
use crate::types::{BitRate, ErrorHandling, RfMode};

/// RF transceiver capability consumed by the poller. Implementations own
/// modulation, CRC_B and framing; the poller only ever sees complete
/// frames or an error classification.
pub trait Transceiver {
    /// Configure technology/role and bit rates.
    fn set_mode(&mut self, mode: RfMode, tx_rate: BitRate, rx_rate: BitRate) -> Result<()>;

    /// Select the receive error handling policy. Default: ignored.
    fn set_error_handling(&mut self, _handling: ErrorHandling) {}

    /// Guard time before the first frame, in carrier cycles. Default: ignored.
    fn set_guard_time(&mut self, _fc: u32) {}

    /// Frame delay time listen→poll, in carrier cycles. Default: ignored.
    fn set_fdt_listen(&mut self, _fc: u32) {}

    /// Frame delay time poll→listen, in carrier cycles. Default: ignored.
    fn set_fdt_poll(&mut self, _fc: u32) {}

    /// Transmit `tx` and block until a frame of at most `max_rx_len` bytes
    /// is received or `fwt` carrier cycles elapse.
    ///
    /// Errors: `Timeout` when nothing was received, `Crc` / `Framing` for a
    /// garbled reception, `Transceiver` for anything else.
    fn transceive(&mut self, tx: &[u8], max_rx_len: usize, fwt: u32) -> Result<Vec<u8>>;
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn set_mode(&mut self, mode: RfMode, tx_rate: BitRate, rx_rate: BitRate) -> Result<()> {
        (**self).set_mode(mode, tx_rate, rx_rate)
    }
    fn set_error_handling(&mut self, handling: ErrorHandling) {
        (**self).set_error_handling(handling)
    }
    fn set_guard_time(&mut self, fc: u32) {
        (**self).set_guard_time(fc)
    }
    fn set_fdt_listen(&mut self, fc: u32) {
        (**self).set_fdt_listen(fc)
    }
    fn set_fdt_poll(&mut self, fc: u32) {
        (**self).set_fdt_poll(fc)
    }
    fn transceive(&mut self, tx: &[u8], max_rx_len: usize, fwt: u32) -> Result<Vec<u8>> {
        (**self).transceive(tx, max_rx_len, fwt)
    }
}
