// libnfcb/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected before anything was transmitted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// SENSB_RES of neither standard nor extended length.
    #[error("invalid SENSB_RES length: expected 12 or 13, got {actual}")]
    InvalidResponseLength {
        /// Received length.
        actual: usize,
    },

    /// Frame of the wrong length.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the frame must have.
        expected: usize,
        /// Received length.
        actual: usize,
    },

    /// Command byte of the answer does not match the request.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Response code of the request sent.
        expected: u8,
        /// First received byte.
        actual: u8,
    },

    /// Protocol type RFU bit set in SENSB_RES.
    #[error("reserved protocol type bits set: {protocol_type:#04x}")]
    ReservedBitsSet {
        /// Protocol type byte as received.
        protocol_type: u8,
    },

    /// Nothing was received within the frame wait time.
    #[error("operation timed out")]
    Timeout,

    /// CRC_B check failed on the received frame.
    #[error("crc error on received frame")]
    Crc,

    /// Malformed frame, or no answer where one is required.
    #[error("framing error on received frame")]
    Framing,

    /// Two or more listen devices answered in the same slot.
    #[error("rf collision detected")]
    Collision,

    /// Any other failure reported by the RF layer.
    #[error("transceiver error: {0}")]
    Transceiver(String),
}

impl Error {
    /// True for errors raised on a well-received frame that fails
    /// structural validation.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidResponseLength { .. }
                | Error::InvalidLength { .. }
                | Error::UnexpectedResponse { .. }
                | Error::ReservedBitsSet { .. }
        )
    }

    /// True for garbled receptions reported by the RF layer.
    pub fn is_transmission_error(&self) -> bool {
        matches!(self, Error::Crc | Error::Framing)
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
