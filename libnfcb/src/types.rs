// libnfcb/src/types.rs

use crate::Error;
use crate::constants::NFCID0_LEN;
use derive_more::Display;
use std::convert::TryFrom;

/// NFCID0 - Newtype Pattern (4 バイト, PUPI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nfcid0([u8; NFCID0_LEN]);

impl Nfcid0 {
    /// Wrap raw NFCID0 bytes.
    pub fn from_bytes(bytes: [u8; NFCID0_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; NFCID0_LEN] {
        &self.0
    }

    /// Lowercase hex, e.g. for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Nfcid0 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != NFCID0_LEN {
            return Err(Error::InvalidLength {
                expected: NFCID0_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; NFCID0_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Number of anticollision time slots. The discriminant is the slot
/// exponent `N` carried in the low bits of the SENSB_REQ PARAM byte.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotCount {
    /// Single slot
    #[display(fmt = "1 slot")]
    One = 0,
    /// 2 slots
    #[display(fmt = "2 slots")]
    Two = 1,
    /// 4 slots
    #[display(fmt = "4 slots")]
    Four = 2,
    /// 8 slots
    #[display(fmt = "8 slots")]
    Eight = 3,
    /// 16 slots
    #[display(fmt = "16 slots")]
    Sixteen = 4,
}

impl SlotCount {
    /// Every class, smallest first.
    pub const ALL: [SlotCount; 5] = [
        SlotCount::One,
        SlotCount::Two,
        SlotCount::Four,
        SlotCount::Eight,
        SlotCount::Sixteen,
    ];

    /// Slot exponent `N`.
    pub fn exponent(self) -> u8 {
        self as u8
    }

    /// Number of slots in a pass (`1 << N`).
    pub fn count(self) -> u8 {
        1u8 << self.exponent()
    }

    /// Class for exponent `N`, if in range.
    pub fn from_exponent(exponent: u8) -> Option<Self> {
        Self::ALL.get(exponent as usize).copied()
    }

    /// The next larger slot-count class, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_exponent(self.exponent() + 1)
    }
}

impl TryFrom<u8> for SlotCount {
    type Error = Error;

    /// Convert a number of slots (1, 2, 4, 8 or 16).
    fn try_from(slots: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.count() == slots)
            .ok_or_else(|| Error::InvalidParameter(format!("invalid number of slots: {}", slots)))
    }
}

/// SENSB_REQ flavour, OR-ed into the PARAM byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensCommand {
    /// SENSB_REQ: only devices in IDLE state answer
    SensbReq = 0x00,
    /// ALLB_REQ: devices in SLEEP state answer too
    AllbReq = 0x08,
}

/// Anticollision rulebook applied for a whole round.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComplianceMode {
    /// ISO/IEC 14443-3, NFC Forum Activity 1.0 two-phase detection
    #[display(fmt = "ISO")]
    Iso,
    /// EMVCo contactless, resolves a single device only
    #[display(fmt = "EMVCo")]
    Emv,
    /// NFC Forum Activity 1.1
    #[display(fmt = "NFC Forum")]
    Nfc,
}

impl ComplianceMode {
    /// Whether the round opens with an ALLB_REQ wake-up. ISO continues
    /// from a previous technology detection instead.
    pub fn wakes_all(self) -> bool {
        self != ComplianceMode::Iso
    }

    /// Whether the wake-up must produce some response.
    pub fn requires_wakeup_response(self) -> bool {
        self == ComplianceMode::Emv
    }

    /// Whether the last device found in a pass is put to sleep before the
    /// pass is repeated.
    pub fn sleeps_before_repeat(self) -> bool {
        self == ComplianceMode::Nfc
    }
}

/// RF technology/role configured on the transceiver. The poller only
/// ever selects NFC-B poll mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfMode {
    /// Poll for NFC-B (ISO/IEC 14443 Type B) listen devices
    PollNfcb,
}

/// Bit rate requested from the transceiver. NFC-B anticollision always runs
/// at the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitRate {
    /// 106 kbit/s (fc/128)
    Br106,
}

/// Receive error handling policy of the transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorHandling {
    /// NFC Forum Digital rules for garbled frames
    Nfc,
}
