// libnfcb/src/lib.rs

//! libnfcb
//!
//! Pure Rust NFC-B (ISO/IEC 14443-3 Type B) poller: SENSB_REQ/ALLB_REQ,
//! SLOT_MARKER and SLPB_REQ exchanges plus slotted anticollision under
//! ISO, EMVCo and NFC Forum rules, on top of any RF `Transceiver`.

#![warn(missing_docs)]

/// Listen devices identified by anticollision.
pub mod card;
/// NFC-B frame constants and timings.
pub mod constants;
/// Error type and `Result` alias.
pub mod error;
/// The NFC-B poller and its anticollision engine.
pub mod poller;
/// Common imports.
pub mod prelude;
/// Request encoders and response decoders.
pub mod protocol;
/// Mock and simulated transceivers for tests.
pub mod test_support;
/// RF transceiver abstraction.
pub mod transport;
/// Small value types shared across the crate.
pub mod types;
/// Hex and timing helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
