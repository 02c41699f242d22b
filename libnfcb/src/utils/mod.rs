//! Small helpers shared across the crate: hex rendering for frames and
//! identifiers, and carrier-cycle timing conversions.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
