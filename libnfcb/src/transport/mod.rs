// libnfcb/src/transport/mod.rs

/// Scripted transceiver for tests.
pub mod mock;
/// The `Transceiver` trait.
pub mod traits;

pub use mock::MockTransceiver;
pub use traits::Transceiver;
