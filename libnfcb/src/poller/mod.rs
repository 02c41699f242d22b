// libnfcb/src/poller/mod.rs

/// Poller construction.
pub mod builder;
pub mod collision;
/// AFI/PARAM session configuration.
pub mod config;
/// Type-state poller handle and single exchanges.
pub mod handle;

pub use builder::PollerBuilder;
pub use collision::Resolution;
pub use config::PollerConfig;
pub use handle::{Initialized, Poller, Uninitialized};
