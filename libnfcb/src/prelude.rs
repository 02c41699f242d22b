// libnfcb/src/prelude.rs

pub use crate::card::{DeviceList, ListenDevice};
pub use crate::poller::{Initialized, Poller, PollerBuilder, PollerConfig, Resolution, Uninitialized};
pub use crate::protocol::{Command, Response, SensbRes, tr2_to_fdt};
pub use crate::transport::Transceiver;
pub use crate::{ComplianceMode, Error, Nfcid0, Result, SensCommand, SlotCount};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, fc_to_duration, ms_to_fc, parse_hex};
