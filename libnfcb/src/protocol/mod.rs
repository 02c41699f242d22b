// libnfcb/src/protocol/mod.rs

/// Poll-side requests.
pub mod commands;
/// Bounds-checked field readers.
pub mod parser;
/// Listen-side answers.
pub mod responses;
pub mod timing;

pub use commands::{Command, encode_sensb_req, encode_slot_marker, encode_slpb_req, validate_slot_code};
pub use responses::{Response, SensbRes, decode_slpb_res};
pub use timing::tr2_to_fdt;
