// libnfcb/src/protocol/responses/sleep.rs

use crate::constants::{CMD_SLPB_RES, SLPB_RES_LEN};
use crate::protocol::parser;
use crate::{Error, Result};

/// Decode SLPB_RES: exactly one byte, 0x00.
pub fn decode_slpb_res(data: &[u8]) -> Result<()> {
    if data.len() != SLPB_RES_LEN {
        return Err(Error::InvalidLength {
            expected: SLPB_RES_LEN,
            actual: data.len(),
        });
    }
    parser::expect_response_code(data, CMD_SLPB_RES)
}
