// libnfcb/src/protocol/parser.rs

use crate::types::Nfcid0;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Copy `N` bytes starting at `idx` into an array.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    ensure_len(data, idx + N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&data[idx..idx + N]);
    Ok(out)
}

/// Parse an NFCID0 (4 bytes) at `start`.
pub fn nfcid0_at(data: &[u8], start: usize) -> Result<Nfcid0> {
    array_at(data, start).map(Nfcid0::from_bytes)
}

/// Ensure the first byte (command echo) equals `expected`.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
