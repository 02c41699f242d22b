// libnfcb/src/protocol/timing.rs
//! TR2 (minimum listen-to-poll frame delay) lookup.

/// TR2 values in carrier cycles, indexed by the 2-bit TR2 code of the
/// SENSB_RES protocol type.
const TR2_TABLE: [u32; 4] = [1792, 3328, 5376, 9472];

/// Mask of the TR2 code once shifted out of the protocol type.
pub const TR2_MASK: u8 = 0x03;

/// Map a TR2 code to the frame delay time (1/fc) the RF layer must wait
/// before the next poll frame. Only the low two bits are used.
pub fn tr2_to_fdt(tr2_code: u8) -> u32 {
    TR2_TABLE[(tr2_code & TR2_MASK) as usize]
}
