// libnfcb/src/constants.rs
//! NFC-B protocol constants (NFC Forum Digital / ISO/IEC 14443-3 Type B)

/// SENSB_REQ / ALLB_REQ command byte, also the low nibble of SLOT_MARKER
pub const CMD_SENSB_REQ: u8 = 0x05;
/// SENSB_RES (ATQB) command byte
pub const CMD_SENSB_RES: u8 = 0x50;
/// SLPB_REQ (HLTB) command byte
pub const CMD_SLPB_REQ: u8 = 0x50;
/// SLPB_RES (HLTB answer) command byte
pub const CMD_SLPB_RES: u8 = 0x00;

/// NFCID0 length in bytes
pub const NFCID0_LEN: usize = 4;

/// Standard SENSB_RES length
pub const SENSB_RES_LEN: usize = 12;
/// Extended SENSB_RES length (extra SFGI byte)
pub const SENSB_RES_EXT_LEN: usize = 13;
/// SENSB_REQ length
pub const SENSB_REQ_LEN: usize = 3;
/// SLPB_REQ length
pub const SLPB_REQ_LEN: usize = 1 + NFCID0_LEN;
/// SLPB_RES length
pub const SLPB_RES_LEN: usize = 1;

/// PARAM bit: advanced protocol features supported
pub const SENSB_REQ_ADV_FEATURE: u8 = 0x20;
/// PARAM bit: extended SENSB_RES supported
pub const SENSB_REQ_EXT_SENSB_RES_SUPPORTED: u8 = 0x10;
/// PARAM bits the session configuration may carry
pub const SENSB_REQ_PARAM_MASK: u8 = SENSB_REQ_ADV_FEATURE | SENSB_REQ_EXT_SENSB_RES_SUPPORTED;

/// Protocol type RFU bit in SENSB_RES, must be zero
pub const SENSB_RES_PROT_TYPE_RFU: u8 = 0x08;

/// Slot code position inside the SLOT_MARKER byte
pub const SLOT_MARKER_SC_SHIFT: u8 = 4;
/// Lowest valid slot code
pub const SLOT_MARKER_SLOTCODE_MIN: u8 = 1;
/// Highest valid slot code
pub const SLOT_MARKER_SLOTCODE_MAX: u8 = 16;

/// Default AFI: all application families
pub const DEFAULT_AFI: u8 = 0x00;
/// Default PARAM: no advanced features, standard SENSB_RES only
pub const DEFAULT_PARAM: u8 = 0x00;

/// Carrier frequency (fc) in Hz
pub const CARRIER_HZ: u64 = 13_560_000;

/// FWT(SENSB) in carrier cycles
pub const FWT_SENSB: u32 = 7680;
/// dTbPoll (20 ms) in carrier cycles
pub const DTPOLL_20: u32 = 20 * 13_560;
/// FWT used for SLOT_MARKER and SLPB_REQ exchanges
pub const ACTIVATION_FWT: u32 = FWT_SENSB + DTPOLL_20;

/// Guard time before the first NFC-B poll (5 ms) in carrier cycles
pub const GT_NFCB: u32 = 5 * 13_560;
/// FDT listen used while polling NFC-B, in carrier cycles
pub const FDT_LISTEN_NFCB_POLLER: u32 = 1008;
/// FDT poll used while polling NFC-B, in carrier cycles
pub const FDT_POLL_NFCB_POLLER: u32 = 6780;
