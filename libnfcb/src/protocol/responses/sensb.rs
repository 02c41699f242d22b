// libnfcb/src/protocol/responses/sensb.rs

use crate::constants::{
    CMD_SENSB_RES, SENSB_RES_EXT_LEN, SENSB_RES_LEN, SENSB_RES_PROT_TYPE_RFU,
};
use crate::protocol::parser;
use crate::protocol::timing::{TR2_MASK, tr2_to_fdt};
use crate::types::Nfcid0;
use crate::{Error, Result};

const NFCID0_OFFSET: usize = 1;
const APP_DATA_OFFSET: usize = 5;
const PROT_INFO_OFFSET: usize = 9;
const FSCI_PROT_TYPE_OFFSET: usize = 10;
const SFGI_OFFSET: usize = 12;

/// Validated SENSB_RES (ATQB).
///
/// Layout: cmd(1) + NFCID0(4) + application data(4) + protocol info(3),
/// followed by one more protocol info byte (SFGI) in the extended form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensbRes {
    nfcid0: Nfcid0,
    app_data: [u8; 4],
    prot_info: [u8; 3],
    sfgi_byte: Option<u8>,
}

impl SensbRes {
    /// Standard-length SENSB_RES from its fields.
    pub fn new(nfcid0: Nfcid0, app_data: [u8; 4], prot_info: [u8; 3]) -> Self {
        Self {
            nfcid0,
            app_data,
            prot_info,
            sfgi_byte: None,
        }
    }

    /// Turn this into an extended SENSB_RES carrying the 4th protocol
    /// info byte.
    pub fn with_extended_byte(mut self, byte: u8) -> Self {
        self.sfgi_byte = Some(byte);
        self
    }

    /// Validate a received buffer. Accepts only the standard or extended
    /// length, a clear protocol type RFU bit and the SENSB_RES command echo.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != SENSB_RES_LEN && data.len() != SENSB_RES_EXT_LEN {
            return Err(Error::InvalidResponseLength { actual: data.len() });
        }

        let protocol_type = data[FSCI_PROT_TYPE_OFFSET];
        if protocol_type & SENSB_RES_PROT_TYPE_RFU != 0 {
            return Err(Error::ReservedBitsSet { protocol_type });
        }
        parser::expect_response_code(data, CMD_SENSB_RES)?;

        Ok(Self {
            nfcid0: parser::nfcid0_at(data, NFCID0_OFFSET)?,
            app_data: parser::array_at(data, APP_DATA_OFFSET)?,
            prot_info: parser::array_at(data, PROT_INFO_OFFSET)?,
            sfgi_byte: data.get(SFGI_OFFSET).copied(),
        })
    }

    /// Wire form, as a listen device would send it.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.frame_len());
        out.push(CMD_SENSB_RES);
        out.extend_from_slice(self.nfcid0.as_bytes());
        out.extend_from_slice(&self.app_data);
        out.extend_from_slice(&self.prot_info);
        out.extend(self.sfgi_byte);
        out
    }

    /// 12 or 13.
    pub fn frame_len(&self) -> usize {
        if self.is_extended() {
            SENSB_RES_EXT_LEN
        } else {
            SENSB_RES_LEN
        }
    }

    /// True for the 13-byte form.
    pub fn is_extended(&self) -> bool {
        self.sfgi_byte.is_some()
    }

    /// PUPI of the answering device.
    pub fn nfcid0(&self) -> &Nfcid0 {
        &self.nfcid0
    }

    /// Application family the device belongs to.
    pub fn afi(&self) -> u8 {
        self.app_data[0]
    }

    /// CRC_B(AID) as transmitted.
    pub fn crc_aid(&self) -> [u8; 2] {
        [self.app_data[1], self.app_data[2]]
    }

    /// Number of applications byte.
    pub fn number_of_applications(&self) -> u8 {
        self.app_data[3]
    }

    /// Supported bit rates, first protocol info byte.
    pub fn bit_rate_capability(&self) -> u8 {
        self.prot_info[0]
    }

    /// Maximum frame size code of the listen device.
    pub fn fsci(&self) -> u8 {
        self.prot_info[1] >> 4
    }

    /// Low nibble of the second protocol info byte.
    pub fn protocol_type(&self) -> u8 {
        self.prot_info[1] & 0x0f
    }

    /// Device is compliant with ISO/IEC 14443-4.
    pub fn is_iso_dep_supported(&self) -> bool {
        self.protocol_type() & 0x01 != 0
    }

    /// 2-bit TR2 code taken from the protocol type.
    pub fn tr2_code(&self) -> u8 {
        (self.protocol_type() >> 1) & TR2_MASK
    }

    /// Minimum delay before the next poll frame, in carrier cycles.
    pub fn tr2_fdt(&self) -> u32 {
        tr2_to_fdt(self.tr2_code())
    }

    /// Frame waiting time integer.
    pub fn fwi(&self) -> u8 {
        self.prot_info[2] >> 4
    }

    /// Application data coding.
    pub fn adc(&self) -> u8 {
        (self.prot_info[2] >> 2) & 0x03
    }

    /// NAD supported (FO bit).
    pub fn supports_nad(&self) -> bool {
        self.prot_info[2] & 0x02 != 0
    }

    /// CID/DID supported (FO bit).
    pub fn supports_did(&self) -> bool {
        self.prot_info[2] & 0x01 != 0
    }

    /// Start-up frame guard time integer, extended responses only.
    pub fn sfgi(&self) -> Option<u8> {
        self.sfgi_byte.map(|b| b >> 4)
    }
}
