use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::ParamError;

/// Supported AES modes. The identifier strings double as the wire values the
/// presentation layer sends back through `set_algorithm`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesMode {
    #[serde(rename = "AES-CBC")]
    AesCbc,
    #[serde(rename = "AES-GCM")]
    AesGcm,
}

impl AesMode {
    pub const ALL: [AesMode; 2] = [AesMode::AesCbc, AesMode::AesGcm];

    pub fn id(self) -> &'static str {
        match self {
            AesMode::AesCbc => "AES-CBC",
            AesMode::AesGcm => "AES-GCM",
        }
    }

    /// IV length fixed by mode: GCM takes the recommended 96-bit nonce,
    /// CBC requires a full 128-bit block. Not a user-facing knob.
    pub fn iv_len(self) -> usize {
        match self {
            AesMode::AesGcm => 12,
            AesMode::AesCbc => 16,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ParamError> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.id() == raw)
            .ok_or_else(|| ParamError::UnknownAlgorithm(raw.to_string()))
    }
}

impl fmt::Display for AesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Supported key lengths.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(into = "u16", try_from = "u16")]
pub enum KeySize {
    Bits128,
    Bits256,
}

impl KeySize {
    pub const ALL: [KeySize; 2] = [KeySize::Bits128, KeySize::Bits256];

    pub fn bits(self) -> u16 {
        match self {
            KeySize::Bits128 => 128,
            KeySize::Bits256 => 256,
        }
    }

    pub fn byte_len(self) -> usize {
        usize::from(self.bits() / 8)
    }

    pub fn from_bits(bits: u16) -> Result<Self, ParamError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.bits() == bits)
            .ok_or(ParamError::InvalidKeySize(bits))
    }
}

impl From<KeySize> for u16 {
    fn from(size: KeySize) -> u16 {
        size.bits()
    }
}

impl TryFrom<u16> for KeySize {
    type Error = ParamError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        KeySize::from_bits(bits)
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub mode: AesMode,
}

/// The fixed algorithm list, stable order, same result on every call.
pub fn algorithms() -> &'static [AlgorithmDescriptor] {
    const ALGORITHMS: [AlgorithmDescriptor; 2] = [
        AlgorithmDescriptor {
            name: "AES-CBC",
            mode: AesMode::AesCbc,
        },
        AlgorithmDescriptor {
            name: "AES-GCM",
            mode: AesMode::AesGcm,
        },
    ];
    &ALGORITHMS
}

/// The fixed key-size list, in bits.
pub fn key_sizes() -> &'static [u16] {
    const KEY_SIZES: [u16; 2] = [128, 256];
    &KEY_SIZES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_length_is_fixed_by_mode() {
        assert_eq!(AesMode::AesGcm.iv_len(), 12);
        assert_eq!(AesMode::AesCbc.iv_len(), 16);
    }

    #[test]
    fn parse_accepts_only_known_identifiers() {
        assert_eq!(AesMode::parse("AES-GCM").unwrap(), AesMode::AesGcm);
        assert_eq!(AesMode::parse("AES-CBC").unwrap(), AesMode::AesCbc);
        assert!(AesMode::parse("AES-CTR").is_err());
        assert!(AesMode::parse("aes-gcm").is_err());
    }

    #[test]
    fn key_size_byte_lengths() {
        assert_eq!(KeySize::Bits128.byte_len(), 16);
        assert_eq!(KeySize::Bits256.byte_len(), 32);
        assert!(KeySize::from_bits(192).is_err());
    }

    #[test]
    fn algorithm_list_is_stable() {
        let first: Vec<_> = algorithms().iter().map(|a| a.name).collect();
        let second: Vec<_> = algorithms().iter().map(|a| a.name).collect();
        assert_eq!(first, ["AES-CBC", "AES-GCM"]);
        assert_eq!(first, second);
        assert_eq!(key_sizes(), &[128, 256]);
    }
}
