use serde::Serialize;
use thiserror::Error;

use crate::algorithm::{AesMode, KeySize};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("unsupported key size: {0} bits")]
    InvalidKeySize(u16),
    #[error("key size is not an integer: {0}")]
    MalformedKeySize(String),
}

/// The current user selection, snapshotted by value before the engine starts
/// asynchronous work.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub mode: AesMode,
    pub key_size: KeySize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            mode: AesMode::AesGcm,
            key_size: KeySize::Bits256,
        }
    }
}

/// Owns the current `GenerationParams`. Rejected input keeps the previous
/// valid selection; nothing here triggers a generation.
#[derive(Debug, Default)]
pub struct ParameterSelector {
    current: GenerationParams,
}

impl ParameterSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> GenerationParams {
        self.current
    }

    pub fn set_algorithm(&mut self, raw: &str) -> Result<(), ParamError> {
        self.current.mode = AesMode::parse(raw)?;
        Ok(())
    }

    pub fn set_key_size(&mut self, raw: &str) -> Result<(), ParamError> {
        let bits: u16 = raw
            .trim()
            .parse()
            .map_err(|_| ParamError::MalformedKeySize(raw.to_string()))?;
        self.current.key_size = KeySize::from_bits(bits)?;
        Ok(())
    }
}
