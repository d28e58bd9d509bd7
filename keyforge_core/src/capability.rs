//! Capability seam: the secure random / key-generation backend and the
//! clipboard are external services the engine drives but never implements.

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::algorithm::{AesMode, KeySize};

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("capability is not available on this system")]
    Unavailable,
    #[error("capability backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsage {
    Encrypt,
    Decrypt,
}

/// Parameters for one key-generation request. `extractable` and `usages` are
/// capability-level metadata; no encrypt/decrypt is ever performed here.
#[derive(Debug, Clone, Copy)]
pub struct KeySpec {
    pub mode: AesMode,
    pub size: KeySize,
    pub extractable: bool,
    pub usages: &'static [KeyUsage],
}

impl KeySpec {
    pub fn symmetric(mode: AesMode, size: KeySize) -> Self {
        KeySpec {
            mode,
            size,
            extractable: true,
            usages: &[KeyUsage::Encrypt, KeyUsage::Decrypt],
        }
    }
}

/// Opaque handle to generated key material. Raw bytes are zeroized on drop.
pub struct KeyHandle {
    bytes: Zeroizing<Vec<u8>>,
}

impl KeyHandle {
    pub fn new(bytes: Vec<u8>) -> Self {
        KeyHandle {
            bytes: Zeroizing::new(bytes),
        }
    }

    pub fn raw(&self) -> &[u8] {
        &self.bytes
    }
}

pub trait KeyProvider: Send + Sync {
    /// Whether the secure generator exists at all. Checked once per
    /// generation attempt, before any work starts.
    fn available(&self) -> bool;

    fn generate_key(&self, spec: &KeySpec) -> Result<KeyHandle, CapabilityError>;

    fn export_raw(&self, handle: &KeyHandle) -> Result<Zeroizing<Vec<u8>>, CapabilityError>;

    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, CapabilityError>;
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

/// Production provider backed by the OS CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsKeyProvider;

impl KeyProvider for OsKeyProvider {
    fn available(&self) -> bool {
        let mut probe = [0u8; 1];
        OsRng.try_fill_bytes(&mut probe).is_ok()
    }

    fn generate_key(&self, spec: &KeySpec) -> Result<KeyHandle, CapabilityError> {
        let mut bytes = vec![0u8; spec.size.byte_len()];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CapabilityError::Backend(e.to_string()))?;
        Ok(KeyHandle::new(bytes))
    }

    fn export_raw(&self, handle: &KeyHandle) -> Result<Zeroizing<Vec<u8>>, CapabilityError> {
        Ok(handle.bytes.clone())
    }

    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, CapabilityError> {
        let mut bytes = vec![0u8; n];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CapabilityError::Backend(e.to_string()))?;
        Ok(bytes)
    }
}

/// Clipboard stand-in for headless hosts. Writes always fail; the engine
/// logs and moves on.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_provider_generates_requested_lengths() {
        let provider = OsKeyProvider;
        assert!(provider.available());

        let spec = KeySpec::symmetric(AesMode::AesGcm, KeySize::Bits256);
        assert!(spec.extractable);
        assert_eq!(spec.usages, [KeyUsage::Encrypt, KeyUsage::Decrypt]);

        let handle = provider.generate_key(&spec).unwrap();
        let raw = provider.export_raw(&handle).unwrap();
        assert_eq!(raw.len(), 32);

        let iv = provider.random_bytes(12).unwrap();
        assert_eq!(iv.len(), 12);
    }

    #[test]
    fn os_provider_output_is_not_constant() {
        let provider = OsKeyProvider;
        let a = provider.random_bytes(16).unwrap();
        let b = provider.random_bytes(16).unwrap();
        assert_ne!(a, b);
    }
}
