//! Generation engine: runs one key+IV attempt per invocation, keeps the
//! observable state consistent around it, and manages the transient
//! copy-to-clipboard indicators.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::capability::{CapabilityError, Clipboard, KeyProvider, KeySpec};
use crate::params::GenerationParams;

/// How long a copied indicator stays lit.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

const UNAVAILABLE_MSG: &str =
    "Secure key generation is not available on this system.";
const GENERATION_FAILED_MSG: &str =
    "An error occurred during key generation. See the application log for details.";

/// The most recent successful output. Both fields are base64 (standard
/// alphabet, padded) and are only ever published together.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaterial {
    pub key: String,
    pub iv: String,
}

/// Everything the presentation layer observes.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub generating: bool,
    pub last_error: Option<String>,
    pub key_copied: bool,
    pub iv_copied: bool,
    pub material: Option<GeneratedMaterial>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Key,
    Iv,
}

#[derive(Default)]
struct EngineState {
    generating: bool,
    last_error: Option<String>,
    material: Option<GeneratedMaterial>,
    // Monotonic token per generate() invocation; issued together with the
    // start-phase clear so a stale start can never trample a newer outcome.
    issued: u64,
    // Newest generation token whose outcome has been published.
    committed: u64,
    key_copied: bool,
    iv_copied: bool,
    key_copy_token: u64,
    iv_copy_token: u64,
}

struct Shared {
    provider: Arc<dyn KeyProvider>,
    clipboard: Arc<dyn Clipboard>,
    state: Mutex<EngineState>,
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[derive(Clone)]
pub struct Engine {
    shared: Arc<Shared>,
}

impl Engine {
    pub fn new(provider: Arc<dyn KeyProvider>, clipboard: Arc<dyn Clipboard>) -> Self {
        Engine {
            shared: Arc::new(Shared {
                provider,
                clipboard,
                state: Mutex::new(EngineState::default()),
            }),
        }
    }

    pub fn state(&self) -> StateSnapshot {
        let s = self.shared.lock_state();
        StateSnapshot {
            generating: s.generating,
            last_error: s.last_error.clone(),
            key_copied: s.key_copied,
            iv_copied: s.iv_copied,
            material: s.material.clone(),
        }
    }

    /// One generation attempt. Outcome is visible only through the state
    /// snapshot; errors never propagate out of here.
    pub async fn generate(&self, params: GenerationParams) {
        if !self.shared.provider.available() {
            tracing::warn!("generation skipped: secure key provider unavailable");
            self.shared.lock_state().last_error = Some(UNAVAILABLE_MSG.to_string());
            return;
        }

        // Token issuance and the start-phase clear happen in one critical
        // section: an attempt that observes a token also observes every
        // earlier attempt's start, so it can never clear a newer result.
        let token = {
            let mut s = self.shared.lock_state();
            s.issued += 1;
            s.generating = true;
            s.last_error = None;
            s.material = None;
            s.issued
        };

        let outcome = run_attempt(Arc::clone(&self.shared.provider), params).await;

        let mut s = self.shared.lock_state();
        if token >= s.committed {
            s.committed = token;
            match outcome {
                Ok(material) => {
                    s.material = Some(material);
                    s.last_error = None;
                }
                Err(err) => {
                    tracing::error!(
                        %err,
                        mode = %params.mode,
                        key_bits = params.key_size.bits(),
                        "key generation failed"
                    );
                    s.material = None;
                    s.last_error = Some(GENERATION_FAILED_MSG.to_string());
                }
            }
        } else {
            tracing::debug!(token, committed = s.committed, "discarding stale generation");
        }
        // Only the newest-issued attempt settles the in-flight flag.
        if token == s.issued {
            s.generating = false;
        }
    }

    /// Copy `text` and light the matching indicator for `COPY_FEEDBACK`.
    /// A newer copy of the same target supersedes any pending reset, so the
    /// indicator never flickers off early. Must run inside a tokio runtime.
    pub fn copy_to_clipboard(&self, text: Option<&str>, target: CopyTarget) {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return;
        };

        if let Err(err) = self.shared.clipboard.write_text(text) {
            tracing::warn!(%err, ?target, "clipboard write failed");
            return;
        }

        let token = {
            let mut s = self.shared.lock_state();
            match target {
                CopyTarget::Key => {
                    s.key_copied = true;
                    s.key_copy_token += 1;
                    s.key_copy_token
                }
                CopyTarget::Iv => {
                    s.iv_copied = true;
                    s.iv_copy_token += 1;
                    s.iv_copy_token
                }
            }
        };

        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK).await;
            let mut s = shared.lock_state();
            match target {
                CopyTarget::Key if s.key_copy_token == token => s.key_copied = false,
                CopyTarget::Iv if s.iv_copy_token == token => s.iv_copied = false,
                _ => {}
            }
        });
    }
}

async fn run_attempt(
    provider: Arc<dyn KeyProvider>,
    params: GenerationParams,
) -> Result<GeneratedMaterial, CapabilityError> {
    // Both steps must succeed before anything is published; a half-built
    // result never leaves this function.
    tokio::task::spawn_blocking(move || {
        let spec = KeySpec::symmetric(params.mode, params.key_size);
        let handle = provider.generate_key(&spec)?;
        let key = provider.export_raw(&handle)?;
        let iv = provider.random_bytes(params.mode.iv_len())?;
        Ok(GeneratedMaterial {
            key: STANDARD.encode(key.as_slice()),
            iv: STANDARD.encode(&iv),
        })
    })
    .await
    .map_err(|e| CapabilityError::Backend(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    #[test]
    fn encoding_is_standard_padded_base64() {
        assert_eq!(STANDARD.encode([0u8]), "AA==");
        assert_eq!(STANDARD.encode([251u8, 255, 191]), "+/+/");
    }
}
