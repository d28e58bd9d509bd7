use std::sync::{Arc, Mutex, MutexGuard};

use crate::algorithm::{algorithms, key_sizes, AlgorithmDescriptor};
use crate::capability::{Clipboard, KeyProvider};
use crate::engine::{CopyTarget, Engine, StateSnapshot};
use crate::params::{GenerationParams, ParamError, ParameterSelector};

/// One UI session: the parameter selector and the generation engine wired
/// together. Created with default parameters; nothing outlives the process.
pub struct Session {
    selector: Mutex<ParameterSelector>,
    engine: Engine,
}

impl Session {
    pub fn new(provider: Arc<dyn KeyProvider>, clipboard: Arc<dyn Clipboard>) -> Self {
        Session {
            selector: Mutex::new(ParameterSelector::new()),
            engine: Engine::new(provider, clipboard),
        }
    }

    /// Explicit startup step: runs the first generation with the default
    /// parameters. Hosts call this once right after construction.
    pub async fn initialize(&self) {
        self.generate().await;
    }

    pub fn algorithms(&self) -> &'static [AlgorithmDescriptor] {
        algorithms()
    }

    pub fn key_sizes(&self) -> &'static [u16] {
        key_sizes()
    }

    pub fn params(&self) -> GenerationParams {
        self.lock_selector().current()
    }

    pub fn set_algorithm(&self, raw: &str) -> Result<(), ParamError> {
        self.lock_selector().set_algorithm(raw)
    }

    pub fn set_key_size(&self, raw: &str) -> Result<(), ParamError> {
        self.lock_selector().set_key_size(raw)
    }

    /// Snapshot current parameters, then run one generation attempt.
    /// Parameter changes made while the attempt is in flight do not affect it.
    pub async fn generate(&self) {
        let params = self.params();
        self.engine.generate(params).await;
    }

    pub fn copy_to_clipboard(&self, text: Option<&str>, target: CopyTarget) {
        self.engine.copy_to_clipboard(text, target);
    }

    pub fn state(&self) -> StateSnapshot {
        self.engine.state()
    }

    fn lock_selector(&self) -> MutexGuard<'_, ParameterSelector> {
        self.selector.lock().unwrap_or_else(|e| e.into_inner())
    }
}
