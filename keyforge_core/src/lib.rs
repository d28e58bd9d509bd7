//! # keyforge_core
//!
//! Core logic for the keyforge utility: AES key and IV generation with
//! mode-appropriate IV sizing, base64 presentation, and the short-lived UI
//! state (busy / error / copied flags) around it.
//!
//! No cipher is implemented here. The crate only orchestrates an external
//! secure-random capability (see [`capability`]) and keeps the observable
//! state consistent under repeated and overlapping user actions.

pub mod algorithm;
pub mod capability;
pub mod engine;
pub mod params;
pub mod session;

pub use algorithm::{algorithms, key_sizes, AesMode, AlgorithmDescriptor, KeySize};
pub use capability::{CapabilityError, Clipboard, KeyProvider, NoClipboard, OsKeyProvider};
pub use engine::{CopyTarget, Engine, GeneratedMaterial, StateSnapshot, COPY_FEEDBACK};
pub use params::{GenerationParams, ParamError, ParameterSelector};
pub use session::Session;
