use keyforge_core::capability::{CapabilityError, Clipboard};
use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

/// System clipboard capability backed by the clipboard-manager plugin.
pub struct SystemClipboard {
    app: AppHandle,
}

impl SystemClipboard {
    pub fn new(app: AppHandle) -> Self {
        SystemClipboard { app }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        self.app
            .clipboard()
            .write_text(text.to_string())
            .map_err(|e| CapabilityError::Backend(e.to_string()))
    }
}
