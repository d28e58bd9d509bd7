use keyforge_core::{AlgorithmDescriptor, CopyTarget, GenerationParams, StateSnapshot};
use tauri::State;

use crate::app_state::AppState;

#[tauri::command]
pub fn list_algorithms(state: State<'_, AppState>) -> Vec<AlgorithmDescriptor> {
    state.session.algorithms().to_vec()
}

#[tauri::command]
pub fn list_key_sizes(state: State<'_, AppState>) -> Vec<u16> {
    state.session.key_sizes().to_vec()
}

#[tauri::command]
pub fn current_params(state: State<'_, AppState>) -> GenerationParams {
    state.session.params()
}

#[tauri::command]
pub fn current_state(state: State<'_, AppState>) -> StateSnapshot {
    state.session.state()
}

#[tauri::command]
pub fn set_algorithm(state: State<'_, AppState>, value: String) -> Result<(), String> {
    state.session.set_algorithm(&value).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_key_size(state: State<'_, AppState>, value: String) -> Result<(), String> {
    state.session.set_key_size(&value).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn generate(state: State<'_, AppState>) -> Result<StateSnapshot, String> {
    state.session.generate().await;
    Ok(state.session.state())
}

#[tauri::command]
pub async fn copy_to_clipboard(
    state: State<'_, AppState>,
    text: Option<String>,
    target: String,
) -> Result<(), String> {
    let target = match target.as_str() {
        "key" => CopyTarget::Key,
        "iv" => CopyTarget::Iv,
        other => return Err(format!("unknown copy target: {other}")),
    };
    state.session.copy_to_clipboard(text.as_deref(), target);
    Ok(())
}
