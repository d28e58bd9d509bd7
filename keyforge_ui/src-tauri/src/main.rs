#[cfg(windows)]
mod app_state;
#[cfg(windows)]
mod clipboard;
#[cfg(windows)]
mod commands;

#[cfg(windows)]
fn main() {
    use crate::app_state::AppState;
    use crate::clipboard::SystemClipboard;
    use keyforge_core::{OsKeyProvider, Session};
    use std::sync::Arc;
    use tauri::Manager;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            let _ = app.get_webview_window("main").map(|w| w.set_focus());
        }))
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let session = Arc::new(Session::new(
                Arc::new(OsKeyProvider),
                Arc::new(SystemClipboard::new(app.handle().clone())),
            ));
            app.manage(AppState {
                session: session.clone(),
            });

            // First generation runs at startup with the default parameters.
            tauri::async_runtime::spawn(async move {
                session.initialize().await;
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_algorithms,
            commands::list_key_sizes,
            commands::current_params,
            commands::current_state,
            commands::set_algorithm,
            commands::set_key_size,
            commands::generate,
            commands::copy_to_clipboard
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(not(windows))]
fn main() {
    eprintln!("The keyforge desktop host targets Windows; use keyforge_cli on other platforms.");
}
