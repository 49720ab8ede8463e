// WaveNote - Desktop audio player / annotation shell
// Module declarations
mod audio;
mod commands;
mod state;
mod store;

use state::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // UI state lives host-side and is injected into command handlers
            app.manage(AppState::new());

            #[cfg(debug_assertions)]
            if let Some(window) = app.get_webview_window("main") {
                window.open_devtools();
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::open_audio_dialog,
            commands::load_audio_file,
            commands::set_app_title,
            commands::log_message,
            commands::get_ui_state,
            commands::update_ui_state,
            commands::close_popup_menu,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, _event| {
            // macOS keeps the process alive with zero windows and recreates
            // the main window when the dock icon is clicked.
            #[cfg(target_os = "macos")]
            match _event {
                tauri::RunEvent::ExitRequested { api, code: None, .. } => {
                    api.prevent_exit();
                }
                tauri::RunEvent::Reopen {
                    has_visible_windows: false,
                    ..
                } => {
                    if let Err(error) = recreate_main_window(_app_handle) {
                        log::error!("Failed to recreate main window: {}", error);
                    }
                }
                _ => {}
            }
        });
}

#[cfg(target_os = "macos")]
fn recreate_main_window(app: &tauri::AppHandle) -> tauri::Result<()> {
    if !app.webview_windows().is_empty() {
        return Ok(());
    }

    match app.config().app.windows.first() {
        Some(window_config) => {
            tauri::WebviewWindowBuilder::from_config(app, window_config)?.build()?;
        }
        None => log::warn!("no window configuration to recreate from"),
    }
    Ok(())
}
