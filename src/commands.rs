// Tauri command handlers
use tauri::{AppHandle, Emitter, State};
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::audio::{loader, AudioLoadError};
use crate::state::AppState;
use crate::store::{self, UiState, UiStatePatch};

/// Event carrying a full [`UiState`] snapshot after every store mutation.
pub const UI_STATE_CHANGED: &str = "ui-state://changed";

/// Show the native single-file picker filtered to audio extensions.
/// Returns `None` when the user cancels.
///
/// Async so the blocking dialog wait runs on the runtime's pool instead of
/// the webview's IPC thread, which must stay free to pump the dialog's own
/// events.
#[tauri::command]
pub async fn open_audio_dialog(app: AppHandle) -> Result<Option<String>, String> {
    let picked = app
        .dialog()
        .file()
        .add_filter("Audio Files", loader::DIALOG_EXTENSIONS)
        .blocking_pick_file();

    picked_file_to_path(picked)
}

fn picked_file_to_path(picked: Option<FilePath>) -> Result<Option<String>, String> {
    let Some(file) = picked else {
        log::info!("open-file dialog cancelled");
        return Ok(None);
    };

    let path = file
        .into_path()
        .map_err(|e| format!("Failed to resolve picked file: {}", e))?;
    Ok(Some(path.to_string_lossy().to_string()))
}

/// Read a file from disk and return it as a playable base64 data URL.
#[tauri::command]
pub fn load_audio_file(file_path: String) -> Result<String, AudioLoadError> {
    match loader::load_as_data_url(&file_path) {
        Ok(url) => Ok(url),
        Err(error) => {
            log::error!("Error reading audio file {}: {}", file_path, error);
            Err(error)
        }
    }
}

/// Set the window title. One-way; the title string is taken as-is.
#[tauri::command]
pub fn set_app_title(title: String, window: tauri::WebviewWindow) -> Result<(), String> {
    window
        .set_title(&title)
        .map_err(|e| format!("Failed to set window title: {}", e))
}

/// Unstructured debug channel from the renderer. The payload is only logged.
#[tauri::command]
pub fn log_message(payload: serde_json::Value) {
    log::info!("renderer message: {}", payload);
}

#[tauri::command]
pub fn get_ui_state(state: State<'_, AppState>) -> Result<UiState, String> {
    let ui = state
        .ui
        .lock()
        .map_err(|_| "failed to acquire ui state".to_string())?;
    Ok(ui.clone())
}

/// Apply a partial update to the UI state and broadcast the new snapshot.
#[tauri::command]
pub fn update_ui_state(
    patch: UiStatePatch,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<UiState, String> {
    let mut ui = state
        .ui
        .lock()
        .map_err(|_| "failed to acquire ui state".to_string())?;
    *ui = store::apply_patch(&ui, patch);
    let snapshot = ui.clone();
    drop(ui);

    app.emit(UI_STATE_CHANGED, snapshot.clone())
        .map_err(|e| format!("Failed to emit state change: {}", e))?;
    Ok(snapshot)
}

/// Advance the popup-menu close trigger and broadcast the new snapshot.
#[tauri::command]
pub fn close_popup_menu(state: State<'_, AppState>, app: AppHandle) -> Result<UiState, String> {
    let mut ui = state
        .ui
        .lock()
        .map_err(|_| "failed to acquire ui state".to_string())?;
    ui.close_popup_menu();
    let snapshot = ui.clone();
    drop(ui);

    app.emit(UI_STATE_CHANGED, snapshot.clone())
        .map_err(|e| format!("Failed to emit state change: {}", e))?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cancelled_dialog_yields_none() {
        let result = picked_file_to_path(None).expect("cancellation is not an error");
        assert_eq!(result, None);
    }

    #[test]
    fn picked_file_yields_its_path() {
        let picked = Some(FilePath::Path(PathBuf::from("/music/take-one.mp3")));
        let result = picked_file_to_path(picked).expect("picked file should resolve");
        assert_eq!(result, Some("/music/take-one.mp3".to_string()));
    }
}
