// Application state management
use std::sync::Mutex;

use crate::store::UiState;

pub struct AppState {
    pub ui: Mutex<UiState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ui: Mutex::new(UiState::default()),
        }
    }
}
