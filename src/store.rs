// Shared playback/annotation UI state
use serde::{Deserialize, Serialize};

/// Snapshot of the renderer-facing UI state.
///
/// Fields are independent; there are no invariants between them and nothing
/// here is persisted. Serialized field names are camelCase to match what the
/// renderer components expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub is_playing: bool,
    pub play_region: bool,
    pub loop_region: bool,
    pub activated_surfer_name: String,
    pub transcript_text: String,
    /// Monotonic close signal for popup menus. Consumers react to the value
    /// changing, never to the absolute value.
    pub popup_menu_close_trigger: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_playing: false,
            play_region: false,
            loop_region: false,
            activated_surfer_name: String::new(),
            transcript_text: String::new(),
            popup_menu_close_trigger: 0,
        }
    }
}

impl UiState {
    /// Signal any open popup menu to close by advancing the trigger.
    pub fn close_popup_menu(&mut self) {
        self.popup_menu_close_trigger += 1;
    }
}

/// Partial update to the UI state. `None` fields keep their current value.
///
/// The popup trigger is deliberately absent: it only moves through
/// [`UiState::close_popup_menu`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiStatePatch {
    pub is_playing: Option<bool>,
    pub play_region: Option<bool>,
    pub loop_region: Option<bool>,
    pub activated_surfer_name: Option<String>,
    pub transcript_text: Option<String>,
}

pub fn apply_patch(state: &UiState, patch: UiStatePatch) -> UiState {
    UiState {
        is_playing: patch.is_playing.unwrap_or(state.is_playing),
        play_region: patch.play_region.unwrap_or(state.play_region),
        loop_region: patch.loop_region.unwrap_or(state.loop_region),
        activated_surfer_name: patch
            .activated_surfer_name
            .unwrap_or_else(|| state.activated_surfer_name.clone()),
        transcript_text: patch
            .transcript_text
            .unwrap_or_else(|| state.transcript_text.clone()),
        popup_menu_close_trigger: state.popup_menu_close_trigger,
    }
}
