//! 画面状態

use crate::analyzer::{FoodRecord, ScanOutcome};
use crate::error::CameraError;
use crate::fonts::FontChoice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub camera_active: bool,
    /// カメラ取得中（切替ボタンを無効化する）
    pub camera_requesting: bool,
    pub current_device_index: usize,
    /// true の間は current_result が必ず None
    pub analyzing: bool,
    pub current_result: Option<FoodRecord>,
    pub error: Option<String>,
    pub font: FontChoice,
}

impl UiState {
    pub fn new(font: FontChoice) -> Self {
        Self {
            camera_active: false,
            camera_requesting: false,
            current_device_index: 0,
            analyzing: true,
            current_result: None,
            error: None,
            font,
        }
    }

    pub fn apply_outcome(&mut self, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Recognized(record) => {
                self.analyzing = false;
                self.current_result = Some(record);
            }
            ScanOutcome::Searching => {
                self.analyzing = true;
                self.current_result = None;
            }
        }
    }

    pub fn camera_starting(&mut self) {
        self.camera_requesting = true;
    }

    pub fn camera_started(&mut self, device_index: usize) {
        self.camera_active = true;
        self.camera_requesting = false;
        self.current_device_index = device_index;
        self.error = None;
    }

    pub fn camera_failed(&mut self, err: &CameraError) {
        self.camera_active = false;
        self.camera_requesting = false;
        self.error = Some(err.banner_message());
    }

    /// 切替時はカメラ関連の項目だけをリセットする
    pub fn camera_switching(&mut self, device_index: usize) {
        self.camera_active = false;
        self.current_device_index = device_index;
        self.error = None;
    }

    pub fn set_font(&mut self, font: FontChoice) {
        self.font = font;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> FoodRecord {
        FoodRecord::macros("Apple", 95, "0.5g", "25g", "0.3g")
    }

    #[test]
    fn test_initial_state_is_analyzing() {
        let state = UiState::new(FontChoice::Sans);
        assert!(state.analyzing);
        assert!(state.current_result.is_none());
        assert!(!state.camera_active);
    }

    #[test]
    fn test_apply_outcome_keeps_invariant() {
        let mut state = UiState::new(FontChoice::Sans);

        state.apply_outcome(ScanOutcome::Recognized(apple()));
        assert!(!state.analyzing);
        assert_eq!(state.current_result, Some(apple()));

        state.apply_outcome(ScanOutcome::Searching);
        assert!(state.analyzing);
        assert!(state.current_result.is_none());
    }

    #[test]
    fn test_camera_failed_sets_banner() {
        let mut state = UiState::new(FontChoice::Sans);
        state.camera_failed(&CameraError::NoDeviceFound);
        assert!(!state.camera_active);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to access camera: No cameras available")
        );
    }

    #[test]
    fn test_switching_resets_camera_fields_only() {
        let mut state = UiState::new(FontChoice::Sans);
        state.apply_outcome(ScanOutcome::Recognized(apple()));
        state.camera_started(0);
        state.error = Some("old".into());

        state.camera_switching(1);
        assert!(!state.camera_active);
        assert!(state.error.is_none());
        assert_eq!(state.current_device_index, 1);
        assert_eq!(state.current_result, Some(apple()));
    }

    #[test]
    fn test_requesting_cleared_by_start_or_failure() {
        let mut state = UiState::new(FontChoice::Sans);
        state.camera_starting();
        assert!(state.camera_requesting);
        state.camera_started(1);
        assert!(!state.camera_requesting);

        state.camera_starting();
        state.camera_failed(&CameraError::NoDeviceFound);
        assert!(!state.camera_requesting);
    }

    #[test]
    fn test_set_font_touches_nothing_else() {
        let mut state = UiState::new(FontChoice::Sans);
        state.apply_outcome(ScanOutcome::Recognized(apple()));
        state.camera_started(0);
        let before = state.clone();

        state.set_font(FontChoice::Orbitron);
        assert_eq!(state.font, FontChoice::Orbitron);
        assert_eq!(state.current_result, before.current_result);
        assert_eq!(state.analyzing, before.analyzing);
        assert_eq!(state.camera_active, before.camera_active);
        assert_eq!(state.error, before.error);
    }
}
