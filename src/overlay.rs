//! 画面表示モデル
//!
//! 状態とデバイス一覧から表示内容を決める純粋関数。Leptos 側はこれを描画するだけ。

use crate::analyzer::FoodRecord;
use crate::camera::CameraDevice;
use crate::config::Variant;
use crate::state::UiState;

pub const ANALYZING_TEXT: &str = "Analyzing food...";
pub const IDLE_TEXT: &str = "Point camera at food to analyze";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// カメラアイコンのみ
    Placeholder,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCard {
    Analyzing,
    Result(FoodRecord),
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayModel {
    pub brand: &'static str,
    pub font_class: &'static str,
    pub feed: Feed,
    pub error_banner: Option<String>,
    pub card: ResultCard,
    pub show_switch_camera: bool,
    /// 取得中は false
    pub switch_enabled: bool,
    pub show_font_shuffle: bool,
    /// 結果パネルの高さ（vh）
    pub panel_height_vh: u8,
}

impl OverlayModel {
    pub fn build(state: &UiState, devices: &[CameraDevice], variant: Variant) -> Self {
        let uses_camera = variant.uses_camera();

        let feed = if uses_camera && state.camera_active {
            Feed::Live
        } else {
            Feed::Placeholder
        };

        let card = if state.analyzing {
            ResultCard::Analyzing
        } else {
            match &state.current_result {
                Some(record) => ResultCard::Result(record.clone()),
                None => ResultCard::Idle,
            }
        };

        Self {
            brand: variant.brand(),
            font_class: state.font.css_class(),
            feed,
            error_banner: state.error.as_ref().map(|e| format!("Error: {}", e)),
            card,
            show_switch_camera: uses_camera && devices.len() > 1,
            switch_enabled: !state.camera_requesting,
            show_font_shuffle: true,
            panel_height_vh: if uses_camera { 50 } else { 25 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ScanOutcome;
    use crate::fonts::FontChoice;

    fn devices(n: usize) -> Vec<CameraDevice> {
        (0..n)
            .map(|i| CameraDevice {
                device_id: format!("cam-{}", i),
                label: format!("Camera {}", i),
            })
            .collect()
    }

    #[test]
    fn test_initial_overlay() {
        let state = UiState::new(FontChoice::Sans);
        let model = OverlayModel::build(&state, &[], Variant::FoodScanner);
        assert_eq!(model.feed, Feed::Placeholder);
        assert_eq!(model.card, ResultCard::Analyzing);
        assert!(model.error_banner.is_none());
        assert!(!model.show_switch_camera);
        assert!(model.show_font_shuffle);
        assert_eq!(model.brand, "FoodScan Pro");
        assert_eq!(model.panel_height_vh, 50);
    }

    #[test]
    fn test_live_feed_when_active() {
        let mut state = UiState::new(FontChoice::Sans);
        state.camera_started(0);
        let model = OverlayModel::build(&state, &devices(1), Variant::FoodScanner);
        assert_eq!(model.feed, Feed::Live);
    }

    #[test]
    fn test_result_card() {
        let apple = FoodRecord::macros("Apple", 95, "0.5g", "25g", "0.3g");
        let mut state = UiState::new(FontChoice::Sans);
        state.apply_outcome(ScanOutcome::Recognized(apple.clone()));
        let model = OverlayModel::build(&state, &[], Variant::FoodScanner);
        assert_eq!(model.card, ResultCard::Result(apple));
    }

    #[test]
    fn test_idle_card_without_result() {
        let mut state = UiState::new(FontChoice::Sans);
        state.analyzing = false;
        let model = OverlayModel::build(&state, &[], Variant::FoodScanner);
        assert_eq!(model.card, ResultCard::Idle);
    }

    #[test]
    fn test_switch_button_needs_two_devices() {
        let state = UiState::new(FontChoice::Sans);
        assert!(!OverlayModel::build(&state, &devices(1), Variant::FoodScanner).show_switch_camera);
        assert!(OverlayModel::build(&state, &devices(2), Variant::FoodScanner).show_switch_camera);
    }

    #[test]
    fn test_switch_disabled_while_requesting() {
        let mut state = UiState::new(FontChoice::Sans);
        state.camera_starting();
        let model = OverlayModel::build(&state, &devices(2), Variant::FoodScanner);
        assert!(model.show_switch_camera);
        assert!(!model.switch_enabled);

        state.camera_started(0);
        let model = OverlayModel::build(&state, &devices(2), Variant::FoodScanner);
        assert!(model.switch_enabled);
    }

    #[test]
    fn test_error_banner_text() {
        let mut state = UiState::new(FontChoice::Sans);
        state.camera_failed(&crate::error::CameraError::Unsupported);
        let model = OverlayModel::build(&state, &[], Variant::FoodScanner);
        assert_eq!(
            model.error_banner.as_deref(),
            Some("Error: Failed to access camera: Your browser does not support camera access")
        );
    }

    #[test]
    fn test_nutrient_camera_never_live() {
        let mut state = UiState::new(FontChoice::Exo);
        state.camera_started(0);
        let model = OverlayModel::build(&state, &devices(3), Variant::NutrientCamera);
        assert_eq!(model.feed, Feed::Placeholder);
        assert!(!model.show_switch_camera);
        assert_eq!(model.brand, "Foodscan");
        assert_eq!(model.font_class, "font-exo");
        assert_eq!(model.panel_height_vh, 25);
    }
}
