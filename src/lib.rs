//! FoodScan core library
//!
//! ブラウザ(WASM)側から使うカメラセッション・疑似解析・表示モデル

pub mod analyzer;
pub mod camera;
pub mod config;
pub mod error;
pub mod fonts;
pub mod overlay;
pub mod state;

pub use analyzer::{
    AnalysisPoller, AnalysisSource, Catalog, FoodRecord, MockAnalysis, NutrientPanel, ScanOutcome,
};
pub use camera::{
    CameraDevice, CameraSession, FacingMode, MediaBackend, MediaStreamHandle, SessionPhase,
    StartOutcome, StreamConstraints, VideoSurface,
};
pub use config::{Config, Variant};
pub use error::{CameraError, FoodScanError, Result};
pub use fonts::{FontChoice, FontPalette};
pub use overlay::{Feed, OverlayModel, ResultCard};
pub use state::UiState;
