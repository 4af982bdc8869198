//! エラー型定義

use thiserror::Error;

/// カメラセッションのエラー
///
/// いずれもコンポーネント境界で捕捉し、エラーバナーの文字列に変換する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("Your browser does not support camera access")]
    Unsupported,

    #[error("No cameras available")]
    NoDeviceFound,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    AcquisitionFailed(String),

    #[error("Failed to start video playback: {0}")]
    PlaybackStartFailed(String),

    #[error("Video element not found")]
    ElementUnavailable,
}

impl CameraError {
    /// エラーバナーに表示する文言
    pub fn banner_message(&self) -> String {
        format!("Failed to access camera: {}", self)
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum FoodScanError {
    #[error("カメラエラー: {0}")]
    Camera(#[from] CameraError),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("設定エラー: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, FoodScanError>;
