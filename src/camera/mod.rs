//! カメラセッション
//!
//! ホストのメディアAPIは `MediaBackend` / `MediaStreamHandle` / `VideoSurface`
//! の3つのトレイトで抽象化する。ブラウザ実装は web-wasm 側にある。

mod session;

pub use session::{CameraSession, SessionPhase, StartOutcome};

use crate::error::CameraError;
use serde::Serialize;

/// 映像入力デバイス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    pub device_id: String,
    pub label: String,
}

/// 希望するカメラの向き
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// 背面カメラ
    Environment,
}

/// ストリーム取得時の制約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConstraints {
    pub facing: FacingMode,
    pub device_id: Option<String>,
}

impl StreamConstraints {
    pub fn for_device(device: Option<&CameraDevice>) -> Self {
        Self {
            facing: FacingMode::Environment,
            device_id: device.map(|d| d.device_id.clone()),
        }
    }
}

/// 取得済みストリーム
pub trait MediaStreamHandle {
    /// 全トラックを停止してハードウェアを解放する
    fn stop_all_tracks(&self);
}

#[allow(async_fn_in_trait)]
pub trait MediaBackend {
    type Stream: MediaStreamHandle;

    fn is_supported(&self) -> bool;

    async fn enumerate_video_inputs(&self) -> Result<Vec<CameraDevice>, CameraError>;

    async fn acquire(&self, constraints: &StreamConstraints) -> Result<Self::Stream, CameraError>;
}

/// 映像を表示する要素
#[allow(async_fn_in_trait)]
pub trait VideoSurface<S> {
    fn attach(&self, stream: &S) -> Result<(), CameraError>;

    async fn play(&self) -> Result<(), CameraError>;

    fn detach(&self);
}
