use super::{CameraDevice, MediaBackend, MediaStreamHandle, StreamConstraints, VideoSurface};
use crate::error::CameraError;
use std::cell::RefCell;
use tracing::{debug, info, warn};

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Requesting,
    Active,
    Error,
}

/// `start()` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// 映像の再生を開始した
    Active { device_index: usize },
    /// 取得中または再生中のため何もしなかった
    Ignored,
    /// 取得中に teardown / 切替が行われた（取得したストリームは停止済み）
    Superseded,
}

struct SessionState<S> {
    phase: SessionPhase,
    devices: Vec<CameraDevice>,
    device_index: usize,
    stream: Option<S>,
    generation: u64,
}

/// カメラストリームの取得から解放までを管理する
///
/// シングルスレッドのイベントループ上で共有参照のまま使う前提。
/// 内部状態の借用を `.await` をまたいで保持しない。
pub struct CameraSession<B, V>
where
    B: MediaBackend,
    V: VideoSurface<B::Stream>,
{
    backend: B,
    surface: V,
    state: RefCell<SessionState<B::Stream>>,
}

impl<B, V> CameraSession<B, V>
where
    B: MediaBackend,
    V: VideoSurface<B::Stream>,
{
    pub fn new(backend: B, surface: V) -> Self {
        Self {
            backend,
            surface,
            state: RefCell::new(SessionState {
                phase: SessionPhase::Idle,
                devices: Vec::new(),
                device_index: 0,
                stream: None,
                generation: 0,
            }),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase
    }

    pub fn devices(&self) -> Vec<CameraDevice> {
        self.state.borrow().devices.clone()
    }

    pub fn device_index(&self) -> usize {
        self.state.borrow().device_index
    }

    pub fn has_open_stream(&self) -> bool {
        self.state.borrow().stream.is_some()
    }

    /// カメラを起動する
    ///
    /// Requesting / Active 中の呼び出しは無視する（二重起動防止）。
    pub async fn start(&self) -> Result<StartOutcome, CameraError> {
        let generation = {
            let mut state = self.state.borrow_mut();
            if matches!(state.phase, SessionPhase::Requesting | SessionPhase::Active) {
                debug!(phase = ?state.phase, "camera start ignored");
                return Ok(StartOutcome::Ignored);
            }
            state.phase = SessionPhase::Requesting;
            state.generation
        };

        match self.acquire_and_play(generation).await {
            Ok(outcome) => Ok(outcome),
            Err(_) if self.is_stale(generation) => Ok(StartOutcome::Superseded),
            Err(err) => {
                self.state.borrow_mut().phase = SessionPhase::Error;
                warn!(error = %err, "camera setup failed");
                Err(err)
            }
        }
    }

    async fn acquire_and_play(&self, generation: u64) -> Result<StartOutcome, CameraError> {
        if !self.backend.is_supported() {
            return Err(CameraError::Unsupported);
        }

        let devices = self.backend.enumerate_video_inputs().await?;
        let (device, device_index) = {
            let mut state = self.state.borrow_mut();
            if state.generation != generation {
                return Ok(StartOutcome::Superseded);
            }
            state.devices = devices;
            if state.devices.is_empty() {
                return Err(CameraError::NoDeviceFound);
            }
            state.device_index %= state.devices.len();
            (state.devices[state.device_index].clone(), state.device_index)
        };

        info!(device = %device.label, index = device_index, "requesting camera stream");
        let constraints = StreamConstraints::for_device(Some(&device));
        let stream = self.backend.acquire(&constraints).await?;

        if self.is_stale(generation) {
            debug!("stream arrived after teardown, releasing");
            stream.stop_all_tracks();
            return Ok(StartOutcome::Superseded);
        }

        if let Err(err) = self.surface.attach(&stream) {
            stream.stop_all_tracks();
            return Err(err);
        }
        // 以降は teardown が停止を担当する
        self.state.borrow_mut().stream = Some(stream);

        let played = self.surface.play().await;
        if self.is_stale(generation) {
            return Ok(StartOutcome::Superseded);
        }
        if let Err(err) = played {
            self.release();
            return Err(err);
        }

        self.state.borrow_mut().phase = SessionPhase::Active;
        info!(device = %device.label, "camera active");
        Ok(StartOutcome::Active { device_index })
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.state.borrow().generation != generation
    }

    /// 現在のストリームの全トラックを停止する
    fn release(&self) {
        let stream = self.state.borrow_mut().stream.take();
        if let Some(stream) = stream {
            stream.stop_all_tracks();
            self.surface.detach();
            debug!("camera stream released");
        }
    }

    /// ストリームを解放して Idle に戻す。進行中の取得は破棄扱いになる
    pub fn teardown(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.phase = SessionPhase::Idle;
        }
        self.release();
    }

    /// 次のデバイスへ切り替える（再起動は呼び出し側が `start()` で行う）
    ///
    /// 取得中は切り替えない（None）。取得中のリクエストと新しいリクエストが並行すると
    /// ストリームが2本開いてしまうため。
    pub fn switch_device(&self) -> Option<usize> {
        if self.phase() == SessionPhase::Requesting {
            debug!("camera switch ignored while requesting");
            return None;
        }
        self.teardown();
        let mut state = self.state.borrow_mut();
        if !state.devices.is_empty() {
            state.device_index = (state.device_index + 1) % state.devices.len();
        }
        info!(index = state.device_index, "switching camera");
        Some(state.device_index)
    }
}

impl<B, V> Drop for CameraSession<B, V>
where
    B: MediaBackend,
    V: VideoSurface<B::Stream>,
{
    fn drop(&mut self) {
        if let Some(stream) = self.state.get_mut().stream.take() {
            stream.stop_all_tracks();
            self.surface.detach();
        }
    }
}
