//! ブラウザのメディアAPI連携
//!
//! `navigator.mediaDevices` と `<video>` 要素を foodscan のトレイトに合わせてラップする

use foodscan::{
    CameraDevice, CameraError, CameraSession, FacingMode, MediaBackend, MediaStreamHandle,
    StreamConstraints, VideoSurface,
};
use leptos::html::Video;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DomException, MediaDeviceInfo, MediaDeviceKind, MediaDevices, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

pub type BrowserSession = CameraSession<BrowserMedia, VideoElement>;

// ============================================
// getUserMedia 制約
// ============================================

#[derive(Debug, Serialize)]
struct Ideal<T> {
    ideal: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoConstraints<'a> {
    facing_mode: Ideal<FacingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct StreamRequest<'a> {
    video: VideoConstraints<'a>,
    audio: bool,
}

impl<'a> From<&'a StreamConstraints> for StreamRequest<'a> {
    fn from(constraints: &'a StreamConstraints) -> Self {
        Self {
            video: VideoConstraints {
                facing_mode: Ideal {
                    ideal: constraints.facing,
                },
                device_id: constraints.device_id.as_deref(),
            },
            audio: false,
        }
    }
}

/// JSの例外をCameraErrorに変換（権限拒否だけ区別する）
fn acquisition_error(err: JsValue) -> CameraError {
    match err.dyn_ref::<DomException>() {
        Some(ex) if matches!(ex.name().as_str(), "NotAllowedError" | "SecurityError") => {
            CameraError::PermissionDenied(ex.message())
        }
        Some(ex) => CameraError::AcquisitionFailed(ex.message()),
        None => CameraError::AcquisitionFailed(format!("{:?}", err)),
    }
}

fn playback_error(err: JsValue) -> CameraError {
    let message = match err.dyn_ref::<DomException>() {
        Some(ex) => ex.message(),
        None => format!("{:?}", err),
    };
    CameraError::PlaybackStartFailed(message)
}

// ============================================
// MediaBackend 実装
// ============================================

pub struct BrowserMedia;

impl BrowserMedia {
    /// 非セキュアコンテキストでは navigator.mediaDevices 自体が undefined になる
    fn media_devices() -> Option<MediaDevices> {
        let navigator = web_sys::window()?.navigator();
        let devices = js_sys::Reflect::get(&navigator, &JsValue::from_str("mediaDevices")).ok()?;
        if devices.is_undefined() || devices.is_null() {
            return None;
        }
        Some(devices.unchecked_into())
    }
}

impl MediaBackend for BrowserMedia {
    type Stream = BrowserStream;

    fn is_supported(&self) -> bool {
        Self::media_devices()
            .and_then(|devices| js_sys::Reflect::has(&devices, &JsValue::from_str("getUserMedia")).ok())
            .unwrap_or(false)
    }

    async fn enumerate_video_inputs(&self) -> Result<Vec<CameraDevice>, CameraError> {
        let devices = Self::media_devices().ok_or(CameraError::Unsupported)?;
        let promise = devices.enumerate_devices().map_err(acquisition_error)?;
        let list: js_sys::Array = JsFuture::from(promise)
            .await
            .map_err(acquisition_error)?
            .unchecked_into();

        Ok(list
            .iter()
            .map(|value| value.unchecked_into::<MediaDeviceInfo>())
            .filter(|info| info.kind() == MediaDeviceKind::Videoinput)
            .map(|info| CameraDevice {
                device_id: info.device_id(),
                label: info.label(),
            })
            .collect())
    }

    async fn acquire(&self, constraints: &StreamConstraints) -> Result<BrowserStream, CameraError> {
        let devices = Self::media_devices().ok_or(CameraError::Unsupported)?;
        let request = serde_wasm_bindgen::to_value(&StreamRequest::from(constraints))
            .map_err(|e| CameraError::AcquisitionFailed(e.to_string()))?;
        let request: MediaStreamConstraints = request.unchecked_into();

        let promise = devices
            .get_user_media_with_constraints(&request)
            .map_err(acquisition_error)?;
        let stream = JsFuture::from(promise).await.map_err(acquisition_error)?;
        Ok(BrowserStream(stream.unchecked_into()))
    }
}

pub struct BrowserStream(MediaStream);

impl MediaStreamHandle for BrowserStream {
    fn stop_all_tracks(&self) {
        for track in self.0.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
    }
}

// ============================================
// VideoSurface 実装
// ============================================

pub struct VideoElement(NodeRef<Video>);

impl VideoElement {
    pub fn new(node_ref: NodeRef<Video>) -> Self {
        Self(node_ref)
    }
}

impl VideoSurface<BrowserStream> for VideoElement {
    fn attach(&self, stream: &BrowserStream) -> Result<(), CameraError> {
        let video = self.0.get_untracked().ok_or(CameraError::ElementUnavailable)?;
        video.set_src_object(Some(&stream.0));
        Ok(())
    }

    async fn play(&self) -> Result<(), CameraError> {
        let video = self.0.get_untracked().ok_or(CameraError::ElementUnavailable)?;
        // play() の Promise はメタデータ読込後、再生開始時に解決する
        let promise = video.play().map_err(playback_error)?;
        JsFuture::from(promise).await.map_err(playback_error)?;
        Ok(())
    }

    fn detach(&self) {
        if let Some(video) = self.0.get_untracked() {
            video.set_src_object(None);
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_constraints_become_plain_object() {
        let constraints = StreamConstraints::for_device(None);
        let value = serde_wasm_bindgen::to_value(&StreamRequest::from(&constraints)).unwrap();
        let video = js_sys::Reflect::get(&value, &JsValue::from_str("video")).unwrap();
        let facing = js_sys::Reflect::get(&video, &JsValue::from_str("facingMode")).unwrap();
        let ideal = js_sys::Reflect::get(&facing, &JsValue::from_str("ideal")).unwrap();
        assert_eq!(ideal.as_string().as_deref(), Some("environment"));
    }

    #[wasm_bindgen_test]
    fn test_stop_all_tracks_on_empty_stream() {
        let stream = MediaStream::new().unwrap();
        BrowserStream(stream).stop_all_tracks();
    }
}
