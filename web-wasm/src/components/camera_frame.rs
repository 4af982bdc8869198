//! カメラ映像フレームコンポーネント

use foodscan::{Feed, OverlayModel};
use leptos::html::Video;
use leptos::prelude::*;

#[component]
fn FeedPlaceholder() -> impl IntoView {
    view! {
        <div class="feed-placeholder">
            <span class="feed-icon">"📷"</span>
        </div>
    }
}

/// 実カメラのフレーム。非アクティブ時はアイコンを重ねる
///
/// video要素は常に描画しておく（セッションが NodeRef 経由で参照するため）。
#[component]
pub fn CameraFrame(model: Memo<OverlayModel>, video_ref: NodeRef<Video>) -> impl IntoView {
    let is_live = move || model.get().feed == Feed::Live;

    view! {
        <div class="camera-frame">
            <video
                node_ref=video_ref
                class="camera-video"
                class:hidden=move || !is_live()
                autoplay=true
                playsinline=true
                muted=true
            />
            <Show when=move || !is_live()>
                <FeedPlaceholder />
            </Show>
            <div class="corner corner-tl"></div>
            <div class="corner corner-tr"></div>
            <div class="corner corner-bl"></div>
            <div class="corner corner-br"></div>
        </div>
    }
}

/// カメラを使わないバリアント用の全画面フィード
#[component]
pub fn SimulatedFeed() -> impl IntoView {
    view! {
        <div class="feed-simulated">
            <FeedPlaceholder />
        </div>
    }
}
