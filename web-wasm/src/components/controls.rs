//! 操作ボタンコンポーネント

use foodscan::OverlayModel;
use leptos::prelude::*;

/// カメラ取得中は押せない
#[component]
pub fn SwitchCameraButton<F>(model: Memo<OverlayModel>, on_switch: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <button
            class="btn btn-glass btn-switch"
            disabled=move || !model.get().switch_enabled
            on:click=move |_| on_switch(())
        >
            <span class="btn-icon">"🔄"</span>
            "Switch Camera"
        </button>
    }
}

#[component]
pub fn ShuffleFontButton<F>(on_shuffle: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <button
            class="btn btn-glass btn-shuffle"
            on:click=move |_| on_shuffle(())
        >
            <span class="btn-icon">"🔀"</span>
            "Shuffle Font"
        </button>
    }
}
