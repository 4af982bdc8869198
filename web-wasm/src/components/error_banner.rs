//! エラーバナーコンポーネント

use foodscan::OverlayModel;
use leptos::prelude::*;

#[component]
pub fn ErrorBanner(model: Memo<OverlayModel>) -> impl IntoView {
    move || {
        model.get().error_banner.map(|message| {
            view! {
                <div class="error-banner">
                    <p>{message}</p>
                </div>
            }
        })
    }
}
