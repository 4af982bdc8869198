//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(brand: &'static str) -> impl IntoView {
    view! {
        <div class="badge badge-left">
            <p class="badge-text">"Live Camera"</p>
        </div>
        <div class="badge badge-right">
            <p class="badge-brand">{brand}</p>
        </div>
    }
}
