//! 解析結果パネルコンポーネント

use foodscan::overlay::{ANALYZING_TEXT, IDLE_TEXT};
use foodscan::{FoodRecord, OverlayModel, ResultCard};
use leptos::prelude::*;

use crate::components::controls::ShuffleFontButton;

#[component]
fn NutritionCard(record: FoodRecord) -> impl IntoView {
    let stats = record
        .panel
        .entries()
        .iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="nutrition-card">
            <p class="food-name">{record.name.clone()}</p>
            <div class="stat-grid">
                <div class="stat">
                    <p class="stat-label">"Calories"</p>
                    <p class="stat-value">{record.calories}</p>
                </div>
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat">
                                <p class="stat-label">{label}</p>
                                <p class="stat-value">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ResultPanel<F>(model: Memo<OverlayModel>, on_shuffle: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let card = Memo::new(move |_| model.get().card);

    view! {
        <div
            class="result-panel"
            style=move || format!("height: {}vh", model.get().panel_height_vh)
        >
            {move || match card.get() {
                ResultCard::Analyzing => view! {
                    <p class="panel-message">{ANALYZING_TEXT}</p>
                }.into_any(),
                ResultCard::Result(record) => view! {
                    <NutritionCard record=record />
                }.into_any(),
                ResultCard::Idle => view! {
                    <p class="panel-message">{IDLE_TEXT}</p>
                }.into_any(),
            }}

            <ShuffleFontButton on_shuffle=on_shuffle />
        </div>
    }
}
