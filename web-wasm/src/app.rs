//! メインアプリケーションコンポーネント

use std::rc::Rc;

use foodscan::{
    AnalysisPoller, CameraDevice, Catalog, Config, FontPalette, MockAnalysis, OverlayModel,
    SessionPhase, StartOutcome, UiState,
};
use gloo::timers::callback::Interval;
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::components::{
    camera_frame::{CameraFrame, SimulatedFeed},
    controls::SwitchCameraButton,
    error_banner::ErrorBanner,
    header::Header,
    result_panel::ResultPanel,
};
use crate::media::{BrowserMedia, BrowserSession, VideoElement};

const CONFIG_ELEMENT_ID: &str = "foodscan-config";

/// ページに埋め込まれた設定JSONを読み込む（なければデフォルト）
fn load_config() -> Config {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(text) = text else {
        return Config::default();
    };

    match Config::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "埋め込み設定が不正なためデフォルトを使用");
            Config::default()
        }
    }
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    info!(variant = ?config.variant, interval_ms = config.poll_interval_ms, "FoodScan starting");

    view! { <Scanner config=config /> }
}

/// カメラ映像 + 疑似解析結果のオーバーレイ
///
/// 疑似解析はカメラの状態とは独立して一定間隔で更新される。
#[component]
pub fn Scanner(config: Config) -> impl IntoView {
    let variant = config.variant;
    let palette = FontPalette::default();
    let seed = config.seed.unwrap_or_else(random_seed);

    // 画面状態
    let state = RwSignal::new(UiState::new(palette.initial()));
    let devices = RwSignal::new(Vec::<CameraDevice>::new());
    let model = Memo::new(move |_| {
        state.with(|s| devices.with(|d| OverlayModel::build(s, d, variant)))
    });

    // 疑似解析（マウント直後から開始）
    let poller = StoredValue::new_local(AnalysisPoller::new(MockAnalysis::new(
        Catalog::for_variant(variant),
        config.searching_probability,
        SmallRng::seed_from_u64(seed),
    )));
    let interval = StoredValue::new_local(Some(Interval::new(config.poll_interval_ms, move || {
        if let Some(Some(outcome)) = poller.try_update_value(|p| p.tick()) {
            state.try_update(|s| s.apply_outcome(outcome));
        }
    })));

    // フォント切替
    let font_rng = StoredValue::new_local(SmallRng::seed_from_u64(seed.rotate_left(17)));
    let on_shuffle = move |_: ()| {
        if let Some(font) = font_rng.try_update_value(|rng| palette.shuffle(rng)) {
            state.update(|s| s.set_font(font));
        }
    };

    // カメラセッション
    let video_ref = NodeRef::<Video>::new();
    let session = StoredValue::new_local(Rc::new(BrowserSession::new(
        BrowserMedia,
        VideoElement::new(video_ref),
    )));

    let start_camera = move || {
        let Some(session) = session.try_get_value() else {
            return;
        };
        state.update(|s| s.camera_starting());
        spawn_local(async move {
            let outcome = session.start().await;
            devices.try_set(session.devices());
            match outcome {
                Ok(StartOutcome::Active { device_index }) => {
                    state.try_update(|s| s.camera_started(device_index));
                }
                Ok(_) => {
                    // Ignored / Superseded: 実際の phase に合わせる
                    let requesting = session.phase() == SessionPhase::Requesting;
                    state.try_update(|s| s.camera_requesting = requesting);
                }
                Err(err) => {
                    state.try_update(|s| s.camera_failed(&err));
                }
            }
        });
    };

    let on_switch = move |_: ()| {
        let Some(session) = session.try_get_value() else {
            return;
        };
        let Some(next) = session.switch_device() else {
            return;
        };
        state.update(|s| s.camera_switching(next));
        start_camera();
    };

    if variant.uses_camera() {
        // video要素のマウント後に1回だけ起動
        Effect::new(move |_| start_camera());
    }

    on_cleanup(move || {
        interval.try_update_value(|i| i.take());
        poller.try_update_value(|p| p.stop());
        session.try_with_value(|s| s.teardown());
    });

    view! {
        <div class=move || format!("scanner {}", model.get().font_class)>
            {if variant.uses_camera() {
                view! { <CameraFrame model=model video_ref=video_ref /> }.into_any()
            } else {
                view! { <SimulatedFeed /> }.into_any()
            }}

            <Header brand=variant.brand() />

            <Show when=move || model.get().show_switch_camera>
                <SwitchCameraButton model=model on_switch=on_switch />
            </Show>

            <ResultPanel model=model on_shuffle=on_shuffle />

            <ErrorBanner model=model />
        </div>
    }
}
