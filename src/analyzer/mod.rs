//! 疑似解析ポーラー
//!
//! 一定間隔ごとに `AnalysisSource` から次の結果を取り出し、画面状態へ反映する。
//! タイマー自体はホスト側（ブラウザの interval）が持ち、ここでは1tick分の処理だけを扱う。

mod catalog;
mod mock;
mod types;

pub use catalog::{Catalog, SynthRanges};
pub use mock::MockAnalysis;
pub use types::{FoodRecord, NutrientPanel};

use tracing::debug;

/// 1tick分の解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Recognized(FoodRecord),
    /// 認識できず再検索中
    Searching,
}

/// 解析結果の供給元
pub trait AnalysisSource {
    fn next_outcome(&mut self) -> ScanOutcome;
}

impl<S: AnalysisSource + ?Sized> AnalysisSource for Box<S> {
    fn next_outcome(&mut self) -> ScanOutcome {
        (**self).next_outcome()
    }
}

pub struct AnalysisPoller<S> {
    source: S,
    ticks: u64,
    stopped: bool,
}

impl<S: AnalysisSource> AnalysisPoller<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ticks: 0,
            stopped: false,
        }
    }

    /// 1tick実行。停止後は常に None
    pub fn tick(&mut self) -> Option<ScanOutcome> {
        if self.stopped {
            return None;
        }
        self.ticks += 1;
        let outcome = self.source.next_outcome();
        match &outcome {
            ScanOutcome::Recognized(record) => {
                debug!(tick = self.ticks, food = %record.name, "recognized");
            }
            ScanOutcome::Searching => debug!(tick = self.ticks, "searching"),
        }
        Some(outcome)
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            debug!(ticks = self.ticks, "poller stopped");
        }
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
