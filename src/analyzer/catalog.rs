//! 疑似認識に使う食品カタログ
//!
//! 固定テーブル（FoodScanner）と範囲指定の合成値（NutrientCamera）の2種類。

use super::types::{FoodRecord, NutrientPanel};
use crate::config::Variant;
use rand::Rng;
use std::ops::RangeInclusive;

/// 微量栄養素の合成パラメータ
#[derive(Debug, Clone, PartialEq)]
pub struct SynthRanges {
    pub names: Vec<String>,
    pub calories: RangeInclusive<u32>,
    pub carbs_g: RangeInclusive<u32>,
    pub fiber_g: RangeInclusive<u32>,
    pub vitamin_c_dv: RangeInclusive<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Table(Vec<FoodRecord>),
    Synthesized(SynthRanges),
}

impl Catalog {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::FoodScanner => Self::macro_table(),
            Variant::NutrientCamera => Self::micro_synth(),
        }
    }

    pub fn macro_table() -> Self {
        Catalog::Table(vec![
            FoodRecord::macros("Apple", 95, "0.5g", "25g", "0.3g"),
            FoodRecord::macros("Banana", 105, "1.3g", "27g", "0.4g"),
            FoodRecord::macros("Chicken Breast", 165, "31g", "0g", "3.6g"),
            FoodRecord::macros("Broccoli", 55, "3.7g", "11g", "0.6g"),
            FoodRecord::macros("Salmon", 206, "22g", "0g", "13g"),
        ])
    }

    pub fn micro_synth() -> Self {
        Catalog::Synthesized(SynthRanges {
            names: ["Apple", "Banana", "Orange", "Broccoli", "Chicken Breast"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            calories: 50..=249,
            carbs_g: 5..=34,
            fiber_g: 1..=5,
            vitamin_c_dv: 10..=59,
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Catalog::Table(records) => records.is_empty(),
            Catalog::Synthesized(ranges) => ranges.names.is_empty(),
        }
    }

    /// 1件抽選する。空カタログなら None
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<FoodRecord> {
        if self.is_empty() {
            return None;
        }
        match self {
            Catalog::Table(records) => {
                let index = rng.gen_range(0..records.len());
                Some(records[index].clone())
            }
            Catalog::Synthesized(ranges) => {
                let name = &ranges.names[rng.gen_range(0..ranges.names.len())];
                Some(FoodRecord {
                    name: name.clone(),
                    calories: rng.gen_range(ranges.calories.clone()),
                    panel: NutrientPanel::Micros {
                        carbs: format!("{}g", rng.gen_range(ranges.carbs_g.clone())),
                        fiber: format!("{}g", rng.gen_range(ranges.fiber_g.clone())),
                        vitamin_c: format!("{}% DV", rng.gen_range(ranges.vitamin_c_dv.clone())),
                    },
                })
            }
        }
    }
}
