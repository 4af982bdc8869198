//! 解析結果の型定義

use serde::{Deserialize, Serialize};

/// 栄養素パネル（バリアントごとに表示項目が異なる）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NutrientPanel {
    Macros {
        protein: String,
        carbs: String,
        fat: String,
    },
    #[serde(rename_all = "camelCase")]
    Micros {
        carbs: String,
        fiber: String,
        vitamin_c: String,
    },
}

impl NutrientPanel {
    /// (ラベル, 値) の一覧
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        match self {
            NutrientPanel::Macros { protein, carbs, fat } => {
                [("Protein", protein.as_str()), ("Carbs", carbs.as_str()), ("Fat", fat.as_str())]
            }
            NutrientPanel::Micros { carbs, fiber, vitamin_c } => [
                ("Carbs", carbs.as_str()),
                ("Fiber", fiber.as_str()),
                ("Vitamin C", vitamin_c.as_str()),
            ],
        }
    }
}

/// 認識結果1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub name: String,
    pub calories: u32,
    pub panel: NutrientPanel,
}

impl FoodRecord {
    pub fn macros(name: &str, calories: u32, protein: &str, carbs: &str, fat: &str) -> Self {
        Self {
            name: name.to_string(),
            calories,
            panel: NutrientPanel::Macros {
                protein: protein.to_string(),
                carbs: carbs.to_string(),
                fat: fat.to_string(),
            },
        }
    }
}
