use crate::error::{FoodScanError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 画面バリアント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// 実カメラ + 固定マクロ栄養素テーブル
    #[default]
    FoodScanner,
    /// 疑似フィード + 微量栄養素の合成値
    NutrientCamera,
}

impl Variant {
    pub fn uses_camera(&self) -> bool {
        matches!(self, Variant::FoodScanner)
    }

    pub fn brand(&self) -> &'static str {
        match self {
            Variant::FoodScanner => "FoodScan Pro",
            Variant::NutrientCamera => "Foodscan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    pub poll_interval_ms: u32,
    pub searching_probability: f64,
    /// 乱数シード（未指定時はホスト側で生成）
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::FoodScanner,
            poll_interval_ms: 3000,
            searching_probability: 0.2,
            seed: None,
        }
    }
}

impl Config {
    /// JSON文字列から読み込み（未指定フィールドはデフォルト値）
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(FoodScanError::Config(
                "poll_interval_ms は 0 より大きい必要があります".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.searching_probability) {
            return Err(FoodScanError::Config(format!(
                "searching_probability は 0.0〜1.0 の範囲で指定してください: {}",
                self.searching_probability
            )));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.variant, Variant::FoodScanner);
        assert_eq!(config.poll_interval(), Duration::from_secs(3));
        assert_eq!(config.searching_probability, 0.2);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"variant": "nutrient-camera", "seed": 7}"#)
            .expect("読み込み失敗");
        assert_eq!(config.variant, Variant::NutrientCamera);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.poll_interval_ms, 3000);
    }

    #[test]
    fn test_from_json_rejects_zero_interval() {
        let result = Config::from_json(r#"{"poll_interval_ms": 0}"#);
        assert!(matches!(result, Err(FoodScanError::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_probability_out_of_range() {
        let result = Config::from_json(r#"{"searching_probability": 1.5}"#);
        assert!(matches!(result, Err(FoodScanError::Config(_))));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = Config::from_json("not json");
        assert!(matches!(result, Err(FoodScanError::Json(_))));
    }

    #[test]
    fn test_variant_branding() {
        assert_eq!(Variant::FoodScanner.brand(), "FoodScan Pro");
        assert_eq!(Variant::NutrientCamera.brand(), "Foodscan");
        assert!(Variant::FoodScanner.uses_camera());
        assert!(!Variant::NutrientCamera.uses_camera());
    }
}
