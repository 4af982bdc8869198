//! 表示フォントの切替（見た目のみ）

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontChoice {
    Sans,
    Serif,
    Mono,
    Exo,
    Orbitron,
    Rajdhani,
    ChakraPetch,
    Audiowide,
}

impl FontChoice {
    pub fn css_class(&self) -> &'static str {
        match self {
            FontChoice::Sans => "font-sans",
            FontChoice::Serif => "font-serif",
            FontChoice::Mono => "font-mono",
            FontChoice::Exo => "font-exo",
            FontChoice::Orbitron => "font-orbitron",
            FontChoice::Rajdhani => "font-rajdhani",
            FontChoice::ChakraPetch => "font-chakra-petch",
            FontChoice::Audiowide => "font-audiowide",
        }
    }
}

/// 選択可能なフォントの一覧（先頭が初期値）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPalette {
    fonts: Vec<FontChoice>,
}

impl Default for FontPalette {
    fn default() -> Self {
        Self {
            fonts: vec![
                FontChoice::Sans,
                FontChoice::Serif,
                FontChoice::Mono,
                FontChoice::Exo,
                FontChoice::Orbitron,
                FontChoice::Rajdhani,
                FontChoice::ChakraPetch,
                FontChoice::Audiowide,
            ],
        }
    }
}

impl FontPalette {
    /// 空の一覧は既定のパレットに置き換える
    pub fn new(fonts: Vec<FontChoice>) -> Self {
        if fonts.is_empty() {
            return Self::default();
        }
        Self { fonts }
    }

    pub fn initial(&self) -> FontChoice {
        self.fonts[0]
    }

    pub fn fonts(&self) -> &[FontChoice] {
        &self.fonts
    }

    /// ランダムに1つ選ぶ（同じフォントが続くこともある）
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> FontChoice {
        self.fonts[rng.gen_range(0..self.fonts.len())]
    }
}
