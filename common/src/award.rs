//! アワード区分と表示スタイル

use serde::Serialize;

pub const GRAND_AWARD: &str = "Grand Award";
pub const BEST_OF_AWARD: &str = "Best of Award of Excellence";
pub const AWARD_OF_EXCELLENCE: &str = "Award of Excellence";

/// 絞り込み選択肢（値, ラベル）
pub const AWARD_OPTIONS: [(&str, &str); 3] = [
    (GRAND_AWARD, "Grand Award"),
    (BEST_OF_AWARD, "Best of Award"),
    (AWARD_OF_EXCELLENCE, "Award of Excellence"),
];

/// バッジの配色（背景, 文字, 枠線）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwardStyle {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

impl AwardStyle {
    /// インラインCSS
    pub fn css(&self) -> String {
        format!(
            "background: {}; color: {}; border: 1px solid {};",
            self.background, self.foreground, self.border
        )
    }

    /// xlsx用に "#RRGGBB" を数値へ
    pub fn background_rgb(&self) -> u32 {
        hex_to_rgb(self.background)
    }

    pub fn foreground_rgb(&self) -> u32 {
        hex_to_rgb(self.foreground)
    }
}

fn hex_to_rgb(hex: &str) -> u32 {
    u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0)
}

/// アワード区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardCategory {
    Grand,
    BestOf,
    /// Award of Excellence を含むその他すべて
    Other,
}

impl AwardCategory {
    pub fn from_award(award: &str) -> Self {
        match award {
            GRAND_AWARD => AwardCategory::Grand,
            BEST_OF_AWARD => AwardCategory::BestOf,
            _ => AwardCategory::Other,
        }
    }

    pub fn style(&self) -> AwardStyle {
        match self {
            AwardCategory::Grand => AwardStyle {
                background: "#FFF9C4",
                foreground: "#F57F17",
                border: "#FFE082",
            },
            AwardCategory::BestOf => AwardStyle {
                background: "#E8F5E9",
                foreground: "#2E7D32",
                border: "#A5D6A7",
            },
            AwardCategory::Other => AwardStyle {
                background: "#E3F2FD",
                foreground: "#1565C0",
                border: "#90CAF9",
            },
        }
    }
}

/// award 文字列からスタイルを解決
pub fn award_style(award: &str) -> AwardStyle {
    AwardCategory::from_award(award).style()
}
