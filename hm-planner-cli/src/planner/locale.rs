use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::PeriodizationBlock;

/// Language used for session labels, details and weekday markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

/// Pace zones a workout can be written against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Easy,
    Threshold,
    Interval,
    Marathon,
}

impl Locale {
    pub fn rest_label(&self) -> &'static str {
        match self {
            Locale::ZhTw => "休息 / 交叉訓練",
            Locale::En => "Rest / cross-training",
        }
    }

    pub fn rest_detail(&self) -> &'static str {
        match self {
            Locale::ZhTw => "可做核心/伸展",
            Locale::En => "Optional core or mobility work",
        }
    }

    pub fn long_label(&self, km: u32) -> String {
        match self {
            Locale::ZhTw => format!("長距離 {}km", km),
            Locale::En => format!("Long run {}km", km),
        }
    }

    pub fn long_detail(&self, pace: &str) -> String {
        match self {
            Locale::ZhTw => format!("配速 ~ {}", pace),
            Locale::En => format!("Pace ~ {}", pace),
        }
    }

    /// Long-run pace text when no 5K time is known
    pub fn conversational_pace(&self) -> &'static str {
        match self {
            Locale::ZhTw => "舒適對話配速",
            Locale::En => "conversational pace",
        }
    }

    pub fn quality_label(&self) -> &'static str {
        match self {
            Locale::ZhTw => "品質課",
            Locale::En => "Quality session",
        }
    }

    pub fn quality_detail(&self, block: PeriodizationBlock, pace: &str) -> String {
        match (self, block) {
            (Locale::ZhTw, PeriodizationBlock::Base) => {
                format!("T 閾值 4×5′ ({})，每次慢跑 2′ 回復", pace)
            }
            (Locale::ZhTw, PeriodizationBlock::Build) => {
                format!("I 間歇 6×800m ({})，每次 400m 慢跑回復", pace)
            }
            (Locale::ZhTw, PeriodizationBlock::Peak) => {
                format!("特異性：2×5km @ {} ~ HM 目標配速，中間慢跑 1km", pace)
            }
            (Locale::ZhTw, PeriodizationBlock::Taper) => {
                format!("減量：T 3×6′ ({})，總量降低，保持感覺", pace)
            }
            (Locale::En, PeriodizationBlock::Base) => {
                format!("T threshold 4×5min ({}), 2min jog recovery between", pace)
            }
            (Locale::En, PeriodizationBlock::Build) => {
                format!("I intervals 6×800m ({}), 400m jog recovery between", pace)
            }
            (Locale::En, PeriodizationBlock::Peak) => {
                format!("Race-specific: 2×5km @ {} ~ HM goal pace, 1km jog between", pace)
            }
            (Locale::En, PeriodizationBlock::Taper) => {
                format!("Taper: T 3×6min ({}), lower total volume, stay sharp", pace)
            }
        }
    }

    pub fn easy_label(&self, km: u32) -> String {
        format!("Easy {}km", km)
    }

    pub fn easy_detail(&self, pace: &str) -> String {
        match self {
            Locale::ZhTw => format!("放鬆 ~ {}", pace),
            Locale::En => format!("Relaxed ~ {}", pace),
        }
    }

    /// Zone name used in place of a numeric pace
    pub fn generic_zone(&self, zone: Zone) -> &'static str {
        match (self, zone) {
            (Locale::ZhTw, Zone::Easy) => "E 配速",
            (Locale::ZhTw, Zone::Threshold) => "T 配速",
            (Locale::ZhTw, Zone::Interval) => "I 配速",
            (Locale::ZhTw, Zone::Marathon) => "M 配速",
            (Locale::En, Zone::Easy) => "E pace",
            (Locale::En, Zone::Threshold) => "T pace",
            (Locale::En, Zone::Interval) => "I pace",
            (Locale::En, Zone::Marathon) => "M pace",
        }
    }

    /// Single-character weekday marker, Monday first.
    pub fn weekday_char(&self, weekday: Weekday) -> char {
        let chars: [char; 7] = match self {
            Locale::ZhTw => ['一', '二', '三', '四', '五', '六', '日'],
            Locale::En => ['M', 'T', 'W', 'T', 'F', 'S', 'S'],
        };
        chars[weekday.num_days_from_monday() as usize]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::ZhTw => write!(f, "zh-TW"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh-tw" | "zh_tw" | "zh" => Ok(Locale::ZhTw),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(anyhow::anyhow!("Unsupported locale: {}", s)),
        }
    }
}
