//! Emotion score vectors and percentage normalization.

use serde::{Deserialize, Serialize};

/// Raw fractional emotion probabilities for one detected face, as
/// reported by the remote recognition service.
///
/// Values are in [0, 1] but are not required to sum to 1; each field
/// is treated independently. Immutable once received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmotionScores {
    pub anger: f64,
    pub contempt: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happiness: f64,
    pub neutral: f64,
    pub sadness: f64,
    pub surprise: f64,
}

impl EmotionScores {
    /// Convert to integer percentage scores.
    pub fn normalize(&self) -> NormalizedScores {
        NormalizedScores::from(self)
    }
}

/// Integer percentage scores derived from [`EmotionScores`].
///
/// Each field is `round(raw * 100)` with half rounded away from zero.
/// Values are NOT clamped: a raw probability slightly above 1.0 (a
/// known upstream floating-point artifact) yields a percentage above
/// 100. Derived once, never mutated.
///
/// Only anger, happiness, neutral, sadness and surprise feed the
/// classifier; contempt, disgust and fear are carried for
/// completeness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedScores {
    pub anger: i32,
    pub contempt: i32,
    pub disgust: i32,
    pub fear: i32,
    pub happiness: i32,
    pub neutral: i32,
    pub sadness: i32,
    pub surprise: i32,
}

impl From<&EmotionScores> for NormalizedScores {
    fn from(raw: &EmotionScores) -> Self {
        Self {
            anger: to_percent(raw.anger),
            contempt: to_percent(raw.contempt),
            disgust: to_percent(raw.disgust),
            fear: to_percent(raw.fear),
            happiness: to_percent(raw.happiness),
            neutral: to_percent(raw.neutral),
            sadness: to_percent(raw.sadness),
            surprise: to_percent(raw.surprise),
        }
    }
}

/// Half values round away from zero (`f64::round` semantics), so
/// 12.5% becomes 13, never 12.
fn to_percent(raw: f64) -> i32 {
    (raw * 100.0).round() as i32
}
