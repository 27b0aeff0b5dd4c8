//! Emotion-to-template classification.
//!
//! An ordered priority chain maps a normalized score vector to one of
//! the four card templates and the headline number printed on the
//! card. Classification is a pure function of its inputs.

use crate::score::NormalizedScores;
use crate::types::CardTemplate;
use serde::{Deserialize, Serialize};

/// Thresholds and headline boosts for template selection.
///
/// The defaults are the fixed card contract: surprise and anger
/// trigger on a weak signal, happiness only on majority confidence.
/// Alternate values exist for layout experiments, not per-request
/// tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub surprise_threshold: i32,
    pub anger_threshold: i32,
    pub happiness_threshold: i32,
    /// Multiplier applied to the angry headline score.
    pub anger_boost: i32,
    /// Multiplier applied to the happy headline score.
    pub happy_boost: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            surprise_threshold: 10,
            anger_threshold: 10,
            happiness_threshold: 50,
            anger_boost: 2,
            happy_boost: 4,
        }
    }
}

/// Selected template and the headline number rendered on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub template: CardTemplate,
    pub headline_score: i32,
}

/// Pick a card template for a normalized score vector.
///
/// First matching rule wins; later rules are never evaluated once one
/// matches. Comparisons are strict, so a score exactly at its
/// threshold falls through. The boosts only amplify the displayed
/// headline number, never the template decision itself.
pub fn classify(scores: &NormalizedScores, config: &ClassifierConfig) -> Classification {
    if scores.surprise > config.surprise_threshold {
        Classification {
            template: CardTemplate::Surprised,
            headline_score: scores.surprise,
        }
    } else if scores.anger > config.anger_threshold {
        Classification {
            template: CardTemplate::Angry,
            headline_score: scores.anger * config.anger_boost,
        }
    } else if scores.happiness > config.happiness_threshold {
        Classification {
            template: CardTemplate::Happy,
            headline_score: scores.happiness * config.happy_boost,
        }
    } else {
        Classification {
            template: CardTemplate::Neutral,
            headline_score: scores.neutral,
        }
    }
}
