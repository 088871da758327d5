//! Recommendation scoring terms.
//!
//! Each term is a standalone function so a ranking can be reproduced and
//! explained term by term:
//! - type affinity: +3 per past interaction with the same quest type
//! - interest match: +2 per interest found in the quest's type, title or description
//! - difficulty progression: up to +3 for quests near the user's next step
//! - recency: +1 for quests created within the last week
//! - jitter: a random value in [0, 2)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::quest::{Quest, QuestInteraction};

/// Weights for each scoring term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendWeights {
    /// Points per past interaction sharing the candidate's quest type
    #[serde(default = "default_type_affinity")]
    pub type_affinity: f64,
    /// Points per matching interest tag
    #[serde(default = "default_interest_match")]
    pub interest_match: f64,
    /// Maximum difficulty progression bonus
    #[serde(default = "default_difficulty_cap")]
    pub difficulty_cap: f64,
    /// Bonus for recently created quests
    #[serde(default = "default_recency")]
    pub recency: f64,
}

fn default_type_affinity() -> f64 {
    3.0
}
fn default_interest_match() -> f64 {
    2.0
}
fn default_difficulty_cap() -> f64 {
    3.0
}
fn default_recency() -> f64 {
    1.0
}

impl Default for RecommendWeights {
    fn default() -> Self {
        Self {
            type_affinity: default_type_affinity(),
            interest_match: default_interest_match(),
            difficulty_cap: default_difficulty_cap(),
            recency: default_recency(),
        }
    }
}

impl RecommendWeights {
    /// Validate that all weights are finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("type_affinity", self.type_affinity),
            ("interest_match", self.interest_match),
            ("difficulty_cap", self.difficulty_cap),
            ("recency", self.recency),
        ];

        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("recommend.weights.{name}"),
                    message: format!("must be a non-negative number, got {weight}"),
                });
            }
        }

        Ok(())
    }
}

/// Type affinity score.
///
/// `weight` points for every past interaction whose quest type equals the
/// candidate's.
pub fn type_affinity_score(quest: &Quest, history: &[QuestInteraction], weight: f64) -> f64 {
    let shared = history
        .iter()
        .filter(|h| h.quest_type == quest.quest_type)
        .count();
    shared as f64 * weight
}

/// Number of interest tags found, case-insensitively, in the quest's type,
/// title or description. Blank tags never match.
pub fn matching_interests(quest: &Quest, interests: &[String]) -> usize {
    let fields = [
        quest.quest_type.to_lowercase(),
        quest.title.to_lowercase(),
        quest.description.as_deref().unwrap_or_default().to_lowercase(),
    ];

    interests
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| fields.iter().any(|f| f.contains(tag.as_str())))
        .count()
}

/// Interest match score.
pub fn interest_match_score(quest: &Quest, interests: &[String], weight: f64) -> f64 {
    matching_interests(quest, interests) as f64 * weight
}

/// Difficulty the user should try next: one step above their average, or
/// `default_target` with no history.
pub fn target_difficulty(history: &[QuestInteraction], step: f64, default_target: f64) -> f64 {
    if history.is_empty() {
        return default_target;
    }
    let sum: f64 = history.iter().map(|h| h.difficulty.as_f64()).sum();
    sum / history.len() as f64 + step
}

/// Difficulty progression bonus (0 to `cap` points).
///
/// Highest when the candidate sits exactly on the target, one point less per
/// level of distance.
pub fn difficulty_progression_score(quest: &Quest, target: f64, cap: f64) -> f64 {
    (cap - (quest.difficulty.as_f64() - target).abs()).max(0.0)
}

/// Recency boost for quests created within `window` of `now`.
pub fn recency_score(quest: &Quest, now: DateTime<Utc>, window: Duration, weight: f64) -> f64 {
    if now.signed_duration_since(quest.created_at) <= window {
        weight
    } else {
        0.0
    }
}
