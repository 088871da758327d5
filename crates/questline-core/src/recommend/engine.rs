//! Recommendation engine.
//!
//! Scores every candidate with the terms in [`super::scoring`], sorts by
//! total descending and keeps the first N. The sort is stable, so equal
//! totals keep the caller's order.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::jitter::JitterSource;
use super::scoring::{
    difficulty_progression_score, interest_match_score, recency_score, target_difficulty,
    type_affinity_score, RecommendWeights,
};
use crate::clock::Clock;
use crate::error::ConfigError;
use crate::quest::{Quest, QuestInteraction, UserProfile};

const MAX_RECENCY_DAYS: i64 = 36_500;

/// Recommendation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Default number of quests returned
    #[serde(default = "default_count")]
    pub count: usize,
    /// Age in days under which a quest earns the recency bonus
    #[serde(default = "default_recency_days")]
    pub recency_days: i64,
    /// Width of the jitter interval
    #[serde(default = "default_jitter_span")]
    pub jitter_span: f64,
    /// Target difficulty for users with no history
    #[serde(default = "default_target_difficulty")]
    pub default_target_difficulty: f64,
    /// Added to the average past difficulty to get the target
    #[serde(default = "default_difficulty_step")]
    pub difficulty_step: f64,
    #[serde(default)]
    pub weights: RecommendWeights,
}

fn default_count() -> usize {
    5
}
fn default_recency_days() -> i64 {
    7
}
fn default_jitter_span() -> f64 {
    2.0
}
fn default_target_difficulty() -> f64 {
    2.5
}
fn default_difficulty_step() -> f64 {
    0.5
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            recency_days: default_recency_days(),
            jitter_span: default_jitter_span(),
            default_target_difficulty: default_target_difficulty(),
            difficulty_step: default_difficulty_step(),
            weights: RecommendWeights::default(),
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if !(0..=MAX_RECENCY_DAYS).contains(&self.recency_days) {
            return Err(ConfigError::InvalidValue {
                key: "recommend.recency_days".into(),
                message: format!(
                    "must be between 0 and {MAX_RECENCY_DAYS}, got {}",
                    self.recency_days
                ),
            });
        }
        let reals = [
            ("recommend.jitter_span", self.jitter_span),
            ("recommend.default_target_difficulty", self.default_target_difficulty),
            ("recommend.difficulty_step", self.difficulty_step),
        ];
        for (key, value) in reals {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// What the scorer knows about the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserSignals<'a> {
    /// Past submissions joined with their quests
    pub history: &'a [QuestInteraction],
    /// Declared interest tags
    pub interests: &'a [String],
}

impl<'a> UserSignals<'a> {
    pub fn new(history: &'a [QuestInteraction], interests: &'a [String]) -> Self {
        Self { history, interests }
    }

    pub fn from_profile(history: &'a [QuestInteraction], profile: &'a UserProfile) -> Self {
        Self::new(history, &profile.interests)
    }
}

/// Per-term score breakdown for one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub type_affinity: f64,
    pub interest_match: f64,
    pub difficulty_progression: f64,
    pub recency: f64,
    pub jitter: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.type_affinity
            + self.interest_match
            + self.difficulty_progression
            + self.recency
            + self.jitter
    }

    /// Terms by name, in scoring order.
    pub fn terms(&self) -> [(&'static str, f64); 5] {
        [
            ("type_affinity", self.type_affinity),
            ("interest_match", self.interest_match),
            ("difficulty_progression", self.difficulty_progression),
            ("recency", self.recency),
            ("jitter", self.jitter),
        ]
    }

    /// The term contributing the most, ignoring jitter.
    pub fn top_term(&self) -> Option<&'static str> {
        self.terms()
            .into_iter()
            .filter(|(name, value)| *name != "jitter" && *value > 0.0)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

/// A ranked quest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub quest: Quest,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Quest recommendation scorer
#[derive(Debug, Clone, Default)]
pub struct RecommendationScorer {
    config: RecommendConfig,
}

impl RecommendationScorer {
    /// Create a new scorer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: RecommendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Score one candidate against a precomputed target difficulty.
    fn score_with_target<C, J>(
        &self,
        quest: &Quest,
        signals: &UserSignals<'_>,
        target: f64,
        clock: &C,
        jitter: &mut J,
    ) -> ScoreBreakdown
    where
        C: Clock + ?Sized,
        J: JitterSource + ?Sized,
    {
        let weights = &self.config.weights;
        ScoreBreakdown {
            type_affinity: type_affinity_score(quest, signals.history, weights.type_affinity),
            interest_match: interest_match_score(quest, signals.interests, weights.interest_match),
            difficulty_progression: difficulty_progression_score(
                quest,
                target,
                weights.difficulty_cap,
            ),
            recency: recency_score(
                quest,
                clock.now(),
                Duration::days(self.config.recency_days.clamp(0, MAX_RECENCY_DAYS)),
                weights.recency,
            ),
            jitter: jitter.jitter(self.config.jitter_span),
        }
    }

    /// Score a single candidate.
    pub fn score<C, J>(
        &self,
        quest: &Quest,
        signals: &UserSignals<'_>,
        clock: &C,
        jitter: &mut J,
    ) -> ScoreBreakdown
    where
        C: Clock + ?Sized,
        J: JitterSource + ?Sized,
    {
        let target = self.target(signals);
        self.score_with_target(quest, signals, target, clock, jitter)
    }

    fn target(&self, signals: &UserSignals<'_>) -> f64 {
        target_difficulty(
            signals.history,
            self.config.difficulty_step,
            self.config.default_target_difficulty,
        )
    }

    /// Rank candidates and return the best `count`.
    ///
    /// # Arguments
    /// * `candidates` - Active quests the user has not completed
    /// * `signals` - The user's history and interests
    /// * `count` - Maximum number of results
    /// * `clock` - Evaluation time for the recency term
    /// * `jitter` - Random source, drawn once per candidate in input order
    ///
    /// # Returns
    /// `min(count, candidates.len())` recommendations, best first
    pub fn recommend<C, J>(
        &self,
        candidates: &[Quest],
        signals: &UserSignals<'_>,
        count: usize,
        clock: &C,
        jitter: &mut J,
    ) -> Vec<Recommendation>
    where
        C: Clock + ?Sized,
        J: JitterSource + ?Sized,
    {
        let target = self.target(signals);

        let mut ranked: Vec<Recommendation> = candidates
            .iter()
            .map(|quest| {
                let breakdown = self.score_with_target(quest, signals, target, clock, jitter);
                Recommendation {
                    quest: quest.clone(),
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(count);

        debug!(
            candidates = candidates.len(),
            history = signals.history.len(),
            target,
            returned = ranked.len(),
            "ranked quest candidates"
        );
        ranked
    }

    /// [`Self::recommend`] with the configured default count.
    pub fn recommend_default<C, J>(
        &self,
        candidates: &[Quest],
        signals: &UserSignals<'_>,
        clock: &C,
        jitter: &mut J,
    ) -> Vec<Recommendation>
    where
        C: Clock + ?Sized,
        J: JitterSource + ?Sized,
    {
        self.recommend(candidates, signals, self.config.count, clock, jitter)
    }
}
