//! Quest recommendations.
//!
//! Ranks active quests for one user from their submission history and
//! declared interests. Time and randomness are passed in by the caller.

mod engine;
mod filter;
mod jitter;
mod scoring;

pub use engine::{
    Recommendation, RecommendConfig, RecommendationScorer, ScoreBreakdown, UserSignals,
};
pub use filter::candidates_for;
pub use jitter::{JitterSource, NoJitter, RngJitter};
pub use scoring::{
    difficulty_progression_score, interest_match_score, matching_interests, recency_score,
    target_difficulty, type_affinity_score, RecommendWeights,
};
