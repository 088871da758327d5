//! # Questline Core Library
//!
//! The algorithmic core of a discovery-quest platform. Users complete
//! location-based quests, submit proof and compete on leaderboards; the
//! hosted store owns all of that data. This crate only computes over it.
//!
//! ## Architecture
//!
//! - **Streaks**: consecutive active days, with a grace period for today
//! - **Recommendations**: weighted scoring of candidate quests from history
//!   and interests, with injected clock and jitter
//! - **Leaderboard**: points and ranks from verified submissions
//! - **Storage**: TOML configuration and typed JSON snapshots of store data
//!
//! ## Key Components
//!
//! - [`StreakCalculator`]: current and longest streak
//! - [`RecommendationScorer`]: ranked quest suggestions
//! - [`Leaderboard`]: user ranking
//! - [`Config`]: application configuration management
//! - [`Snapshot`]: validated input records

pub mod clock;
pub mod error;
pub mod leaderboard;
pub mod quest;
pub mod recommend;
pub mod storage;
pub mod streak;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, ValidationError};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use quest::{Difficulty, Quest, QuestInteraction, Submission, SubmissionStatus, UserProfile};
pub use recommend::{
    JitterSource, NoJitter, RecommendConfig, RecommendWeights, Recommendation,
    RecommendationScorer, RngJitter, ScoreBreakdown, UserSignals,
};
pub use storage::{Config, Snapshot};
pub use streak::{StreakCalculator, StreakConfig, StreakSummary};
