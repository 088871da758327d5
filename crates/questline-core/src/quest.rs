//! Quest, submission and profile records.
//!
//! These mirror the rows the hosted store returns. They are typed at the
//! boundary so the algorithms never see loosely shaped data.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Quest difficulty, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Construct a difficulty, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        Self::try_from(i64::from(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::DifficultyOutOfRange(value))
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A location-based challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Category tag such as "nature" or "history".
    pub quest_type: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Moderation status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Verified,
    Rejected,
}

impl SubmissionStatus {
    pub fn is_rejected(self) -> bool {
        matches!(self, SubmissionStatus::Rejected)
    }
}

/// A user's proof-of-completion for a quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub quest_id: Uuid,
    pub user_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

/// Read-only view of a user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A past submission joined with the type and difficulty of its quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestInteraction {
    pub quest_type: String,
    pub difficulty: Difficulty,
}

impl QuestInteraction {
    pub fn new(quest_type: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            quest_type: quest_type.into(),
            difficulty,
        }
    }

    pub fn from_quest(quest: &Quest) -> Self {
        Self::new(quest.quest_type.clone(), quest.difficulty)
    }
}
