//! Daily activity streaks.
//!
//! A streak is the number of consecutive calendar days, ending today or
//! yesterday, on which a user produced at least one submission. Today gets
//! a grace period: a user who has not submitted yet today keeps the streak
//! they built up to yesterday.

use std::collections::BTreeSet;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quest::Submission;

/// Configuration for streak calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Number of days examined, starting with today
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// Offset applied before a timestamp is reduced to a calendar date
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Whether rejected submissions still count as activity
    #[serde(default)]
    pub count_rejected: bool,
}

fn default_lookback_days() -> u32 {
    30
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            utc_offset_minutes: 0,
            count_rejected: false,
        }
    }
}

/// Streak figures for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Current streak, bounded by the lookback window
    pub current: u32,
    /// Longest run of consecutive active days anywhere in the history
    pub longest: u32,
    /// Distinct days with activity
    pub active_days: u32,
    /// Most recent day with activity
    pub last_active: Option<NaiveDate>,
}

/// Streak calculator
#[derive(Debug, Clone, Default)]
pub struct StreakCalculator {
    config: StreakConfig,
}

impl StreakCalculator {
    /// Create a new calculator with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: StreakConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StreakConfig {
        &self.config
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.config.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Calendar date of an instant in the configured offset.
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.offset()).date_naive()
    }

    fn active_days<I>(&self, timestamps: I) -> BTreeSet<NaiveDate>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        timestamps.into_iter().map(|ts| self.local_date(ts)).collect()
    }

    fn walk(&self, days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
        let mut streak = 0;
        for offset in 0..self.config.lookback_days {
            let Some(day) = today.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            if days.contains(&day) {
                streak += 1;
            } else if offset == 0 {
                // nothing yet today
                continue;
            } else {
                break;
            }
        }
        streak
    }

    /// Current streak from raw activity timestamps, in any order.
    ///
    /// # Arguments
    /// * `timestamps` - Activity instants for one user
    /// * `today` - Reference instant the walk starts from
    ///
    /// # Returns
    /// Streak length in `0..=lookback_days`
    pub fn current_streak<I>(&self, timestamps: I, today: DateTime<Utc>) -> u32
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let days = self.active_days(timestamps);
        let streak = self.walk(&days, self.local_date(today));
        debug!(active_days = days.len(), streak, "computed current streak");
        streak
    }

    /// Current streak from a user's submissions.
    pub fn current_streak_for<'s, I>(&self, submissions: I, today: DateTime<Utc>) -> u32
    where
        I: IntoIterator<Item = &'s Submission>,
    {
        self.current_streak(self.counted(submissions), today)
    }

    /// Current and longest streak plus activity totals.
    pub fn summarize<I>(&self, timestamps: I, today: DateTime<Utc>) -> StreakSummary
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let days = self.active_days(timestamps);
        if days.is_empty() {
            return StreakSummary::default();
        }

        let mut longest = 1u32;
        let mut run = 1u32;
        let mut prev: Option<NaiveDate> = None;
        for &day in &days {
            if let Some(p) = prev {
                if p.succ_opt() == Some(day) {
                    run += 1;
                    longest = longest.max(run);
                } else {
                    run = 1;
                }
            }
            prev = Some(day);
        }

        StreakSummary {
            current: self.walk(&days, self.local_date(today)),
            longest,
            active_days: days.len() as u32,
            last_active: days.last().copied(),
        }
    }

    /// Summary from a user's submissions.
    pub fn summarize_submissions<'s, I>(
        &self,
        submissions: I,
        today: DateTime<Utc>,
    ) -> StreakSummary
    where
        I: IntoIterator<Item = &'s Submission>,
    {
        self.summarize(self.counted(submissions), today)
    }

    fn counted<'s, I>(&self, submissions: I) -> Vec<DateTime<Utc>>
    where
        I: IntoIterator<Item = &'s Submission>,
    {
        submissions
            .into_iter()
            .filter(|s| self.config.count_rejected || !s.status.is_rejected())
            .map(|s| s.submitted_at)
            .collect()
    }
}
