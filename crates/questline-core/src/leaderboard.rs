//! Leaderboard ranking.
//!
//! A verified submission earns its quest's difficulty in points, once per
//! quest. Users are ordered by points, then verified quest count, then
//! current streak, then id. Users with identical figures share a rank
//! and the next rank is skipped ("1, 1, 3").

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::quest::{Quest, Submission, SubmissionStatus, UserProfile};
use crate::streak::StreakCalculator;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based competition rank
    pub rank: u32,
    pub user_id: Uuid,
    pub username: Option<String>,
    pub points: u32,
    /// Distinct quests with a verified submission
    pub verified_count: u32,
    pub current_streak: u32,
}

impl LeaderboardEntry {
    fn sort_key(&self) -> (u32, u32, u32) {
        (self.points, self.verified_count, self.current_streak)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Default)]
struct Tally<'a> {
    verified: HashSet<Uuid>,
    submissions: Vec<&'a Submission>,
}

impl Leaderboard {
    /// Rank every user with at least one submission.
    pub fn build(
        quests: &[Quest],
        submissions: &[Submission],
        profiles: &[UserProfile],
        streaks: &StreakCalculator,
        today: DateTime<Utc>,
    ) -> Self {
        let difficulty: HashMap<Uuid, u32> = quests
            .iter()
            .map(|q| (q.id, u32::from(q.difficulty.get())))
            .collect();
        let names: HashMap<Uuid, &str> = profiles
            .iter()
            .filter_map(|p| p.username.as_deref().map(|name| (p.id, name)))
            .collect();

        let mut tallies: BTreeMap<Uuid, Tally<'_>> = BTreeMap::new();
        for submission in submissions {
            let tally = tallies.entry(submission.user_id).or_default();
            tally.submissions.push(submission);
            if submission.status == SubmissionStatus::Verified {
                tally.verified.insert(submission.quest_id);
            }
        }

        let mut entries: Vec<LeaderboardEntry> = tallies
            .into_iter()
            .map(|(user_id, tally)| {
                let points = tally
                    .verified
                    .iter()
                    .filter_map(|quest_id| difficulty.get(quest_id))
                    .sum();
                LeaderboardEntry {
                    rank: 0,
                    user_id,
                    username: names.get(&user_id).map(|n| n.to_string()),
                    points,
                    verified_count: tally.verified.len() as u32,
                    current_streak: streaks.current_streak_for(tally.submissions, today),
                }
            })
            .collect();

        // BTreeMap order makes the id tie-break implicit; sort_by is stable.
        entries.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

        let mut previous: Option<((u32, u32, u32), u32)> = None;
        for (index, entry) in entries.iter_mut().enumerate() {
            let key = entry.sort_key();
            entry.rank = match previous {
                Some((prev_key, prev_rank)) if prev_key == key => prev_rank,
                _ => index as u32 + 1,
            };
            previous = Some((key, entry.rank));
        }

        debug!(users = entries.len(), "built leaderboard");
        Self { entries }
    }

    /// The first `n` rows.
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn position(&self, user_id: Uuid) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.user_id == user_id)
    }
}
