//! JSON snapshot of the hosted store.
//!
//! A snapshot is what the data layer hands over: quests, submissions and
//! profiles as typed records. Referential problems are rejected here so
//! the algorithms can assume consistent input.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{CoreError, Result, ValidationError};
use crate::quest::{Quest, QuestInteraction, Submission, UserProfile};
use crate::recommend;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
}

impl Snapshot {
    /// Parse and validate a snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Reject duplicate quest ids and submissions pointing at unknown quests.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut ids = HashSet::with_capacity(self.quests.len());
        for quest in &self.quests {
            if !ids.insert(quest.id) {
                warn!(quest = %quest.id, "duplicate quest in snapshot");
                return Err(ValidationError::DuplicateQuest(quest.id));
            }
        }

        for submission in &self.submissions {
            if !ids.contains(&submission.quest_id) {
                warn!(
                    submission = %submission.id,
                    quest = %submission.quest_id,
                    "submission references unknown quest"
                );
                return Err(ValidationError::UnknownQuest {
                    submission: submission.id,
                    quest: submission.quest_id,
                });
            }
        }

        Ok(())
    }

    pub fn quest(&self, id: Uuid) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn profile(&self, user_id: Uuid) -> Option<&UserProfile> {
        self.profiles.iter().find(|p| p.id == user_id)
    }

    /// All submissions by one user, in snapshot order.
    pub fn submissions_for(&self, user_id: Uuid) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }

    /// A user's non-rejected submissions joined with their quests.
    pub fn history_for(&self, user_id: Uuid) -> Vec<QuestInteraction> {
        self.submissions
            .iter()
            .filter(|s| s.user_id == user_id && !s.status.is_rejected())
            .filter_map(|s| self.quest(s.quest_id))
            .map(QuestInteraction::from_quest)
            .collect()
    }

    /// Active quests the user has not completed yet.
    pub fn candidates_for(&self, user_id: Uuid) -> Vec<Quest> {
        recommend::candidates_for(&self.quests, &self.submissions, user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEST_A: &str = "00000000-0000-0000-0000-0000000000a1";
    const QUEST_B: &str = "00000000-0000-0000-0000-0000000000b2";
    const USER: &str = "00000000-0000-0000-0000-000000000001";

    fn doc(submission_quest: &str, second_quest: &str) -> String {
        format!(
            r#"{{
                "quests": [
                    {{"id": "{QUEST_A}", "title": "Forest walk", "quest_type": "nature",
                      "difficulty": 3, "created_at": "2026-05-01T10:00:00Z"}},
                    {{"id": "{second_quest}", "title": "Museum", "quest_type": "history",
                      "difficulty": 2, "created_at": "2026-05-01T10:00:00Z"}}
                ],
                "submissions": [
                    {{"id": "00000000-0000-0000-0000-0000000000f1", "quest_id": "{submission_quest}",
                      "user_id": "{USER}", "submitted_at": "2026-05-02T10:00:00Z",
                      "status": "verified"}}
                ],
                "profiles": [
                    {{"id": "{USER}", "interests": ["forest"]}}
                ]
            }}"#
        )
    }

    #[test]
    fn test_valid_snapshot_joins_history() {
        let snapshot = Snapshot::from_json(&doc(QUEST_A, QUEST_B)).unwrap();
        let user: Uuid = USER.parse().unwrap();

        let history = snapshot.history_for(user);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].quest_type, "nature");
        assert_eq!(history[0].difficulty.get(), 3);

        let candidates = snapshot.candidates_for(user);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Museum");

        assert_eq!(snapshot.profile(user).unwrap().interests, vec!["forest"]);
        assert_eq!(snapshot.submissions_for(user).len(), 1);
    }

    #[test]
    fn test_unknown_quest_rejected() {
        let missing = "00000000-0000-0000-0000-0000000000ff";
        let err = Snapshot::from_json(&doc(missing, QUEST_B)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnknownQuest { .. })
        ));
    }

    #[test]
    fn test_duplicate_quest_rejected() {
        let err = Snapshot::from_json(&doc(QUEST_A, QUEST_A)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::DuplicateQuest(_))
        ));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.quests.is_empty());
        assert!(snapshot.submissions.is_empty());
        assert!(snapshot.profiles.is_empty());
    }

    #[test]
    fn test_load_reports_path() {
        let err = Snapshot::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
