//! Candidate selection for the recommendation engine.

use std::collections::HashSet;

use uuid::Uuid;

use crate::quest::{Quest, Submission};

/// Active quests `user_id` has not already completed.
///
/// A quest counts as completed once the user has a pending or verified
/// submission for it; a rejected submission leaves it open for another try.
pub fn candidates_for(quests: &[Quest], submissions: &[Submission], user_id: Uuid) -> Vec<Quest> {
    let done: HashSet<Uuid> = submissions
        .iter()
        .filter(|s| s.user_id == user_id && !s.status.is_rejected())
        .map(|s| s.quest_id)
        .collect();

    quests
        .iter()
        .filter(|q| q.is_active && !done.contains(&q.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::{Difficulty, SubmissionStatus};
    use chrono::Utc;

    fn quest(n: u128, active: bool) -> Quest {
        Quest {
            id: Uuid::from_u128(n),
            title: format!("Quest {n}"),
            description: None,
            quest_type: "nature".into(),
            difficulty: Difficulty::new(2).unwrap(),
            location: None,
            created_at: Utc::now(),
            is_active: active,
        }
    }

    fn submission(user: u128, quest: u128, status: SubmissionStatus) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            quest_id: Uuid::from_u128(quest),
            user_id: Uuid::from_u128(user),
            submitted_at: Utc::now(),
            status,
        }
    }

    #[test]
    fn test_filters_inactive_and_completed() {
        let quests = vec![quest(1, true), quest(2, false), quest(3, true), quest(4, true)];
        let submissions = vec![
            submission(10, 1, SubmissionStatus::Verified),
            submission(10, 3, SubmissionStatus::Rejected),
            submission(11, 4, SubmissionStatus::Pending),
        ];

        let ids: Vec<_> = candidates_for(&quests, &submissions, Uuid::from_u128(10))
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![Uuid::from_u128(3), Uuid::from_u128(4)]);
    }

    #[test]
    fn test_pending_counts_as_completed() {
        let quests = vec![quest(1, true)];
        let submissions = vec![submission(10, 1, SubmissionStatus::Pending)];
        assert!(candidates_for(&quests, &submissions, Uuid::from_u128(10)).is_empty());
    }
}
