//! Integration tests for daily streaks.
//!
//! Covers the documented walk rules end to end plus property checks over
//! arbitrary histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use questline_core::{Snapshot, StreakCalculator, StreakConfig};
use uuid::Uuid;

fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 15, 14, 30, 0).unwrap()
}

fn history(days_ago: &[i64]) -> Vec<DateTime<Utc>> {
    days_ago
        .iter()
        .map(|d| today() - Duration::days(*d))
        .collect()
}

#[test]
fn test_documented_examples() {
    let calc = StreakCalculator::new();

    assert_eq!(calc.current_streak(history(&[]), today()), 0);
    assert_eq!(calc.current_streak(history(&[0]), today()), 1);
    assert_eq!(calc.current_streak(history(&[1, 2, 3, 4, 5]), today()), 5);
    // ten-day run with the third day missing: today and yesterday count
    assert_eq!(
        calc.current_streak(history(&[0, 1, 3, 4, 5, 6, 7, 8, 9]), today()),
        2
    );
}

#[test]
fn test_every_day_active_equals_window() {
    let calc = StreakCalculator::new();
    let all: Vec<i64> = (0..45).collect();
    assert_eq!(calc.current_streak(history(&all), today()), 30);
}

#[test]
fn test_streak_from_snapshot_submissions() {
    let json = r#"{
        "quests": [
            {"id": "00000000-0000-0000-0000-0000000000a1", "title": "Dawn chorus",
             "quest_type": "nature", "difficulty": 1, "created_at": "2026-08-01T00:00:00Z"}
        ],
        "submissions": [
            {"id": "00000000-0000-0000-0000-0000000000f1", "quest_id": "00000000-0000-0000-0000-0000000000a1",
             "user_id": "00000000-0000-0000-0000-000000000001", "submitted_at": "2026-09-14T07:00:00Z",
             "status": "verified"},
            {"id": "00000000-0000-0000-0000-0000000000f2", "quest_id": "00000000-0000-0000-0000-0000000000a1",
             "user_id": "00000000-0000-0000-0000-000000000001", "submitted_at": "2026-09-13T07:00:00Z",
             "status": "rejected"},
            {"id": "00000000-0000-0000-0000-0000000000f3", "quest_id": "00000000-0000-0000-0000-0000000000a1",
             "user_id": "00000000-0000-0000-0000-000000000002", "submitted_at": "2026-09-13T07:00:00Z",
             "status": "pending"}
        ]
    }"#;
    let snapshot = Snapshot::from_json(json).unwrap();
    let user: Uuid = "00000000-0000-0000-0000-000000000001".parse().unwrap();
    let submissions = snapshot.submissions_for(user);

    let calc = StreakCalculator::new();
    assert_eq!(calc.current_streak_for(&submissions, today()), 1);

    let lenient = StreakCalculator::with_config(StreakConfig {
        count_rejected: true,
        ..Default::default()
    });
    let summary = lenient.summarize_submissions(&submissions, today());
    assert_eq!(summary.current, 2);
    assert_eq!(summary.longest, 2);
}

proptest! {
    #[test]
    fn prop_streak_bounded_by_window(
        offsets in prop::collection::vec(-5i64..60, 0..80),
        lookback in 1u32..40,
    ) {
        let calc = StreakCalculator::with_config(StreakConfig {
            lookback_days: lookback,
            ..Default::default()
        });
        let streak = calc.current_streak(history(&offsets), today());
        prop_assert!(streak <= lookback);
    }

    #[test]
    fn prop_order_does_not_matter(mut offsets in prop::collection::vec(0i64..40, 0..40)) {
        let calc = StreakCalculator::new();
        let forward = calc.current_streak(history(&offsets), today());
        offsets.reverse();
        let backward = calc.current_streak(history(&offsets), today());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_current_never_exceeds_longest(offsets in prop::collection::vec(0i64..40, 1..40)) {
        let summary = StreakCalculator::new().summarize(history(&offsets), today());
        prop_assert!(summary.current <= summary.longest);
        prop_assert!(summary.longest <= summary.active_days);
    }
}
