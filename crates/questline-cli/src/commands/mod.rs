pub mod config;
pub mod leaderboard;
pub mod recommend;
pub mod streak;

use std::path::Path;

use chrono::{DateTime, Utc};
use questline_core::{Clock, Config, Snapshot, SystemClock};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load config and snapshot, the two inputs every data command needs.
pub fn load_inputs(data: &Path) -> Result<(Config, Snapshot), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let snapshot = Snapshot::load(data)?;
    tracing::debug!(
        quests = snapshot.quests.len(),
        submissions = snapshot.submissions.len(),
        profiles = snapshot.profiles.len(),
        "loaded snapshot"
    );
    Ok((config, snapshot))
}

/// The pinned instant if given, otherwise wall-clock time.
pub fn instant_or_now(pinned: Option<DateTime<Utc>>) -> DateTime<Utc> {
    pinned.unwrap_or_else(|| SystemClock.now())
}
