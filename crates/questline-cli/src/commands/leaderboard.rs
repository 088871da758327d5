use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use questline_core::{Leaderboard, StreakCalculator};

use super::{instant_or_now, load_inputs, CommandResult};

#[derive(Args)]
pub struct LeaderboardArgs {
    /// Snapshot JSON file
    #[arg(long)]
    data: PathBuf,
    /// Number of rows to print
    #[arg(long, default_value_t = 10)]
    limit: usize,
    /// Reference instant for streaks (RFC 3339), defaults to now
    #[arg(long)]
    today: Option<DateTime<Utc>>,
}

pub fn run(args: LeaderboardArgs) -> CommandResult {
    let (config, snapshot) = load_inputs(&args.data)?;

    let board = Leaderboard::build(
        &snapshot.quests,
        &snapshot.submissions,
        &snapshot.profiles,
        &StreakCalculator::with_config(config.streak),
        instant_or_now(args.today),
    );
    println!("{}", serde_json::to_string_pretty(board.top(args.limit))?);
    Ok(())
}
