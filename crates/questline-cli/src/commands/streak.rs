use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use questline_core::StreakCalculator;
use serde_json::json;
use uuid::Uuid;

use super::{instant_or_now, load_inputs, CommandResult};

#[derive(Args)]
pub struct StreakArgs {
    /// Snapshot JSON file
    #[arg(long)]
    data: PathBuf,
    /// User id
    #[arg(long)]
    user: Uuid,
    /// Reference instant (RFC 3339), defaults to now
    #[arg(long)]
    today: Option<DateTime<Utc>>,
    /// Override the configured lookback window in days
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    lookback: Option<u32>,
    /// Include longest streak and activity totals
    #[arg(long)]
    summary: bool,
}

pub fn run(args: StreakArgs) -> CommandResult {
    let (config, snapshot) = load_inputs(&args.data)?;

    let mut streak_config = config.streak;
    if let Some(days) = args.lookback {
        streak_config.lookback_days = days;
    }
    let calc = StreakCalculator::with_config(streak_config);
    let today = instant_or_now(args.today);
    let submissions = snapshot.submissions_for(args.user);

    let output = if args.summary {
        let summary = calc.summarize_submissions(&submissions, today);
        json!({ "user_id": args.user, "summary": summary })
    } else {
        let streak = calc.current_streak_for(&submissions, today);
        json!({ "user_id": args.user, "streak": streak })
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
