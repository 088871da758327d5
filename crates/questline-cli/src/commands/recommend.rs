use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use questline_core::{
    FixedClock, JitterSource, NoJitter, Quest, RecommendationScorer, RngJitter, UserSignals,
};
use uuid::Uuid;

use super::{instant_or_now, load_inputs, CommandResult};

#[derive(Args)]
pub struct RecommendArgs {
    /// Snapshot JSON file
    #[arg(long)]
    data: PathBuf,
    /// User id
    #[arg(long)]
    user: Uuid,
    /// Number of quests, defaults to recommend.count
    #[arg(long)]
    count: Option<usize>,
    /// Seed for the jitter term
    #[arg(long, conflicts_with = "no_jitter")]
    seed: Option<u64>,
    /// Disable the jitter term
    #[arg(long)]
    no_jitter: bool,
    /// Evaluation instant (RFC 3339), defaults to now
    #[arg(long)]
    now: Option<DateTime<Utc>>,
    /// Include score breakdowns
    #[arg(long)]
    explain: bool,
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let (config, snapshot) = load_inputs(&args.data)?;

    let history = snapshot.history_for(args.user);
    let interests: &[String] = snapshot
        .profile(args.user)
        .map(|p| p.interests.as_slice())
        .unwrap_or_default();
    let candidates = snapshot.candidates_for(args.user);

    let count = args.count.unwrap_or(config.recommend.count);
    let scorer = RecommendationScorer::with_config(config.recommend);
    let clock = FixedClock(instant_or_now(args.now));

    let mut jitter: Box<dyn JitterSource> = match (args.no_jitter, args.seed) {
        (true, _) => Box::new(NoJitter),
        (false, Some(seed)) => Box::new(RngJitter::seeded(seed)),
        (false, None) => Box::new(RngJitter::from_entropy()),
    };

    let ranked = scorer.recommend(
        &candidates,
        &UserSignals::new(&history, interests),
        count,
        &clock,
        jitter.as_mut(),
    );

    let json = if args.explain {
        serde_json::to_string_pretty(&ranked)?
    } else {
        let quests: Vec<&Quest> = ranked.iter().map(|r| &r.quest).collect();
        serde_json::to_string_pretty(&quests)?
    };
    println!("{json}");
    Ok(())
}
