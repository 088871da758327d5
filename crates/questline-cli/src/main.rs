use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "questline", version, about = "Questline CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current activity streak for a user
    Streak(commands::streak::StreakArgs),
    /// Ranked quest recommendations for a user
    Recommend(commands::recommend::RecommendArgs),
    /// Points leaderboard
    Leaderboard(commands::leaderboard::LeaderboardArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("QUESTLINE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Leaderboard(args) => commands::leaderboard::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
