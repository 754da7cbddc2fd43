use clap::Parser;
use indicatif::ProgressBar;
use league_recap::analysis::summary::StatsAggregator;
use league_recap::api::client::{RiotApiClient, MAX_MATCH_COUNT};
use league_recap::config::Config;
use league_recap::display::output::{
    display_error, display_info, display_success, display_summary,
};
use league_recap::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "League Recap")]
#[command(about = "Summarize your recent ranked performance: win rate and KDA per champion", long_about = None)]
struct Args {
    /// Riot ID in Name#Tag form (e.g. TFBlade#122)
    riot_id: String,

    /// Region (default: na1, or RIOT_REGION from the environment)
    #[arg(short, long)]
    region: Option<String>,

    /// Number of recent matches to analyze (default: 20, max: 100)
    #[arg(short, long, default_value = "20")]
    matches: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn parse_riot_id(riot_id: &str) -> Result<(&str, &str), AppError> {
    riot_id.split_once('#').ok_or(AppError::InvalidRiotId)
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let (game_name, tag_line) = parse_riot_id(&args.riot_id)?;

    display_info(&format!(
        "Fetching data for {} in region {}",
        args.riot_id, config.region
    ));

    let client = RiotApiClient::new(config);

    let account = client.get_account(game_name, tag_line)?;
    display_success(&format!("Found PUUID: {}", &account.puuid[0..8.min(account.puuid.len())]));

    let match_ids = client.get_match_ids(&account.puuid, args.matches.min(MAX_MATCH_COUNT))?;
    display_success(&format!("Found {} matches to analyze", match_ids.len()));

    let pb = ProgressBar::new(match_ids.len() as u64);
    pb.set_message("Fetching match details");

    let mut aggregator = StatsAggregator::new(&account.puuid);
    for match_id in &match_ids {
        let match_data = client.get_match(match_id)?;
        aggregator.record_match(&match_data);
        pb.inc(1);
    }
    pb.finish_with_message("✓ Match data fetched");

    let summary = aggregator.finish();
    display_summary(&args.riot_id, &summary);

    Ok(())
}
