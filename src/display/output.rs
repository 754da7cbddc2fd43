use crate::analysis::summary::{ChampionSummary, PlayerSummary};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    rank: String,
    champion: String,
    games: String,
    record: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    kda: String,
}

/// One champion as a single summary line, e.g. `Jax 50% (1W 1L) 2.50 KDA`.
pub fn format_champion_line(c: &ChampionSummary) -> String {
    format!(
        "{} {:.0}% ({}W {}L) {:.2} KDA",
        c.champion, c.winrate, c.wins, c.losses, c.kda
    )
}

pub fn display_summary(riot_id: &str, summary: &PlayerSummary) {
    println!(
        "\n{}",
        format!("📊 Recent Performance for {}", riot_id).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    println!("Riot ID: {}", riot_id);
    println!("Total Games Analyzed: {}", summary.total_matches);
    println!("Overall Win Rate: {:.2}%", summary.overall_winrate);
    println!("Overall KDA: {:.2}", summary.overall_kda);

    println!("\n{}", "Top 3 Champions:".bold().yellow());
    for c in summary.champions.iter().take(3) {
        println!("{}", format_champion_line(c));
    }

    if summary.champions.len() > 1 {
        display_champion_table(&summary.champions);
    }

    println!();
}

fn display_champion_table(champions: &[ChampionSummary]) {
    println!("\n{}", "Champion Breakdown".bold().cyan());

    let rows: Vec<ChampionRow> = champions
        .iter()
        .enumerate()
        .map(|(idx, c)| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: c.champion.clone(),
            games: format!("{}", c.games),
            record: format!("{}W {}L", c.wins, c.losses),
            win_rate: format!("{:.1}%", c.winrate),
            kda: format!("{:.2}", c.kda),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
