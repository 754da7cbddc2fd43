use crate::api::models::MatchDto;
use std::collections::HashMap;

/// Running totals for one champion. Created lazily the first time the player
/// is seen on that champion, updated once per match.
#[derive(Debug, Clone)]
pub struct ChampionAccumulator {
    pub name: String,
    pub games: usize,
    pub wins: usize,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl ChampionAccumulator {
    pub fn new(name: String) -> Self {
        ChampionAccumulator {
            name,
            games: 0,
            wins: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionSummary {
    pub champion: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub winrate: f64,
    pub kda: f64,
}

#[derive(Debug, Clone)]
pub struct PlayerSummary {
    pub total_matches: usize,
    pub wins: usize,
    pub overall_winrate: f64,
    pub overall_kda: f64,
    pub champions: Vec<ChampionSummary>,
}

/// (kills + assists) / deaths, with deaths floored at 1 so a deathless run
/// scores exactly kills + assists.
fn kda(kills: u32, assists: u32, deaths: u32) -> f64 {
    (kills + assists) as f64 / deaths.max(1) as f64
}

fn winrate(wins: usize, games: usize) -> f64 {
    if games == 0 {
        0.0
    } else {
        (wins as f64 / games as f64) * 100.0
    }
}

/// Folds one player's match records into overall and per-champion stats.
///
/// Accumulators are kept in first-encounter order; the final sort by games
/// descending is stable, so champions with equal game counts stay in the
/// order they were first seen.
pub struct StatsAggregator {
    puuid: String,
    total_matches: usize,
    wins: usize,
    kills: u32,
    deaths: u32,
    assists: u32,
    champions: Vec<ChampionAccumulator>,
    index: HashMap<String, usize>,
}

impl StatsAggregator {
    pub fn new(puuid: &str) -> Self {
        StatsAggregator {
            puuid: puuid.to_string(),
            total_matches: 0,
            wins: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
            champions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Folds one match in. A match with no participant for this PUUID still
    /// counts toward the total but contributes nothing else.
    pub fn record_match(&mut self, match_data: &MatchDto) {
        self.total_matches += 1;

        let participant = match_data
            .info
            .participants
            .iter()
            .find(|p| p.puuid == self.puuid);

        let Some(p) = participant else {
            return;
        };

        if p.win {
            self.wins += 1;
        }
        self.kills += p.kills;
        self.deaths += p.deaths;
        self.assists += p.assists;

        let slot = match self.index.get(&p.champion_name) {
            Some(&i) => i,
            None => {
                self.champions
                    .push(ChampionAccumulator::new(p.champion_name.clone()));
                let i = self.champions.len() - 1;
                self.index.insert(p.champion_name.clone(), i);
                i
            }
        };

        let acc = &mut self.champions[slot];
        acc.games += 1;
        if p.win {
            acc.wins += 1;
        }
        acc.kills += p.kills;
        acc.deaths += p.deaths;
        acc.assists += p.assists;
    }

    pub fn finish(self) -> PlayerSummary {
        let mut champions: Vec<ChampionSummary> = self
            .champions
            .iter()
            .map(|acc| ChampionSummary {
                champion: acc.name.clone(),
                games: acc.games,
                wins: acc.wins,
                losses: acc.games - acc.wins,
                winrate: winrate(acc.wins, acc.games),
                kda: kda(acc.kills, acc.assists, acc.deaths),
            })
            .collect();

        // sort_by is stable: ties keep first-encounter order
        champions.sort_by(|a, b| b.games.cmp(&a.games));

        PlayerSummary {
            total_matches: self.total_matches,
            wins: self.wins,
            overall_winrate: winrate(self.wins, self.total_matches),
            overall_kda: kda(self.kills, self.assists, self.deaths),
            champions,
        }
    }
}

/// One-shot fold over an already-fetched match list.
pub fn summarize(puuid: &str, matches: &[MatchDto]) -> PlayerSummary {
    let mut aggregator = StatsAggregator::new(puuid);
    for m in matches {
        aggregator.record_match(m);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{MatchInfo, MatchMetadata, ParticipantDto};

    const ME: &str = "puuid-me";

    fn participant(puuid: &str, champion: &str, win: bool, k: u32, d: u32, a: u32) -> ParticipantDto {
        ParticipantDto {
            puuid: puuid.to_string(),
            champion_name: champion.to_string(),
            win,
            kills: k,
            deaths: d,
            assists: a,
        }
    }

    fn match_with(participants: Vec<ParticipantDto>) -> MatchDto {
        MatchDto {
            metadata: MatchMetadata {
                match_id: "NA1_0000000000".to_string(),
                participants: participants.iter().map(|p| p.puuid.clone()).collect(),
            },
            info: MatchInfo {
                game_duration: 1800,
                participants,
            },
        }
    }

    fn my_match(champion: &str, win: bool, k: u32, d: u32, a: u32) -> MatchDto {
        match_with(vec![
            participant("puuid-enemy", "Ahri", !win, 2, 2, 2),
            participant(ME, champion, win, k, d, a),
        ])
    }

    #[test]
    fn two_jax_games_match_the_worked_example() {
        let matches = vec![
            my_match("Jax", true, 4, 1, 3),
            my_match("Jax", false, 2, 3, 1),
        ];

        let summary = summarize(ME, &matches);

        assert_eq!(summary.total_matches, 2);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.overall_winrate, 50.0);
        assert_eq!(summary.overall_kda, 2.5); // (4+2+3+1) / max(1,4)

        assert_eq!(summary.champions.len(), 1);
        let jax = &summary.champions[0];
        assert_eq!(jax.champion, "Jax");
        assert_eq!(jax.games, 2);
        assert_eq!(jax.wins, 1);
        assert_eq!(jax.losses, 1);
        assert_eq!(jax.winrate, 50.0);
        assert_eq!(jax.kda, 2.5);
    }

    #[test]
    fn empty_history_yields_zeroes() {
        let summary = summarize(ME, &[]);

        assert_eq!(summary.total_matches, 0);
        assert_eq!(summary.overall_winrate, 0.0);
        assert_eq!(summary.overall_kda, 0.0);
        assert!(summary.champions.is_empty());
    }

    #[test]
    fn zero_deaths_scores_kills_plus_assists() {
        let summary = summarize(ME, &[my_match("Yasuo", true, 7, 0, 5)]);

        assert_eq!(summary.overall_kda, 12.0);
        assert_eq!(summary.champions[0].kda, 12.0);
    }

    #[test]
    fn match_without_the_player_only_counts_toward_total() {
        let foreign = match_with(vec![
            participant("puuid-a", "Lux", true, 3, 1, 8),
            participant("puuid-b", "Zed", false, 5, 5, 2),
        ]);
        let matches = vec![my_match("Jax", true, 4, 1, 3), foreign];

        let summary = summarize(ME, &matches);

        assert_eq!(summary.total_matches, 2);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.champions.len(), 1);
        assert_eq!(summary.champions[0].games, 1);
        // the denominator still includes the skipped match
        assert_eq!(summary.overall_winrate, 50.0);
    }

    #[test]
    fn champions_sort_by_games_descending() {
        let matches = vec![
            my_match("Jax", true, 1, 1, 1),
            my_match("Ornn", false, 2, 2, 2),
            my_match("Ornn", true, 3, 3, 3),
            my_match("Ornn", false, 4, 4, 4),
            my_match("Jax", false, 5, 5, 5),
        ];

        let summary = summarize(ME, &matches);

        let games: Vec<usize> = summary.champions.iter().map(|c| c.games).collect();
        assert_eq!(games, vec![3, 2]);
        for pair in summary.champions.windows(2) {
            assert!(pair[0].games >= pair[1].games);
        }
    }

    #[test]
    fn equal_game_counts_keep_first_encounter_order() {
        let matches = vec![
            my_match("Gragas", true, 1, 1, 1),
            my_match("Annie", false, 1, 1, 1),
            my_match("Zed", true, 1, 1, 1),
        ];

        let summary = summarize(ME, &matches);

        let names: Vec<&str> = summary.champions.iter().map(|c| c.champion.as_str()).collect();
        assert_eq!(names, vec!["Gragas", "Annie", "Zed"]);
    }

    #[test]
    fn per_champion_games_sum_to_total_when_always_present() {
        let matches = vec![
            my_match("Jax", true, 4, 1, 3),
            my_match("Ornn", false, 0, 2, 9),
            my_match("Jax", false, 2, 3, 1),
            my_match("Lux", true, 6, 0, 12),
        ];

        let summary = summarize(ME, &matches);

        let games_sum: usize = summary.champions.iter().map(|c| c.games).sum();
        assert_eq!(games_sum, summary.total_matches);
        for c in &summary.champions {
            assert!(c.wins <= c.games);
            assert!((0.0..=100.0).contains(&c.winrate));
        }
        assert!(summary.wins <= summary.total_matches);
        assert!((0.0..=100.0).contains(&summary.overall_winrate));
    }

    #[test]
    fn first_matching_participant_wins_on_duplicate_puuid() {
        // only the first entry counts if a PUUID somehow appears twice
        let m = match_with(vec![
            participant(ME, "Jax", true, 4, 1, 3),
            participant(ME, "Ornn", false, 9, 9, 9),
        ]);

        let summary = summarize(ME, &[m]);

        assert_eq!(summary.champions.len(), 1);
        assert_eq!(summary.champions[0].champion, "Jax");
        assert_eq!(summary.wins, 1);
    }
}
