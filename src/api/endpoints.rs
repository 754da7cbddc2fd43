// URL builders for the Riot endpoints this tool touches.
// Account V1 lives on the regional routing hosts; Match V5 as well.

pub fn account_by_riot_id(routing: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
        routing, game_name, tag_line
    )
}

pub fn match_ids_by_puuid(routing: &str, puuid: &str, count: usize) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
        routing, puuid, count
    )
}

pub fn match_by_id(routing: &str, match_id: &str) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        routing, match_id
    )
}
