use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

// Riot caps a single match-id page at 100 entries.
pub const MAX_MATCH_COUNT: usize = 100;

pub struct RiotApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        // 20 requests per second, the dev-key application limit
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(20).unwrap()));
        RiotApiClient {
            config,
            rate_limiter,
        }
    }

    fn get_regional_routing(&self) -> &str {
        match self.config.region.as_str() {
            "na1" | "br1" | "la1" | "la2" => "americas",
            "euw1" | "eun1" | "tr1" | "ru" => "europe",
            "kr" | "jp1" => "asia",
            "oc1" | "ph2" | "sg2" | "th2" | "vn2" => "sea",
            _ => "americas", // default
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        // Block until the limiter has a slot free
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }

        let response = ureq::get(url)
            .set("X-Riot-Token", &self.config.api_key)
            .set("User-Agent", "league_recap/0.1.0")
            .call();

        match response {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string())),
            Err(ureq::Error::Status(status, resp)) => {
                // Keep the raw body: Riot's error payloads carry the reason
                let body = resp.into_string().unwrap_or_default();
                Err(AppError::Upstream { status, body })
            }
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = endpoints::account_by_riot_id(self.get_regional_routing(), game_name, tag_line);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_match_ids(&self, puuid: &str, count: usize) -> Result<Vec<String>, AppError> {
        let count = count.min(MAX_MATCH_COUNT);
        let url = endpoints::match_ids_by_puuid(self.get_regional_routing(), puuid, count);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_by_id(self.get_regional_routing(), match_id);

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
