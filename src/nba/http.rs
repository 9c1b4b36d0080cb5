use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use std::time::Duration;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Season, SeasonType},
    error::ProviderError,
    nba::{
        provider::{ShotSplitQuery, StatsProvider},
        types::{
            ActivePlayer, CareerSeasonRow, GameLogRow, ShotSplitRow, StatsEnvelope,
            CLOSEST_DEFENDER_SHOOTING, COMMON_ALL_PLAYERS, PLAYER_GAME_LOG,
            SEASON_TOTALS_REGULAR_SEASON,
        },
    },
};


/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const NBA_LEAGUE_ID: &str = "00";

/// Headers stats.nba.com expects; requests without them tend to hang.
pub fn get_common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
        ),
    );
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h
}

/// Client for the stats endpoints the calculator reads.
///
/// Wraps a pooled [`reqwest::Client`]; clone it freely, clones share the pool.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
}

impl NbaStatsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .default_headers(get_common_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one endpoint and decode the result-set envelope.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<StatsEnvelope, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "stats request");

        let body = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_active_players(&self, season: &Season) -> Result<Vec<ActivePlayer>, ProviderError> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", season.to_string()),
            ("IsOnlyCurrentSeason", "1".to_string()),
        ];
        let envelope = self.fetch("commonallplayers", &params).await?;
        ActivePlayer::from_result_set(envelope.result_set(COMMON_ALL_PLAYERS)?)
    }

    pub async fn get_career_seasons(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<CareerSeasonRow>, ProviderError> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        let envelope = self.fetch("playercareerstats", &params).await?;
        CareerSeasonRow::from_result_set(envelope.result_set(SEASON_TOTALS_REGULAR_SEASON)?)
    }

    pub async fn get_game_log(
        &self,
        player_id: PlayerId,
        season: &Season,
        season_type: SeasonType,
    ) -> Result<Vec<GameLogRow>, ProviderError> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", season_type.as_param().to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("DateFrom", String::new()),
            ("DateTo", String::new()),
        ];
        let envelope = self.fetch("playergamelog", &params).await?;
        GameLogRow::from_result_set(envelope.result_set(PLAYER_GAME_LOG)?)
    }

    pub async fn get_closest_defender_shooting(
        &self,
        query: &ShotSplitQuery,
    ) -> Result<Vec<ShotSplitRow>, ProviderError> {
        let date = query
            .game_date
            .map(|d| d.to_date_filter())
            .unwrap_or_default();
        // The endpoint rejects requests that omit any of its filters.
        let params = [
            ("PlayerID", query.player_id.to_string()),
            ("TeamID", query.team_id.to_string()),
            ("Season", query.season.to_string()),
            ("SeasonType", query.season_type.as_param().to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("DateFrom", date.clone()),
            ("DateTo", date),
            ("LastNGames", "0".to_string()),
            ("Month", "0".to_string()),
            ("OpponentTeamID", "0".to_string()),
            ("Period", "0".to_string()),
            ("GameSegment", String::new()),
            ("Location", String::new()),
            ("Outcome", String::new()),
            ("SeasonSegment", String::new()),
            ("VsConference", String::new()),
            ("VsDivision", String::new()),
        ];
        let envelope = self.fetch("playerdashptshots", &params).await?;
        ShotSplitRow::from_result_set(envelope.result_set(CLOSEST_DEFENDER_SHOOTING)?)
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn active_players(&self) -> Result<Vec<ActivePlayer>, ProviderError> {
        self.get_active_players(&Season::default()).await
    }

    async fn career_seasons(
        &self,
        player_id: PlayerId,
    ) -> Result<Vec<CareerSeasonRow>, ProviderError> {
        self.get_career_seasons(player_id).await
    }

    async fn game_log(
        &self,
        player_id: PlayerId,
        season: &Season,
        season_type: SeasonType,
    ) -> Result<Vec<GameLogRow>, ProviderError> {
        self.get_game_log(player_id, season, season_type).await
    }

    async fn closest_defender_shooting(
        &self,
        query: &ShotSplitQuery,
    ) -> Result<Vec<ShotSplitRow>, ProviderError> {
        self.get_closest_defender_shooting(query).await
    }
}
