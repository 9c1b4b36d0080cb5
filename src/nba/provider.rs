//! The seam between the xPT calculator and the statistics provider.

use async_trait::async_trait;

use crate::{
    cli::types::{GameDate, PlayerId, Season, SeasonType, TeamId},
    error::ProviderError,
    nba::types::{ActivePlayer, CareerSeasonRow, GameLogRow, ShotSplitRow},
};

/// Parameters for a closest-defender shooting split request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotSplitQuery {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub season: Season,
    pub season_type: SeasonType,
    /// Restrict to one game day (`DateFrom == DateTo`).
    pub game_date: Option<GameDate>,
}

/// Tabular data the calculator needs from the provider.
///
/// Implementations hold their own connection pool; nothing is cached
/// between calls.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Players currently on an NBA roster.
    async fn active_players(&self) -> Result<Vec<ActivePlayer>, ProviderError>;

    /// Regular-season career totals, one row per season and team.
    async fn career_seasons(&self, player_id: PlayerId)
        -> Result<Vec<CareerSeasonRow>, ProviderError>;

    /// Game log for one season and season type, in provider order.
    async fn game_log(
        &self,
        player_id: PlayerId,
        season: &Season,
        season_type: SeasonType,
    ) -> Result<Vec<GameLogRow>, ProviderError>;

    async fn closest_defender_shooting(
        &self,
        query: &ShotSplitQuery,
    ) -> Result<Vec<ShotSplitRow>, ProviderError>;
}
