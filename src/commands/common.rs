//! Lookups shared by the players, game-dates and xPT commands.

use tracing::debug;

use crate::{
    cli::types::{PlayerId, Season, TeamId},
    config::ProviderSettings,
    error::{Result, XptError},
    nba::{types::ActivePlayer, NbaStatsClient, StatsProvider},
};

/// Build the provider client from flags and environment.
pub fn build_client(timeout_secs: Option<u64>) -> Result<NbaStatsClient> {
    ProviderSettings::resolve(timeout_secs)?.build_client()
}

/// Case-insensitive exact match of `name` against the active-player list.
pub async fn resolve_player<P>(provider: &P, name: &str) -> Result<ActivePlayer>
where
    P: StatsProvider + ?Sized,
{
    let wanted = name.trim().to_lowercase();
    let player = provider
        .active_players()
        .await?
        .into_iter()
        .find(|p| p.full_name.to_lowercase() == wanted)
        .ok_or_else(|| XptError::PlayerNotFound {
            name: name.to_string(),
        })?;

    debug!(player = %player.full_name, id = %player.id, "resolved player");
    Ok(player)
}

/// Team the player was on for `season`, from the career totals table.
///
/// Multi-team aggregate rows carry team `0` and are skipped.
pub async fn resolve_team<P>(provider: &P, player_id: PlayerId, season: &Season) -> Result<TeamId>
where
    P: StatsProvider + ?Sized,
{
    let team_id = provider
        .career_seasons(player_id)
        .await?
        .into_iter()
        .find(|row| row.season_id == season.as_str() && row.team_id.is_real_team())
        .map(|row| row.team_id)
        .ok_or_else(|| XptError::TeamNotFound {
            season: season.to_string(),
        })?;

    debug!(%player_id, %season, %team_id, "resolved team");
    Ok(team_id)
}
