//! Dates of a player's games in one season

use tracing::debug;

use super::common::{build_client, resolve_player};
use crate::{
    cli::types::{GameDate, Season, SeasonType},
    nba::StatsProvider,
    Result,
};

/// Dates of the player's games, in game-log order. Rows whose date the
/// provider left blank or unparseable are skipped.
pub async fn list_game_dates<P>(
    provider: &P,
    player_name: &str,
    season: &Season,
    season_type: SeasonType,
) -> Result<Vec<GameDate>>
where
    P: StatsProvider + ?Sized,
{
    let player = resolve_player(provider, player_name).await?;
    let log = provider.game_log(player.id, season, season_type).await?;
    let total = log.len();

    let dates: Vec<GameDate> = log.into_iter().filter_map(|g| g.game_date).collect();
    if dates.len() != total {
        debug!(skipped = total - dates.len(), "game log rows without a usable date");
    }
    Ok(dates)
}

/// Handle the `get game-dates` command
pub async fn handle_game_dates(
    player_name: String,
    season: Season,
    season_type: SeasonType,
    as_json: bool,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let client = build_client(timeout_secs)?;
    let dates = list_game_dates(&client, &player_name, &season, season_type).await?;

    if as_json {
        let body = serde_json::json!({ "dates": dates });
        println!("{}", body);
    } else {
        for d in &dates {
            println!("{}", d);
        }
    }

    Ok(())
}
