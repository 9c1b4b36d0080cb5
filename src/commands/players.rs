//! Active-player listing

use super::common::build_client;
use crate::{nba::StatsProvider, Result};

/// Full names of every active player, in provider order.
pub async fn list_players<P>(provider: &P) -> Result<Vec<String>>
where
    P: StatsProvider + ?Sized,
{
    Ok(provider
        .active_players()
        .await?
        .into_iter()
        .map(|p| p.full_name)
        .collect())
}

/// Handle the `get players` command
pub async fn handle_players(as_json: bool, timeout_secs: Option<u64>) -> Result<()> {
    let client = build_client(timeout_secs)?;
    let players = list_players(&client).await?;

    if as_json {
        let body = serde_json::json!({ "players": players });
        println!("{}", body);
    } else {
        for name in &players {
            println!("{}", name);
        }
        eprintln!("{} active players", players.len());
    }

    Ok(())
}
