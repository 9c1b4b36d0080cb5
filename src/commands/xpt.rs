//! The xPT calculator and the `get xpt` command.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::common::{build_client, resolve_player, resolve_team};
use crate::{
    cli::types::{GameDate, Season, SeasonType, TeamId},
    core::dump::{default_dump_dir, write_breakdown_dump},
    error::{Result, XptError},
    nba::{
        compute::{blend_with_baseline, compute_breakdown, FreeThrowRecord, XptBreakdown},
        types::{ActivePlayer, ShotSplitRow},
        ShotSplitQuery, StatsProvider,
    },
};

/// Inputs to one xPT computation.
#[derive(Debug, Clone, PartialEq)]
pub struct XptQuery {
    pub player_name: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub game_date: Option<GameDate>,
}

/// A successful computation together with the identities it resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XptCalculation {
    pub player: ActivePlayer,
    pub team_id: TeamId,
    pub season: Season,
    pub season_type: SeasonType,
    pub game_date: Option<GameDate>,
    pub breakdown: XptBreakdown,
}

/// Response body of `/get_xpt` and of `get xpt --json`.
///
/// Exactly one of `xpt` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XptResult {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "GameDate", skip_serializing_if = "Option::is_none")]
    pub game_date: Option<String>,
    #[serde(rename = "xPT")]
    pub xpt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl XptResult {
    /// Echo the request fields and attach either the score or the error text.
    pub fn new(
        player: &str,
        season: &str,
        game_date: Option<&str>,
        outcome: &Result<XptCalculation>,
    ) -> Self {
        let (xpt, error) = match outcome {
            Ok(calc) => (Some(calc.breakdown.xpt), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            player: player.to_string(),
            season: season.to_string(),
            game_date: game_date.map(str::to_string),
            xpt,
            error,
        }
    }
}

async fn fetch_splits<P>(provider: &P, query: &ShotSplitQuery) -> Result<Vec<ShotSplitRow>>
where
    P: StatsProvider + ?Sized,
{
    let rows = provider.closest_defender_shooting(query).await?;
    if rows.is_empty() {
        debug!(?query, "empty closest-defender table");
        return Err(XptError::NoShootingData);
    }
    Ok(rows)
}

/// Compute a player's expected points for a season, or for one game when
/// `query.game_date` is set.
///
/// Attempts come from the requested season type (or the single game) and
/// percentages from the regular-season baseline of the same season.
pub async fn calculate_xpt<P>(provider: &P, query: &XptQuery) -> Result<XptCalculation>
where
    P: StatsProvider + ?Sized,
{
    let player = resolve_player(provider, &query.player_name).await?;
    let team_id = resolve_team(provider, player.id, &query.season).await?;

    let baseline_query = ShotSplitQuery {
        player_id: player.id,
        team_id,
        season: query.season.clone(),
        season_type: SeasonType::RegularSeason,
        game_date: None,
    };
    let baseline = fetch_splits(provider, &baseline_query).await?;

    let requested = if query.season_type == SeasonType::RegularSeason {
        None
    } else {
        let requested_query = ShotSplitQuery {
            season_type: query.season_type,
            ..baseline_query.clone()
        };
        Some(fetch_splits(provider, &requested_query).await?)
    };

    let game_log = provider
        .game_log(player.id, &query.season, query.season_type)
        .await?;

    let breakdown = match query.game_date {
        Some(date) => {
            let game = game_log
                .iter()
                .find(|g| g.game_date == Some(date))
                .ok_or_else(|| XptError::GameNotFound {
                    date: date.to_string(),
                })?;
            let per_game_query = ShotSplitQuery {
                season_type: query.season_type,
                game_date: Some(date),
                ..baseline_query.clone()
            };
            let per_game = fetch_splits(provider, &per_game_query).await?;

            compute_breakdown(
                blend_with_baseline(&per_game, &baseline),
                FreeThrowRecord::single_game(game),
            )?
        }
        None => {
            let attempts = requested.as_deref().unwrap_or(&baseline);
            compute_breakdown(
                blend_with_baseline(attempts, &baseline),
                FreeThrowRecord::season(&game_log),
            )?
        }
    };

    info!(
        player = %player.full_name,
        season = %query.season,
        season_type = %query.season_type,
        game_date = ?query.game_date.map(|d| d.to_string()),
        xpt = breakdown.xpt,
        "computed xPT"
    );

    Ok(XptCalculation {
        player,
        team_id,
        season: query.season.clone(),
        season_type: query.season_type,
        game_date: query.game_date,
        breakdown,
    })
}

/// Parameters for the `get xpt` command
#[derive(Debug)]
pub struct XptParams {
    pub player_name: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub game_date: Option<GameDate>,
    pub as_json: bool,
    pub show_breakdown: bool,
    /// `Some(None)` dumps to the default directory.
    pub dump_dir: Option<Option<PathBuf>>,
    pub timeout_secs: Option<u64>,
}

/// Handle the `get xpt` command
pub async fn handle_xpt(params: XptParams) -> Result<()> {
    let client = build_client(params.timeout_secs)?;
    let query = XptQuery {
        player_name: params.player_name.clone(),
        season: params.season.clone(),
        season_type: params.season_type,
        game_date: params.game_date,
    };

    let outcome = calculate_xpt(&client, &query).await;

    if let (Ok(calc), Some(dir)) = (&outcome, &params.dump_dir) {
        let dir = dir.clone().unwrap_or_else(default_dump_dir);
        match write_breakdown_dump(&dir, calc) {
            Ok(path) => eprintln!("Breakdown written to {}", path.display()),
            Err(e) => warn!(error = %e, dir = %dir.display(), "could not write breakdown dump"),
        }
    }

    let date = params.game_date.map(|d| d.to_string());
    if params.as_json {
        let body = XptResult::new(
            &params.player_name,
            params.season.as_str(),
            date.as_deref(),
            &outcome,
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&body).map_err(std::io::Error::from)?
        );
    }

    let calc = outcome?;
    if params.as_json {
        return Ok(());
    }

    if params.show_breakdown {
        print_breakdown(&calc.breakdown);
    }
    match &date {
        Some(d) => println!(
            "{} ({} {}, {}): EXPECTED POINTS {}",
            calc.player.full_name, calc.season, calc.season_type, d, calc.breakdown.xpt
        ),
        None => println!(
            "{} ({} {}): EXPECTED POINTS {}",
            calc.player.full_name, calc.season, calc.season_type, calc.breakdown.xpt
        ),
    }

    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.3}")).unwrap_or_else(|| "-".to_string())
}

fn print_breakdown(breakdown: &XptBreakdown) {
    println!(
        "{:<24} {:>7} {:>7} {:>7} {:>7} {:>8}",
        "CLOSEST DEFENDER", "FG2A", "FG2%", "FG3A", "FG3%", "xPT"
    );
    for b in &breakdown.buckets {
        println!(
            "{:<24} {:>7} {:>7} {:>7} {:>7} {:>8.2}",
            b.bucket,
            fmt_opt(b.fg2a),
            fmt_opt(b.fg2_pct),
            fmt_opt(b.fg3a),
            fmt_opt(b.fg3_pct),
            b.points()
        );
    }
    println!(
        "{:<24} {:>7} {:>7} {:>23.2}",
        "FREE THROWS",
        fmt_opt(breakdown.free_throws.attempts),
        fmt_opt(breakdown.free_throws.pct),
        breakdown.free_throw_points
    );
    println!("{:<24} {:>39.2}", "TOTAL (unfloored)", breakdown.total);
}
