//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use types::{GameDate, Season, SeasonType};

/// Player/season selection shared by `game-dates` and `xpt`.
#[derive(Debug, Args)]
pub struct PlayerSeason {
    /// Player full name, case-insensitive (e.g. "LeBron James").
    #[clap(long, short = 'p')]
    pub player_name: String,

    /// Season key (e.g. 2023-24).
    #[clap(long, short)]
    pub season: Season,

    /// Season type: "Regular Season", "Playoffs", "Pre Season", "All Star", "PlayIn".
    #[clap(long = "season-type", short = 't', default_value_t = SeasonType::default())]
    pub season_type: SeasonType,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List the full names of all active players.
    Players {
        /// Output `{"players": [...]}` instead of one name per line.
        #[clap(long)]
        json: bool,
    },

    /// List the dates (YYYY-MM-DD) of a player's games in a season.
    GameDates {
        #[clap(flatten)]
        selection: PlayerSeason,

        /// Output `{"dates": [...]}` instead of one date per line.
        #[clap(long)]
        json: bool,
    },

    /// Compute a player's expected points (xPT) for a season or a single game.
    Xpt {
        #[clap(flatten)]
        selection: PlayerSeason,

        /// Restrict to the game played on this date (YYYY-MM-DD).
        #[clap(long, short = 'd')]
        game_date: Option<GameDate>,

        /// Output the same JSON body the HTTP API returns.
        #[clap(long)]
        json: bool,

        /// Print the per-bucket contributions before the score.
        #[clap(long)]
        breakdown: bool,

        /// Write the full breakdown as JSON; without a value, under the user cache dir.
        #[clap(long, num_args = 0..=1, value_name = "DIR")]
        dump_dir: Option<Option<PathBuf>>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-xpt", about = "NBA expected points (xPT) calculator")]
pub struct XptCli {
    /// Provider request timeout in seconds (or set `NBA_XPT_TIMEOUT_SECS`).
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query the stats provider from the command line
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Serve the xPT HTTP API
    Serve {
        /// Listen address (or set `NBA_XPT_BIND`, default 127.0.0.1:5000).
        #[clap(long)]
        bind: Option<SocketAddr>,

        /// Allowed browser origin (or set `NBA_XPT_CORS_ORIGIN`).
        #[clap(long)]
        cors_origin: Option<String>,
    },
}
