//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_xpt::{
    cli::{Commands, GetCmd, PlayerSeason, XptCli},
    commands::{
        game_dates::handle_game_dates,
        players::handle_players,
        serve::handle_serve,
        xpt::{handle_xpt, XptParams},
    },
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_DIRECTIVE: &str = "nba_xpt=info";

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
/// `RUST_LOG` overrides the default level.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_DIRECTIVE))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = XptCli::parse();
    init_logging()?;

    let timeout = app.timeout;
    match app.command {
        Commands::Serve { bind, cors_origin } => handle_serve(bind, cors_origin, timeout)
            .await
            .context("xPT server stopped with an error")?,

        Commands::Get { cmd } => match cmd {
            GetCmd::Players { json } => handle_players(json, timeout).await?,

            GetCmd::GameDates {
                selection:
                    PlayerSeason {
                        player_name,
                        season,
                        season_type,
                    },
                json,
            } => handle_game_dates(player_name, season, season_type, json, timeout).await?,

            GetCmd::Xpt {
                selection,
                game_date,
                json,
                breakdown,
                dump_dir,
            } => {
                handle_xpt(XptParams {
                    player_name: selection.player_name,
                    season: selection.season,
                    season_type: selection.season_type,
                    game_date,
                    as_json: json,
                    show_breakdown: breakdown,
                    dump_dir,
                    timeout_secs: timeout,
                })
                .await?
            }
        },
    }

    Ok(())
}
