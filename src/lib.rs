//! NBA Expected Points (xPT) Library
//!
//! Computes a player's expected points from closest-defender shooting splits
//! published by the NBA statistics service, for a whole season or a single
//! game, and serves the result over a small JSON HTTP API.
//!
//! ## Model
//!
//! For every closest-defender distance bucket, attempts from the requested
//! scope are weighted by the Regular Season make percentages of the same
//! bucket (2 points per two-point make, 3 per three-point make). Free throws
//! add attempts times make percentage. The sum is floored once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_xpt::{commands::xpt::{calculate_xpt, XptQuery}, nba::NbaStatsClient, Season, SeasonType};
//!
//! # async fn example() -> nba_xpt::Result<()> {
//! let client = NbaStatsClient::new(nba_xpt::nba::http::STATS_BASE_URL, std::time::Duration::from_secs(30))?;
//! let query = XptQuery {
//!     player_name: "LeBron James".to_string(),
//!     season: Season::new("2023-24"),
//!     season_type: SeasonType::RegularSeason,
//!     game_date: None,
//! };
//! let calc = calculate_xpt(&client, &query).await?;
//! println!("xPT: {}", calc.breakdown.xpt);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_XPT_BIND=0.0.0.0:5000
//! export NBA_XPT_CORS_ORIGIN=http://localhost:3000
//! export NBA_XPT_TIMEOUT_SECS=30
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod nba;
pub mod server;

// Re-export commonly used types
pub use cli::types::{GameDate, PlayerId, Season, SeasonType, TeamId};
pub use error::{ProviderError, Result, XptError};
