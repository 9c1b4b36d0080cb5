//! NBA stats provider: client, typed tables and the xPT reduction.

pub mod compute;
pub mod http;
pub mod provider;
pub mod types;

pub use http::NbaStatsClient;
pub use provider::{ShotSplitQuery, StatsProvider};
