//! Type-safe wrappers and enums for NBA stats queries.

pub mod ids;
pub mod season_type;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use season_type::SeasonType;
pub use time::{GameDate, Season};
