//! Command implementations for the nba-xpt CLI and HTTP facade

pub mod common;
pub mod game_dates;
pub mod players;
pub mod serve;
pub mod xpt;
