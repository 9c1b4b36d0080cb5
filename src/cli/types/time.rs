//! Season and game-date types for NBA stats queries.

use crate::error::{Result, XptError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Season key as the provider spells it, e.g. `2023-24`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub String);

impl Season {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Season in progress on `today`. A new season starts in October.
    pub fn current(today: NaiveDate) -> Self {
        let start = if today.month() >= 10 {
            today.year()
        } else {
            today.year() - 1
        };
        Self(format!("{}-{:02}", start, (start + 1).rem_euclid(100)))
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current(chrono::Local::now().date_naive())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = XptError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(XptError::InvalidSeason {
                value: s.to_string(),
            });
        }
        Ok(Self(key.to_string()))
    }
}

/// A single calendar date identifying one game.
///
/// ISO `YYYY-MM-DD` is the wire format. The provider's game log spells
/// dates like `APR 14, 2024`, which also parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameDate(pub NaiveDate);

const ISO_FORMAT: &str = "%Y-%m-%d";
const GAME_LOG_FORMAT: &str = "%b %d, %Y";
const DATE_FILTER_FORMAT: &str = "%m/%d/%Y";

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Format for the provider's `DateFrom` / `DateTo` query parameters.
    pub fn to_date_filter(&self) -> String {
        self.0.format(DATE_FILTER_FORMAT).to_string()
    }

    /// Parse a date as it appears in the provider's game log.
    pub fn from_game_log(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, GAME_LOG_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, ISO_FORMAT))
            .or_else(|_| {
                // Some endpoints return full timestamps, e.g. 2024-04-14T00:00:00
                NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), ISO_FORMAT)
            })
            .ok()
            .map(Self)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = XptError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map(Self)
            .map_err(|_| XptError::InvalidGameDate {
                value: s.to_string(),
            })
    }
}

impl Serialize for GameDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
