//! Competition phase used to select which provider table to query.

use crate::error::XptError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Season type as understood by the provider's `SeasonType` parameter.
///
/// # Examples
///
/// ```rust
/// use nba_xpt::SeasonType;
///
/// let st: SeasonType = "playoffs".parse().unwrap();
/// assert_eq!(st, SeasonType::Playoffs);
/// assert_eq!(st.to_string(), "Playoffs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonType {
    #[default]
    RegularSeason,
    Playoffs,
    PreSeason,
    AllStar,
    PlayIn,
}

impl SeasonType {
    /// The provider's spelling of this season type.
    pub fn as_param(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::AllStar => "All Star",
            SeasonType::PlayIn => "PlayIn",
        }
    }

    /// Short slug for file names.
    pub fn slug(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "regular",
            SeasonType::Playoffs => "playoffs",
            SeasonType::PreSeason => "preseason",
            SeasonType::AllStar => "allstar",
            SeasonType::PlayIn => "playin",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SeasonType {
    type Err = XptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "regularseason" | "regular" => Ok(SeasonType::RegularSeason),
            "playoffs" | "playoff" => Ok(SeasonType::Playoffs),
            "preseason" => Ok(SeasonType::PreSeason),
            "allstar" => Ok(SeasonType::AllStar),
            "playin" => Ok(SeasonType::PlayIn),
            _ => Err(XptError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for SeasonType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_param())
    }
}

impl<'de> Deserialize<'de> for SeasonType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
