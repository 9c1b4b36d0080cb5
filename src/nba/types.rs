use crate::cli::types::{GameDate, PlayerId, TeamId};
use crate::error::ProviderError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;


pub const COMMON_ALL_PLAYERS: &str = "CommonAllPlayers";
pub const SEASON_TOTALS_REGULAR_SEASON: &str = "SeasonTotalsRegularSeason";
pub const PLAYER_GAME_LOG: &str = "PlayerGameLog";
pub const CLOSEST_DEFENDER_SHOOTING: &str = "ClosestDefenderShooting";

/// One table of a stats response: column headers plus positional rows.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of a column, matched case-insensitively (the game log mixes
    /// `Game_ID` with `GAME_DATE`).
    pub fn column(&self, column: &str) -> Result<usize, ProviderError> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| ProviderError::MissingColumn {
                result_set: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }
}

/// Top-level envelope. Most endpoints answer with a `resultSets` array, a
/// few with a single `resultSet` object.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets", alias = "resultSet", deserialize_with = "de_one_or_many")]
    pub result_sets: Vec<ResultSet>,
}

fn de_one_or_many<'de, D>(deserializer: D) -> Result<Vec<ResultSet>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<ResultSet>),
        One(ResultSet),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(sets) => sets,
        OneOrMany::One(set) => vec![set],
    })
}

impl StatsEnvelope {
    pub fn result_set(&self, name: &str) -> Result<&ResultSet, ProviderError> {
        self.result_sets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ProviderError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// Numeric cell. Nulls, non-finite values and unparseable strings are undefined.
pub fn cell_f64(row: &[Value], idx: usize) -> Option<f64> {
    let v = match row.get(idx)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

pub fn cell_u64(row: &[Value], idx: usize) -> Option<u64> {
    match row.get(idx)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn cell_string(row: &[Value], idx: usize) -> Option<String> {
    match row.get(idx)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// An entry of the provider's active-player directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePlayer {
    pub id: PlayerId,
    pub full_name: String,
}

impl ActivePlayer {
    /// Rows of `CommonAllPlayers` with `ROSTERSTATUS == 1`.
    pub fn from_result_set(set: &ResultSet) -> Result<Vec<Self>, ProviderError> {
        let id = set.column("PERSON_ID")?;
        let name = set.column("DISPLAY_FIRST_LAST")?;
        let status = set.column("ROSTERSTATUS")?;

        Ok(set
            .row_set
            .iter()
            .filter(|row| cell_u64(row, status) == Some(1))
            .filter_map(|row| {
                Some(ActivePlayer {
                    id: PlayerId::new(cell_u64(row, id)?),
                    full_name: cell_string(row, name)?,
                })
            })
            .collect())
    }
}

/// One row of the career totals table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSeasonRow {
    pub season_id: String,
    pub team_id: TeamId,
    pub team_abbreviation: Option<String>,
}

impl CareerSeasonRow {
    pub fn from_result_set(set: &ResultSet) -> Result<Vec<Self>, ProviderError> {
        let season = set.column("SEASON_ID")?;
        let team = set.column("TEAM_ID")?;
        let abbreviation = set.column("TEAM_ABBREVIATION").ok();

        Ok(set
            .row_set
            .iter()
            .filter_map(|row| {
                Some(CareerSeasonRow {
                    season_id: cell_string(row, season)?,
                    team_id: TeamId::new(cell_u64(row, team).unwrap_or(0)),
                    team_abbreviation: abbreviation.and_then(|i| cell_string(row, i)),
                })
            })
            .collect())
    }
}

/// One game of a player's game log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRow {
    pub game_id: String,
    pub game_date: Option<GameDate>,
    pub matchup: Option<String>,
    pub fta: Option<f64>,
    pub ft_pct: Option<f64>,
}

impl GameLogRow {
    pub fn from_result_set(set: &ResultSet) -> Result<Vec<Self>, ProviderError> {
        let game_id = set.column("Game_ID")?;
        let game_date = set.column("GAME_DATE")?;
        let matchup = set.column("MATCHUP").ok();
        let fta = set.column("FTA")?;
        let ft_pct = set.column("FT_PCT")?;

        Ok(set
            .row_set
            .iter()
            .map(|row| GameLogRow {
                game_id: cell_string(row, game_id).unwrap_or_default(),
                game_date: cell_string(row, game_date)
                    .as_deref()
                    .and_then(GameDate::from_game_log),
                matchup: matchup.and_then(|i| cell_string(row, i)),
                fta: cell_f64(row, fta),
                ft_pct: cell_f64(row, ft_pct),
            })
            .collect())
    }
}

/// Shooting split for one closest-defender distance bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotSplitRow {
    /// `CLOSE_DEF_DIST_RANGE`, e.g. `0-2 Feet - Very Tight`.
    pub bucket: String,
    pub fg2a: Option<f64>,
    pub fg2_pct: Option<f64>,
    pub fg3a: Option<f64>,
    pub fg3_pct: Option<f64>,
}

impl ShotSplitRow {
    pub fn from_result_set(set: &ResultSet) -> Result<Vec<Self>, ProviderError> {
        let bucket = set.column("CLOSE_DEF_DIST_RANGE")?;
        let fg2a = set.column("FG2A")?;
        let fg2_pct = set.column("FG2_PCT")?;
        let fg3a = set.column("FG3A")?;
        let fg3_pct = set.column("FG3_PCT")?;

        Ok(set
            .row_set
            .iter()
            .map(|row| ShotSplitRow {
                bucket: cell_string(row, bucket).unwrap_or_default(),
                fg2a: cell_f64(row, fg2a),
                fg2_pct: cell_f64(row, fg2_pct),
                fg3a: cell_f64(row, fg3a),
                fg3_pct: cell_f64(row, fg3_pct),
            })
            .collect())
    }
}
