//! Request and response bodies of the HTTP facade.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::types::GameDate;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDatesRequest {
    #[serde(default)]
    pub player_name: Option<Value>,
    #[serde(default)]
    pub season: Option<Value>,
    #[serde(default)]
    pub season_type: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XptRequest {
    #[serde(default)]
    pub player_name: Option<Value>,
    #[serde(default)]
    pub season: Option<Value>,
    #[serde(default)]
    pub season_type: Option<Value>,
    #[serde(default)]
    pub game_date: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDatesResponse {
    pub dates: Vec<GameDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Text of a request field, or `None` when it is absent, null or a blank
/// string. Non-string values are kept in their JSON form so that parsing
/// reports them instead of the field being treated as missing.
pub fn present(field: &Option<Value>) -> Option<String> {
    match field.as_ref()? {
        Value::Null => None,
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        other => Some(other.to_string()),
    }
}
