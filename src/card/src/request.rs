use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// A match card payload after validation. Field names on the wire are
/// camelCase; player entries keep their snake_case wire names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCardRequest {
    pub division_name: String,
    #[serde(default, deserialize_with = "present_string")]
    pub formatted_date: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub match_number: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub field_name: Option<String>,
    pub current_team_name: String,
    #[serde(default, deserialize_with = "present_string")]
    pub home_team_name: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub away_team_name: Option<String>,
    pub team_players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub first_name: String,
    pub last_name: String,
    pub reserve: bool,
}

impl MatchCardRequest {
    /// Validates an arbitrary JSON value against the match card shape.
    /// Unknown fields are ignored; required fields must be present with the
    /// right type, and optional fields must be strings when present.
    pub fn from_value(value: Value) -> Result<MatchCardRequest, ValidationError> {
        serde_json::from_value(value).map_err(ValidationError)
    }
}

// An optional key must hold a string when it appears at all, so `null` is
// rejected rather than read as absence.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// The payload does not conform to [`MatchCardRequest`].
#[derive(Debug)]
pub struct ValidationError(serde_json::Error);

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid match card payload: {}", self.0)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
