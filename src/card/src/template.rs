use crate::request::MatchCardRequest;
use crate::roster::{RosterRow, build_roster_rows};
use askama::Template;

/// View model for the match card page. Optional request fields render as
/// empty cells; the cell layout itself never changes.
#[derive(Template)]
#[template(path = "match_card.html")]
pub struct MatchCardTemplate {
    pub current_team_name: String,
    pub division_name: String,
    pub formatted_date: String,
    pub match_number: String,
    pub field_name: String,
    pub away_team_name: String,
    pub home_team_name: String,
    pub rows: Vec<RosterRow>,
}

impl MatchCardTemplate {
    pub fn from_request(request: &MatchCardRequest) -> Self {
        MatchCardTemplate {
            current_team_name: request.current_team_name.clone(),
            division_name: request.division_name.clone(),
            formatted_date: request.formatted_date.clone().unwrap_or_default(),
            match_number: request.match_number.clone().unwrap_or_default(),
            field_name: request.field_name.clone().unwrap_or_default(),
            away_team_name: request.away_team_name.clone().unwrap_or_default(),
            home_team_name: request.home_team_name.clone().unwrap_or_default(),
            rows: build_roster_rows(&request.team_players),
        }
    }

    pub fn render_markup(&self) -> askama::Result<String> {
        self.render()
    }
}
