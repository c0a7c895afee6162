use crate::request::PlayerEntry;
use log::warn;

/// The printed form has room for exactly 25 player lines.
pub const ROSTER_CAPACITY: usize = 25;

/// One printed roster line. Blank rows keep an empty name and no reserve
/// marker; the number column is always left for hand-filling on the form.
pub struct RosterRow {
    pub name: String,
    pub reserve: bool,
}

impl RosterRow {
    fn blank() -> Self {
        RosterRow {
            name: String::new(),
            reserve: false,
        }
    }
}

/// Builds exactly [`ROSTER_CAPACITY`] rows in roster order. Entries past
/// capacity are dropped; missing entries become blank rows.
pub fn build_roster_rows(players: &[PlayerEntry]) -> Vec<RosterRow> {
    if players.len() > ROSTER_CAPACITY {
        warn!(
            "roster holds {} players, truncating {} past card capacity",
            players.len(),
            players.len() - ROSTER_CAPACITY
        );
    }

    (0..ROSTER_CAPACITY)
        .map(|index| match players.get(index) {
            Some(player) => RosterRow {
                name: format!("{}, {}", player.last_name, player.first_name),
                reserve: player.reserve,
            },
            None => RosterRow::blank(),
        })
        .collect()
}
