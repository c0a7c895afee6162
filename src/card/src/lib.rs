pub mod request;
pub mod roster;
pub mod template;

pub use request::{MatchCardRequest, PlayerEntry, ValidationError};
pub use roster::{RosterRow, ROSTER_CAPACITY, build_roster_rows};
pub use template::MatchCardTemplate;
