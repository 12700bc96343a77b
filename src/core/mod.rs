pub mod config;
pub mod constants;
pub mod matchup;
pub mod player;

pub use config::{TournamentConfig, TournamentFormat};
pub use constants::*;
pub use matchup::{Match, MatchOutcome};
pub use player::Player;
