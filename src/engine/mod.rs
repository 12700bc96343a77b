pub mod double_elimination;
pub mod round_robin;
pub mod schedule;
pub mod shared;
pub mod single_elimination;
pub mod strategy;
pub mod summary;
pub mod swiss;
pub mod tournament;

pub use schedule::Schedule;
pub use shared::SharedTournament;
pub use strategy::{Strategy, TournamentStrategy};
pub use summary::TournamentSummary;
pub use tournament::Tournament;
