use crate::types::{MatchId, PlayerId, Round};
use thiserror::Error;

/// Validation failures surfaced by tournament operations.
///
/// None of these leave the tournament half-updated: an operation either
/// applies completely or returns one of these without touching any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Unsupported tournament format: {0}")]
    UnsupportedFormat(String),

    #[error("Match {0} not found")]
    MatchNotFound(MatchId),

    #[error("Match {0} has already been completed")]
    AlreadyCompleted(MatchId),

    #[error("Winner {winner:?} is not a participant of match {match_id}")]
    InvalidWinner {
        match_id: MatchId,
        winner: Option<PlayerId>,
    },

    #[error("Round {0} is not complete")]
    RoundIncomplete(Round),

    #[error("Tournament is already completed")]
    TournamentCompleted,

    #[error("Match {0} cannot end in a draw in an elimination format")]
    DrawNotAllowed(MatchId),

    #[error("Player {0} is registered more than once")]
    DuplicatePlayer(PlayerId),
}

pub type TournamentResult<T> = Result<T, TournamentError>;
