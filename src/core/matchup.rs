use crate::{
    error::{TournamentError, TournamentResult},
    types::{MatchId, PairKey, PlayerId, Round},
};
use serde::{Deserialize, Serialize};

/// Final result of a match as reported by whatever decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(PlayerId),
    Draw,
}

impl MatchOutcome {
    /// Builds an outcome from a nullable winner and a draw flag.
    ///
    /// A set draw flag takes precedence over any winner id. Neither a winner
    /// nor a draw is rejected as an invalid winner.
    pub fn from_parts(
        match_id: MatchId,
        winner: Option<PlayerId>,
        is_draw: bool,
    ) -> TournamentResult<Self> {
        if is_draw {
            return Ok(Self::Draw);
        }

        winner
            .map(Self::Winner)
            .ok_or(TournamentError::InvalidWinner {
                match_id,
                winner: None,
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: MatchId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    winner: Option<PlayerId>,
    loser: Option<PlayerId>,
    is_draw: bool,
    completed: bool,
    pub round: Round,
}

impl Match {
    pub fn new(id: MatchId, player1: PlayerId, player2: PlayerId, round: Round) -> Self {
        Self {
            id,
            player1,
            player2,
            winner: None,
            loser: None,
            is_draw: false,
            completed: false,
            round,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn loser(&self) -> Option<PlayerId> {
        self.loser
    }

    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1 == player_id || self.player2 == player_id
    }

    pub fn opponent_of(&self, player_id: PlayerId) -> Option<PlayerId> {
        if self.player1 == player_id {
            Some(self.player2)
        } else if self.player2 == player_id {
            Some(self.player1)
        } else {
            None
        }
    }

    pub fn pair_key(&self) -> PairKey {
        PairKey::new(self.player1, self.player2)
    }

    /// Checks that `outcome` could be applied to this match without applying it.
    pub(crate) fn validate(&self, outcome: MatchOutcome) -> TournamentResult<()> {
        if self.completed {
            return Err(TournamentError::AlreadyCompleted(self.id));
        }

        if let MatchOutcome::Winner(winner) = outcome {
            if !self.involves(winner) {
                return Err(TournamentError::InvalidWinner {
                    match_id: self.id,
                    winner: Some(winner),
                });
            }
        }

        Ok(())
    }

    // Callers validate first; a completed match is never touched again.
    pub(crate) fn set_result(&mut self, outcome: MatchOutcome) {
        debug_assert!(!self.completed);
        match outcome {
            MatchOutcome::Draw => self.is_draw = true,
            MatchOutcome::Winner(winner) => {
                self.winner = Some(winner);
                self.loser = self.opponent_of(winner);
            }
        }
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{Match, MatchOutcome};
    use crate::{error::TournamentError, types::PlayerId};

    fn ids() -> (PlayerId, PlayerId, PlayerId) {
        (
            PlayerId::from_u128(1),
            PlayerId::from_u128(2),
            PlayerId::from_u128(3),
        )
    }

    #[test]
    fn test_set_result_records_winner_and_loser() {
        let (a, b, _) = ids();
        let mut game = Match::new(1, a, b, 1);
        game.validate(MatchOutcome::Winner(b)).unwrap();
        game.set_result(MatchOutcome::Winner(b));

        assert!(game.is_completed());
        assert_eq!(game.winner(), Some(b));
        assert_eq!(game.loser(), Some(a));
        assert!(!game.is_draw());
    }

    #[test]
    fn test_draw_has_neither_winner_nor_loser() {
        let (a, b, _) = ids();
        let mut game = Match::new(1, a, b, 1);
        game.set_result(MatchOutcome::Draw);

        assert!(game.is_draw());
        assert_eq!(game.winner(), None);
        assert_eq!(game.loser(), None);
    }

    #[test]
    fn test_validate_rejects_outsider_and_completed() {
        let (a, b, c) = ids();
        let mut game = Match::new(4, a, b, 1);
        assert_eq!(
            game.validate(MatchOutcome::Winner(c)),
            Err(TournamentError::InvalidWinner {
                match_id: 4,
                winner: Some(c)
            })
        );

        game.set_result(MatchOutcome::Draw);
        assert_eq!(
            game.validate(MatchOutcome::Winner(a)),
            Err(TournamentError::AlreadyCompleted(4))
        );
    }

    #[test]
    fn test_outcome_from_parts() {
        let (a, _, _) = ids();
        assert_eq!(
            MatchOutcome::from_parts(1, Some(a), true),
            Ok(MatchOutcome::Draw)
        );
        assert_eq!(
            MatchOutcome::from_parts(1, Some(a), false),
            Ok(MatchOutcome::Winner(a))
        );
        assert!(matches!(
            MatchOutcome::from_parts(1, None, false),
            Err(TournamentError::InvalidWinner { winner: None, .. })
        ));
    }

    #[test]
    fn test_opponent_of() {
        let (a, b, c) = ids();
        let game = Match::new(1, a, b, 2);
        assert_eq!(game.opponent_of(a), Some(b));
        assert_eq!(game.opponent_of(b), Some(a));
        assert_eq!(game.opponent_of(c), None);
    }
}
