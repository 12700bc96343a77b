use super::{summary::TournamentSummary, tournament::Tournament};
use crate::{
    core::{MatchOutcome, Player},
    error::TournamentResult,
    types::MatchId,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// A tournament that several threads can report results to.
///
/// Every operation holds the lock from start to finish, so results are
/// applied one after the other and snapshots never see a half-applied one.
#[derive(Debug, Clone)]
pub struct SharedTournament {
    inner: Arc<Mutex<Tournament>>,
}

impl SharedTournament {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tournament)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Tournament> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record_result(&self, match_id: MatchId, outcome: MatchOutcome) -> TournamentResult<()> {
        self.lock().record_result(match_id, outcome)
    }

    pub fn advance_round(&self) -> TournamentResult<()> {
        self.lock().advance_round()
    }

    pub fn is_completed(&self) -> bool {
        self.lock().is_completed()
    }

    pub fn rankings(&self) -> Vec<Player> {
        self.lock().rankings().into_iter().cloned().collect()
    }

    pub fn summary(&self) -> TournamentSummary {
        TournamentSummary::from_tournament(&self.lock())
    }

    /// Runs `f` with exclusive access to the tournament.
    pub fn with<T>(&self, f: impl FnOnce(&mut Tournament) -> T) -> T {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::SharedTournament;
    use crate::{
        core::{MatchOutcome, Player, TournamentConfig, TournamentFormat},
        engine::Tournament,
        error::TournamentError,
        types::{AppResult, PlayerId},
    };
    use std::thread;

    #[test]
    fn test_concurrent_results_are_all_applied() -> AppResult<()> {
        let players = (1..=6)
            .map(|i| Player::new(PlayerId::from_u128(i), format!("P{i}")))
            .collect();
        let config = TournamentConfig::new("Shared", TournamentFormat::RoundRobin).with_seed(3);
        let shared = SharedTournament::new(Tournament::new(config, players)?);

        let games = shared.with(|t| t.matches().to_vec());
        let handles = games
            .into_iter()
            .map(|game| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.record_result(game.id, MatchOutcome::Winner(game.player1))
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert!(handle.join().is_ok_and(|result| result.is_ok()));
        }

        assert!(shared.is_completed());
        let total: u32 = shared.rankings().iter().map(|p| p.matches_won()).sum();
        assert_eq!(total, 15);
        assert_eq!(shared.advance_round(), Err(TournamentError::TournamentCompleted));
        Ok(())
    }
}
