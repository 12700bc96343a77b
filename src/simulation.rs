use crate::{
    core::{Match, MatchOutcome},
    engine::Tournament,
    error::TournamentResult,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PLAYER1_WIN_PROBABILITY: f64 = 0.4;
const PLAYER2_WIN_PROBABILITY: f64 = 0.4;

/// Decides how a scheduled match ends.
pub trait ResultSource {
    fn decide(&mut self, game: &Match, allows_draws: bool) -> MatchOutcome;
}

/// Plays matches out at random: 40% for either side and 20% draws.
#[derive(Debug, Clone)]
pub struct RandomResultSource {
    rng: ChaCha8Rng,
}

impl RandomResultSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }
}

impl ResultSource for RandomResultSource {
    fn decide(&mut self, game: &Match, allows_draws: bool) -> MatchOutcome {
        let roll = self.rng.random::<f64>();
        if roll < PLAYER1_WIN_PROBABILITY {
            MatchOutcome::Winner(game.player1)
        } else if roll < PLAYER1_WIN_PROBABILITY + PLAYER2_WIN_PROBABILITY {
            MatchOutcome::Winner(game.player2)
        } else if allows_draws {
            MatchOutcome::Draw
        } else if self.rng.random_bool(0.5) {
            MatchOutcome::Winner(game.player1)
        } else {
            MatchOutcome::Winner(game.player2)
        }
    }
}

/// Plays the current round's pending matches, advancing rounds by hand when
/// the tournament does not, until it is completed.
pub fn run_to_completion(
    tournament: &mut Tournament,
    source: &mut impl ResultSource,
) -> TournamentResult<()> {
    while !tournament.is_completed() {
        let pending = tournament
            .current_round_matches()
            .into_iter()
            .filter(|game| !game.is_completed())
            .cloned()
            .collect::<Vec<_>>();

        if pending.is_empty() {
            tournament.advance_round()?;
            continue;
        }

        let allows_draws = tournament.allows_draws();
        for game in pending {
            let outcome = source.decide(&game, allows_draws);
            tournament.record_result(game.id, outcome)?;
        }
    }

    log::info!(
        "'{}' finished after {} rounds and {} matches",
        tournament.config().name,
        tournament.current_round(),
        tournament.matches().len()
    );
    Ok(())
}
