use super::{
    double_elimination::DoubleElimination, round_robin::RoundRobin, schedule::Schedule,
    single_elimination::SingleElimination, swiss::Swiss,
};
use crate::{
    core::{TournamentConfig, TournamentFormat},
    types::{MatchId, PlayerId, Round},
};
use enum_dispatch::enum_dispatch;

/// Format-specific scheduling rules.
///
/// A strategy owns whatever bracket state its format needs; the shared
/// players and matches live in the [`Schedule`] it is handed.
#[enum_dispatch]
pub trait TournamentStrategy {
    /// Schedules round 1. The schedule is already on round 1 when called.
    fn initialize(&mut self, schedule: &mut Schedule);

    /// Schedules the schedule's current round, which has just begun.
    fn generate_round(&mut self, schedule: &mut Schedule);

    /// Whether the format has reached its end. Only meaningful once the
    /// current round is fully resolved.
    fn is_complete(&self, schedule: &Schedule) -> bool;

    /// Called after a result has been applied to `match_id`.
    fn process_result(&mut self, schedule: &mut Schedule, _match_id: MatchId) {
        self.settle(schedule);
    }

    fn allows_draws(&self) -> bool {
        true
    }

    /// The format's own idea of who won, if it has one. `None` leaves the
    /// decision to the standings.
    fn champion(&self, _schedule: &Schedule) -> Option<PlayerId> {
        None
    }

    /// Closes the tournament or moves it to the next round once the current
    /// round is resolved. Without auto-advance only the closing happens and
    /// the caller advances rounds explicitly.
    fn settle(&mut self, schedule: &mut Schedule) {
        while !schedule.is_completed() && schedule.is_round_complete(schedule.current_round()) {
            if self.is_complete(schedule) {
                schedule.mark_completed();
                break;
            }

            if !schedule.auto_advance() {
                break;
            }

            let round = schedule.begin_next_round();
            log::info!("Advancing to round {round}");
            self.generate_round(schedule);

            if schedule.round_matches(round).next().is_none() && !self.is_complete(schedule) {
                log::warn!("Round {round} has no pairings left, closing tournament");
                schedule.mark_completed();
            }
        }
    }
}

#[enum_dispatch(TournamentStrategy)]
#[derive(Debug, Clone)]
pub enum Strategy {
    RoundRobin,
    SingleElimination,
    DoubleElimination,
    Swiss,
}

impl Strategy {
    pub fn from_config(config: &TournamentConfig) -> Self {
        match config.format {
            TournamentFormat::RoundRobin => RoundRobin::default().into(),
            TournamentFormat::SingleElimination => SingleElimination::default().into(),
            TournamentFormat::DoubleElimination => DoubleElimination::default().into(),
            TournamentFormat::Swiss => Swiss::new(config.swiss_rounds).into(),
        }
    }
}

/// Pairs entrants two by two in the given order and returns the one left
/// over when the count is odd.
pub(crate) fn pair_in_order(
    schedule: &mut Schedule,
    entrants: &[PlayerId],
    round: Round,
) -> Option<PlayerId> {
    let mut leftover = None;
    for pair in entrants.chunks(2) {
        match *pair {
            [player1, player2] => {
                schedule.create_match(player1, player2, round);
            }
            [player] => leftover = Some(player),
            _ => unreachable!("chunks(2) yields one or two entrants"),
        }
    }
    leftover
}
