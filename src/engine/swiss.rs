use super::{
    schedule::Schedule,
    strategy::{pair_in_order, TournamentStrategy},
};
use crate::{
    core::DEFAULT_SWISS_ROUNDS,
    types::{PlayerId, Round},
};
use itertools::Itertools;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

// Pairing attempts before falling back to greedy pairing with rematches.
const PAIRING_SEARCH_BUDGET: usize = 10_000;

/// Swiss system: players on the same score meet, avoiding rematches
/// while any other opponent is left.
#[derive(Debug, Clone)]
pub struct Swiss {
    max_rounds: Round,
}

impl Default for Swiss {
    fn default() -> Self {
        Self::new(DEFAULT_SWISS_ROUNDS)
    }
}

impl Swiss {
    pub fn new(max_rounds: Round) -> Self {
        Self { max_rounds }
    }

    pub fn max_rounds(&self) -> Round {
        self.max_rounds
    }

    fn all_pairs_played(schedule: &Schedule) -> bool {
        schedule
            .player_ids()
            .into_iter()
            .tuple_combinations()
            .all(|(player1, player2)| schedule.have_played(player1, player2))
    }

    /// Players by score, best first, in random order within a score.
    fn standings_order(schedule: &mut Schedule) -> Vec<PlayerId> {
        let by_score = schedule
            .players()
            .iter()
            .map(|player| (player.score(), player.id))
            .into_group_map();

        let mut order = vec![];
        for score in by_score.keys().copied().sorted().rev() {
            let mut group = by_score[&score].clone();
            group.shuffle(schedule.rng_mut());
            order.extend(group);
        }
        order
    }

    /// Pairs the head of `remaining` with the closest player it has not met,
    /// backtracking when the rest cannot be paired that way.
    fn search(
        schedule: &Schedule,
        remaining: &mut Vec<PlayerId>,
        pairs: &mut Vec<(PlayerId, PlayerId)>,
        budget: &mut usize,
    ) -> bool {
        let Some(&pivot) = remaining.first() else {
            return true;
        };

        for index in 1..remaining.len() {
            if *budget == 0 {
                return false;
            }
            *budget -= 1;

            let opponent = remaining[index];
            if schedule.have_played(pivot, opponent) {
                continue;
            }

            remaining.remove(index);
            remaining.remove(0);
            pairs.push((pivot, opponent));
            if Self::search(schedule, remaining, pairs, budget) {
                return true;
            }
            pairs.pop();
            remaining.insert(0, pivot);
            remaining.insert(index, opponent);
        }

        false
    }

    /// A full pairing of `order` without rematches, plus the bye for an odd
    /// count. Byes are tried from the bottom of the standings up.
    fn rematch_free_pairing(
        schedule: &Schedule,
        order: &[PlayerId],
    ) -> Option<(Vec<(PlayerId, PlayerId)>, Option<PlayerId>)> {
        let bye_candidates: Vec<Option<usize>> = if order.len() % 2 == 0 {
            vec![None]
        } else {
            (0..order.len()).rev().map(Some).collect()
        };

        let mut budget = PAIRING_SEARCH_BUDGET;
        for bye in bye_candidates {
            let mut remaining = order.to_vec();
            let bye = bye.map(|index| remaining.remove(index));
            let mut pairs = vec![];
            if Self::search(schedule, &mut remaining, &mut pairs, &mut budget) {
                return Some((pairs, bye));
            }
            if budget == 0 {
                break;
            }
        }

        None
    }

    /// Removes and returns the first player in `pool` that `pivot` has not met yet.
    fn take_unplayed(
        schedule: &Schedule,
        pivot: PlayerId,
        pool: &mut VecDeque<PlayerId>,
    ) -> Option<PlayerId> {
        let position = pool
            .iter()
            .position(|&opponent| !schedule.have_played(pivot, opponent))?;
        pool.remove(position)
    }

    /// Greedy pairing down the standings, rematching only when a pivot has
    /// met everyone left.
    fn pair_with_rematches(schedule: &mut Schedule, order: Vec<PlayerId>, round: Round) {
        let mut remaining = VecDeque::from(order);
        while let Some(pivot) = remaining.pop_front() {
            let opponent = match Self::take_unplayed(schedule, pivot, &mut remaining) {
                Some(opponent) => opponent,
                None => match remaining.pop_front() {
                    Some(opponent) => {
                        log::warn!("Round {round}: forced rematch {pivot} vs {opponent}");
                        opponent
                    }
                    None => {
                        log::debug!("Round {round}: {pivot} gets a bye");
                        break;
                    }
                },
            };
            schedule.create_match(pivot, opponent, round);
        }
    }
}

impl TournamentStrategy for Swiss {
    fn initialize(&mut self, schedule: &mut Schedule) {
        let mut roster = schedule.player_ids();
        roster.shuffle(schedule.rng_mut());

        let round = schedule.current_round();
        if let Some(bye) = pair_in_order(schedule, &roster, round) {
            log::debug!("Round {round}: {bye} gets a bye");
        }
    }

    fn generate_round(&mut self, schedule: &mut Schedule) {
        let round = schedule.current_round();
        let order = Self::standings_order(schedule);

        match Self::rematch_free_pairing(schedule, &order) {
            Some((pairs, bye)) => {
                for (player1, player2) in pairs {
                    schedule.create_match(player1, player2, round);
                }
                if let Some(bye) = bye {
                    log::debug!("Round {round}: {bye} gets a bye");
                }
            }
            None => Self::pair_with_rematches(schedule, order, round),
        }
    }

    fn is_complete(&self, schedule: &Schedule) -> bool {
        schedule.current_round() >= self.max_rounds || Self::all_pairs_played(schedule)
    }
}
