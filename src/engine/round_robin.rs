use super::{schedule::Schedule, strategy::TournamentStrategy};
use crate::{
    core::FIRST_ROUND,
    types::{PlayerId, Round},
};

/// Everyone meets everyone once, scheduled up front with the circle method.
#[derive(Debug, Clone, Default)]
pub struct RoundRobin {
    rounds: Round,
}

impl RoundRobin {
    pub fn rounds(&self) -> Round {
        self.rounds
    }
}

impl TournamentStrategy for RoundRobin {
    fn initialize(&mut self, schedule: &mut Schedule) {
        // A None slot is the bye: whoever faces it sits the round out.
        let mut slots: Vec<Option<PlayerId>> =
            schedule.player_ids().into_iter().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        self.rounds = n.saturating_sub(1) as Round;

        for round in FIRST_ROUND..FIRST_ROUND + self.rounds {
            for i in 0..n / 2 {
                if let (Some(player1), Some(player2)) = (slots[i], slots[n - 1 - i]) {
                    schedule.create_match(player1, player2, round);
                }
            }

            // Slot 0 stays put, everybody else moves one seat.
            slots[1..].rotate_right(1);
        }

        log::info!(
            "Round robin: {} matches over {} rounds",
            schedule.matches().len(),
            self.rounds
        );
    }

    fn generate_round(&mut self, _schedule: &mut Schedule) {}

    fn is_complete(&self, schedule: &Schedule) -> bool {
        schedule.matches().iter().all(|game| game.is_completed())
    }
}

#[cfg(test)]
mod tests {
    use super::RoundRobin;
    use crate::{
        core::Player,
        engine::{schedule::Schedule, strategy::TournamentStrategy},
        types::{PairKey, PlayerId},
    };
    use itertools::Itertools;
    use std::collections::HashSet;

    fn initialized(n: u128) -> (RoundRobin, Schedule) {
        let players = (1..=n)
            .map(|i| Player::new(PlayerId::from_u128(i), format!("P{i}")))
            .collect();
        let mut schedule = Schedule::new(players, Some(0), true);
        schedule.begin_next_round();
        let mut strategy = RoundRobin::default();
        strategy.initialize(&mut schedule);
        (strategy, schedule)
    }

    #[test]
    fn test_even_roster_meets_every_pair_once() {
        for n in [2, 4, 6, 8, 10] {
            let (strategy, schedule) = initialized(n);
            let n = n as usize;
            assert_eq!(strategy.rounds() as usize, n - 1);
            assert_eq!(schedule.matches().len(), n * (n - 1) / 2);

            let pairs: HashSet<PairKey> = schedule.matches().iter().map(|g| g.pair_key()).collect();
            assert_eq!(pairs.len(), n * (n - 1) / 2);
            assert!(schedule.pair_counts().values().all(|&count| count == 1));
        }
    }

    #[test]
    fn test_odd_roster_sits_each_player_out_once() {
        for n in [3, 5, 7] {
            let (strategy, schedule) = initialized(n);
            assert_eq!(strategy.rounds() as u128, n);

            for player_id in schedule.player_ids() {
                let rounds_played = schedule
                    .matches()
                    .iter()
                    .filter(|game| game.involves(player_id))
                    .map(|game| game.round)
                    .unique()
                    .count();
                assert_eq!(rounds_played as u128, n - 1);
            }
        }
    }

    #[test]
    fn test_nobody_plays_twice_in_a_round() {
        let (_, schedule) = initialized(6);
        for (_, games) in &schedule.matches().iter().chunk_by(|game| game.round) {
            let seats = games.flat_map(|g| [g.player1, g.player2]).collect_vec();
            assert_eq!(seats.len(), seats.iter().unique().count());
        }
    }

    #[test]
    fn test_single_player_has_no_matches() {
        let (strategy, schedule) = initialized(1);
        assert_eq!(strategy.rounds(), 1);
        assert!(schedule.matches().is_empty());
        assert!(strategy.is_complete(&schedule));
    }
}
