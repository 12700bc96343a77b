use super::{
    schedule::Schedule,
    strategy::{pair_in_order, TournamentStrategy},
};
use crate::types::{PlayerId, Round};
use rand::seq::{index, SliceRandom};
use std::collections::HashSet;

/// Knockout bracket. One loss and you are out.
#[derive(Debug, Clone, Default)]
pub struct SingleElimination {
    // Entrants that move on from the current round without playing:
    // round-1 byes, or the odd one out of a later pairing.
    carried: Vec<PlayerId>,
}

impl SingleElimination {
    /// Everyone still alive once `round` is resolved.
    fn advancing(&self, schedule: &Schedule, round: Round) -> Vec<PlayerId> {
        self.carried
            .iter()
            .copied()
            .chain(schedule.round_winners(round))
            .collect()
    }
}

impl TournamentStrategy for SingleElimination {
    fn initialize(&mut self, schedule: &mut Schedule) {
        let mut roster = schedule.player_ids();
        roster.shuffle(schedule.rng_mut());

        let byes = roster.len().next_power_of_two() - roster.len();
        let bye_indices: HashSet<usize> =
            index::sample(schedule.rng_mut(), roster.len(), byes.min(roster.len()))
                .into_iter()
                .collect();

        let mut carried = vec![];
        let mut playing = vec![];
        for (index, player_id) in roster.into_iter().enumerate() {
            if bye_indices.contains(&index) {
                carried.push(player_id);
            } else {
                playing.push(player_id);
            }
        }

        log::info!(
            "Single elimination: {} byes, {} players in round {}",
            carried.len(),
            playing.len(),
            schedule.current_round()
        );

        let round = schedule.current_round();
        carried.extend(pair_in_order(schedule, &playing, round));
        self.carried = carried;
    }

    fn generate_round(&mut self, schedule: &mut Schedule) {
        let round = schedule.current_round();
        let entrants = self.advancing(schedule, round - 1);
        self.carried = pair_in_order(schedule, &entrants, round)
            .into_iter()
            .collect();
    }

    fn is_complete(&self, schedule: &Schedule) -> bool {
        let round = schedule.current_round();
        schedule.is_round_complete(round) && self.advancing(schedule, round).len() <= 1
    }

    fn allows_draws(&self) -> bool {
        false
    }

    fn champion(&self, schedule: &Schedule) -> Option<PlayerId> {
        if !self.is_complete(schedule) {
            return None;
        }
        self.advancing(schedule, schedule.current_round())
            .first()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::SingleElimination;
    use crate::{
        core::{MatchOutcome, Player},
        engine::{schedule::Schedule, strategy::TournamentStrategy},
        types::PlayerId,
    };

    fn initialized(n: u128, seed: u64) -> (SingleElimination, Schedule) {
        let players = (1..=n)
            .map(|i| Player::new(PlayerId::from_u128(i), format!("P{i}")))
            .collect();
        let mut schedule = Schedule::new(players, Some(seed), true);
        schedule.begin_next_round();
        let mut strategy = SingleElimination::default();
        strategy.initialize(&mut schedule);
        (strategy, schedule)
    }

    #[test]
    fn test_power_of_two_has_no_byes() {
        let (strategy, schedule) = initialized(8, 3);
        assert!(strategy.carried.is_empty());
        assert_eq!(schedule.round_matches(1).count(), 4);
    }

    #[test]
    fn test_byes_fill_bracket_to_power_of_two() {
        for (n, byes) in [(3, 1), (5, 3), (6, 2), (7, 1), (12, 4)] {
            let (strategy, schedule) = initialized(n, 11);
            assert_eq!(strategy.carried.len(), byes);
            assert_eq!(
                schedule.round_matches(1).count(),
                (n as usize - byes) / 2,
                "{n} players"
            );
            for bye in strategy.carried.iter() {
                assert!(!schedule.matches().iter().any(|g| g.involves(*bye)));
            }
        }
    }

    #[test]
    fn test_bye_holders_join_the_second_round() {
        let (mut strategy, mut schedule) = initialized(6, 5);
        let byes = strategy.carried.clone();
        let round_one = schedule.round_matches(1).map(|g| g.id).collect::<Vec<_>>();
        for id in round_one {
            let game = schedule.match_mut(id).unwrap();
            let winner = game.player1;
            game.set_result(MatchOutcome::Winner(winner));
        }
        assert!(!strategy.is_complete(&schedule));

        schedule.begin_next_round();
        strategy.generate_round(&mut schedule);
        let round_two = schedule.round_matches(2).collect::<Vec<_>>();
        assert_eq!(round_two.len(), 2);
        for bye in byes {
            assert!(round_two.iter().any(|g| g.involves(bye)));
        }
    }

    #[test]
    fn test_lone_entrant_is_champion() {
        let (strategy, schedule) = initialized(1, 0);
        assert!(schedule.matches().is_empty());
        assert!(strategy.is_complete(&schedule));
        assert_eq!(strategy.champion(&schedule), Some(PlayerId::from_u128(1)));
    }
}
