use super::{
    schedule::Schedule,
    strategy::{pair_in_order, TournamentStrategy},
};
use crate::types::{MatchId, PlayerId};
use rand::seq::SliceRandom;

/// Winners and losers brackets: a first loss drops a player to the losers
/// bracket, a second one eliminates it.
#[derive(Debug, Clone, Default)]
pub struct DoubleElimination {
    winners_bracket: Vec<PlayerId>,
    losers_bracket: Vec<PlayerId>,
    eliminated: Vec<PlayerId>,
}

impl DoubleElimination {
    pub fn winners_bracket(&self) -> &[PlayerId] {
        &self.winners_bracket
    }

    pub fn losers_bracket(&self) -> &[PlayerId] {
        &self.losers_bracket
    }

    pub fn eliminated(&self) -> &[PlayerId] {
        &self.eliminated
    }

    fn is_tracked(&self, player_id: PlayerId) -> bool {
        self.winners_bracket.contains(&player_id)
            || self.losers_bracket.contains(&player_id)
            || self.eliminated.contains(&player_id)
    }

    fn record_loss(&mut self, winner: PlayerId, loser: PlayerId) {
        if !self.is_tracked(winner) {
            self.winners_bracket.push(winner);
        }

        if let Some(position) = self.winners_bracket.iter().position(|&id| id == loser) {
            self.winners_bracket.remove(position);
            self.losers_bracket.push(loser);
            log::debug!("{loser} drops to the losers bracket");
        } else if let Some(position) = self.losers_bracket.iter().position(|&id| id == loser) {
            self.losers_bracket.remove(position);
            self.eliminated.push(loser);
            log::debug!("{loser} is eliminated");
        }
    }
}

impl TournamentStrategy for DoubleElimination {
    fn initialize(&mut self, schedule: &mut Schedule) {
        let mut roster = schedule.player_ids();
        roster.shuffle(schedule.rng_mut());

        let mut slots: Vec<Option<PlayerId>> = roster.iter().copied().map(Some).collect();
        slots.resize(roster.len().next_power_of_two(), None);

        let round = schedule.current_round();
        for pair in slots.chunks(2) {
            if let [Some(player1), Some(player2)] = *pair {
                schedule.create_match(player1, player2, round);
            }
        }

        log::info!(
            "Double elimination: {} players, {} byes",
            roster.len(),
            slots.len() - roster.len()
        );

        // Bye holders are in the winners bracket from the start as well.
        self.winners_bracket = roster;
        self.losers_bracket.clear();
        self.eliminated.clear();
    }

    fn generate_round(&mut self, schedule: &mut Schedule) {
        let round = schedule.current_round();

        // Grand final: the last player of each bracket meet.
        if let ([champion], [challenger]) =
            (self.winners_bracket.as_slice(), self.losers_bracket.as_slice())
        {
            schedule.create_match(*champion, *challenger, round);
            return;
        }

        let winners = self.winners_bracket.clone();
        let losers = self.losers_bracket.clone();
        pair_in_order(schedule, &winners, round);
        pair_in_order(schedule, &losers, round);
    }

    fn process_result(&mut self, schedule: &mut Schedule, match_id: MatchId) {
        if let Some((winner, loser)) = schedule
            .match_by_id(match_id)
            .and_then(|game| Some((game.winner()?, game.loser()?)))
        {
            self.record_loss(winner, loser);
        }

        self.settle(schedule);
    }

    fn is_complete(&self, _schedule: &Schedule) -> bool {
        self.winners_bracket.len() + self.losers_bracket.len() <= 1
    }

    fn allows_draws(&self) -> bool {
        false
    }

    fn champion(&self, schedule: &Schedule) -> Option<PlayerId> {
        if !self.is_complete(schedule) {
            return None;
        }
        self.winners_bracket
            .first()
            .or(self.losers_bracket.first())
            .copied()
    }
}
