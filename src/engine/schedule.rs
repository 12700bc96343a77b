use crate::{
    core::{Match, Player},
    types::{MatchId, PairCountMap, PairKey, PlayerId, Round},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Players, matches and round bookkeeping shared by every format.
///
/// The active strategy receives a mutable schedule to create matches and
/// move rounds forward; everything else only reads it.
#[derive(Debug, Clone)]
pub struct Schedule {
    players: Vec<Player>,
    matches: Vec<Match>,
    current_round: Round,
    completed: bool,
    auto_advance: bool,
    pair_counts: PairCountMap,
    next_match_id: MatchId,
    rng: ChaCha8Rng,
}

impl Schedule {
    pub(crate) fn new(players: Vec<Player>, random_seed: Option<u64>, auto_advance: bool) -> Self {
        let rng = match random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Self {
            players,
            matches: vec![],
            current_round: 0,
            completed: false,
            auto_advance,
            pair_counts: PairCountMap::new(),
            next_match_id: 1,
            rng,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|player| player.id).collect()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    pub(crate) fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id == player_id)
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_by_id(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|game| game.id == match_id)
    }

    pub(crate) fn match_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|game| game.id == match_id)
    }

    /// Schedules a new match and returns it. Pairing rules are the caller's
    /// business: nothing here stops a player from being paired with itself.
    pub fn create_match(&mut self, player1: PlayerId, player2: PlayerId, round: Round) -> &Match {
        let id = self.next_match_id;
        self.next_match_id += 1;

        *self
            .pair_counts
            .entry(PairKey::new(player1, player2))
            .or_default() += 1;

        log::debug!("Round {round}: scheduled match {id} {player1} vs {player2}");
        self.matches.push(Match::new(id, player1, player2, round));
        &self.matches[self.matches.len() - 1]
    }

    pub fn current_round(&self) -> Round {
        self.current_round
    }

    pub(crate) fn begin_next_round(&mut self) -> Round {
        self.current_round += 1;
        self.current_round
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn mark_completed(&mut self) {
        if !self.completed {
            log::info!("Tournament completed after round {}", self.current_round);
        }
        self.completed = true;
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn round_matches(&self, round: Round) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |game| game.round == round)
    }

    pub fn is_round_complete(&self, round: Round) -> bool {
        self.round_matches(round).all(|game| game.is_completed())
    }

    /// Winners of a round's decided matches, in scheduling order.
    pub fn round_winners(&self, round: Round) -> Vec<PlayerId> {
        self.round_matches(round)
            .filter_map(|game| game.winner())
            .collect()
    }

    pub fn times_played(&self, player1: PlayerId, player2: PlayerId) -> u32 {
        self.pair_counts
            .get(&PairKey::new(player1, player2))
            .copied()
            .unwrap_or_default()
    }

    pub fn have_played(&self, player1: PlayerId, player2: PlayerId) -> bool {
        self.times_played(player1, player2) > 0
    }

    pub fn pair_counts(&self) -> &PairCountMap {
        &self.pair_counts
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
