use super::{
    schedule::Schedule,
    strategy::{Strategy, TournamentStrategy},
};
use crate::{
    core::{Match, MatchOutcome, Player, TournamentConfig, TournamentFormat},
    error::{TournamentError, TournamentResult},
    types::{MatchId, PlayerId, Round},
};
use itertools::Itertools;

/// Runs one tournament: owns the roster and the match list, applies results
/// and lets the format strategy decide pairings and when it is over.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
    schedule: Schedule,
    strategy: Strategy,
    rankings: Vec<PlayerId>,
}

impl Tournament {
    /// Creates the tournament and schedules its first round.
    ///
    /// A roster too small for the format to play any match comes back
    /// already completed.
    pub fn new(config: TournamentConfig, players: Vec<Player>) -> TournamentResult<Self> {
        if let Some(duplicate) = players.iter().map(|player| player.id).duplicates().next() {
            return Err(TournamentError::DuplicatePlayer(duplicate));
        }

        log::info!(
            "Starting {} tournament '{}' with {} players",
            config.format,
            config.name,
            players.len()
        );

        let schedule = Schedule::new(players, config.random_seed, config.auto_advance);
        let strategy = Strategy::from_config(&config);
        let mut tournament = Self {
            config,
            schedule,
            strategy,
            rankings: vec![],
        };

        tournament.schedule.begin_next_round();
        tournament.strategy.initialize(&mut tournament.schedule);
        tournament.strategy.settle(&mut tournament.schedule);
        tournament.update_rankings();

        Ok(tournament)
    }

    /// Builds a tournament from a format given by name.
    pub fn with_format_name(
        name: &str,
        format: &str,
        players: Vec<Player>,
    ) -> TournamentResult<Self> {
        let format = TournamentFormat::parse(format)?;
        Self::new(TournamentConfig::new(name, format), players)
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn format(&self) -> TournamentFormat {
        self.config.format
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn allows_draws(&self) -> bool {
        self.strategy.allows_draws()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn players(&self) -> &[Player] {
        self.schedule.players()
    }

    pub fn matches(&self) -> &[Match] {
        self.schedule.matches()
    }

    pub fn current_round(&self) -> Round {
        self.schedule.current_round()
    }

    pub fn is_completed(&self) -> bool {
        self.schedule.is_completed()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.schedule.player(player_id)
    }

    pub fn match_by_id(&self, match_id: MatchId) -> Option<&Match> {
        self.schedule.match_by_id(match_id)
    }

    pub fn upcoming_matches(&self) -> Vec<&Match> {
        self.matches()
            .iter()
            .filter(|game| !game.is_completed())
            .collect()
    }

    pub fn completed_matches(&self) -> Vec<&Match> {
        self.matches()
            .iter()
            .filter(|game| game.is_completed())
            .collect()
    }

    pub fn current_round_matches(&self) -> Vec<&Match> {
        self.schedule
            .round_matches(self.current_round())
            .collect()
    }

    /// Records the final outcome of a match.
    ///
    /// Everything is validated before anything changes: on error neither the
    /// match nor any player record has been touched.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        outcome: MatchOutcome,
    ) -> TournamentResult<()> {
        let game = self
            .schedule
            .match_by_id(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        game.validate(outcome)?;
        if outcome == MatchOutcome::Draw && !self.allows_draws() {
            return Err(TournamentError::DrawNotAllowed(match_id));
        }

        let (player1, player2) = (game.player1, game.player2);
        let (win, draw, loss) = (
            self.config.win_points,
            self.config.draw_points,
            self.config.loss_points,
        );

        match outcome {
            MatchOutcome::Draw => {
                for player_id in [player1, player2] {
                    if let Some(player) = self.schedule.player_mut(player_id) {
                        player.draw_match(draw);
                    }
                }
                log::debug!("Match {match_id}: {player1} and {player2} draw");
            }
            MatchOutcome::Winner(winner) => {
                let loser = if winner == player1 { player2 } else { player1 };
                if let Some(player) = self.schedule.player_mut(winner) {
                    player.win_match(win);
                }
                if let Some(player) = self.schedule.player_mut(loser) {
                    player.lose_match(loss);
                }
                log::debug!("Match {match_id}: {winner} beats {loser}");
            }
        }

        if let Some(game) = self.schedule.match_mut(match_id) {
            game.set_result(outcome);
        }

        self.strategy.process_result(&mut self.schedule, match_id);
        self.update_rankings();
        Ok(())
    }

    /// Same as [`Tournament::record_result`] with a nullable winner and a
    /// draw flag, the draw flag taking precedence.
    pub fn record_result_parts(
        &mut self,
        match_id: MatchId,
        winner: Option<PlayerId>,
        is_draw: bool,
    ) -> TournamentResult<()> {
        let game = self
            .schedule
            .match_by_id(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        if game.is_completed() {
            return Err(TournamentError::AlreadyCompleted(match_id));
        }
        let outcome = MatchOutcome::from_parts(match_id, winner, is_draw)?;
        self.record_result(match_id, outcome)
    }

    /// Moves to the next round once the current one is fully resolved.
    pub fn advance_round(&mut self) -> TournamentResult<()> {
        if self.is_completed() {
            return Err(TournamentError::TournamentCompleted);
        }

        let round = self.current_round();
        if !self.schedule.is_round_complete(round) {
            return Err(TournamentError::RoundIncomplete(round));
        }

        let round = self.schedule.begin_next_round();
        log::info!("Advancing to round {round}");
        self.strategy.generate_round(&mut self.schedule);
        self.strategy.settle(&mut self.schedule);
        self.update_rankings();
        Ok(())
    }

    /// Sorts the roster by score, then wins. Ties keep roster order.
    pub fn update_rankings(&mut self) {
        self.rankings = self
            .players()
            .iter()
            .sorted_by(|a, b| {
                b.score()
                    .cmp(&a.score())
                    .then_with(|| b.matches_won().cmp(&a.matches_won()))
            })
            .map(|player| player.id)
            .collect();
    }

    pub fn rankings(&self) -> Vec<&Player> {
        self.rankings
            .iter()
            .filter_map(|player_id| self.player(*player_id))
            .collect()
    }

    /// The winner once the tournament is over: the last entrant standing in
    /// elimination formats, the top of the standings otherwise.
    pub fn champion(&self) -> Option<&Player> {
        if !self.is_completed() {
            return None;
        }

        self.strategy
            .champion(&self.schedule)
            .or_else(|| self.rankings.first().copied())
            .and_then(|player_id| self.player(player_id))
    }
}
