use super::tournament::Tournament;
use crate::{
    app_version,
    core::{Match, Player, TournamentConfig},
    types::{PlayerId, Round},
};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a tournament, standings in ranking order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentSummary {
    pub config: TournamentConfig,
    pub current_round: Round,
    pub completed: bool,
    pub champion: Option<PlayerId>,
    pub rankings: Vec<Player>,
    pub matches: Vec<Match>,
    app_version: [usize; 3],
}

impl TournamentSummary {
    pub fn from_tournament(tournament: &Tournament) -> Self {
        Self {
            config: tournament.config().clone(),
            current_round: tournament.current_round(),
            completed: tournament.is_completed(),
            champion: tournament.champion().map(|player| player.id),
            rankings: tournament.rankings().into_iter().cloned().collect(),
            matches: tournament.matches().to_vec(),
            app_version: app_version(),
        }
    }

    pub fn app_version(&self) -> [usize; 3] {
        self.app_version
    }
}

#[cfg(test)]
mod tests {
    use super::TournamentSummary;
    use crate::{
        core::{Player, TournamentConfig, TournamentFormat},
        engine::Tournament,
        types::{AppResult, PlayerId},
    };

    #[test]
    fn test_summary_survives_json() -> AppResult<()> {
        let players = (1..=3)
            .map(|i| Player::new(PlayerId::from_u128(i), format!("P{i}")))
            .collect();
        let config = TournamentConfig::new("Summary", TournamentFormat::RoundRobin).with_seed(1);
        let tournament = Tournament::new(config, players)?;

        let summary = TournamentSummary::from_tournament(&tournament);
        assert_eq!(summary.rankings.len(), 3);
        assert_eq!(summary.matches.len(), 3);
        assert!(summary.champion.is_none());

        let json = serde_json::to_string(&summary)?;
        let restored: TournamentSummary = serde_json::from_str(&json)?;
        assert_eq!(restored, summary);
        Ok(())
    }
}
