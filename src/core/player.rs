use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// A rostered participant and its running record.
///
/// The record only moves through [`Player::win_match`], [`Player::lose_match`]
/// and [`Player::draw_match`], so `matches_played` always equals the sum of
/// wins, losses and draws.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    score: u32,
    matches_played: u32,
    matches_won: u32,
    matches_lost: u32,
    matches_drawn: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            matches_drawn: 0,
        }
    }

    pub fn random_id(name: impl Into<String>) -> Self {
        Self::new(PlayerId::new_v4(), name)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    pub fn matches_won(&self) -> u32 {
        self.matches_won
    }

    pub fn matches_lost(&self) -> u32 {
        self.matches_lost
    }

    pub fn matches_drawn(&self) -> u32 {
        self.matches_drawn
    }

    pub fn win_match(&mut self, points: u32) {
        self.matches_played += 1;
        self.matches_won += 1;
        self.score = self.score.saturating_add(points);
    }

    pub fn lose_match(&mut self, points: u32) {
        self.matches_played += 1;
        self.matches_lost += 1;
        self.score = self.score.saturating_add(points);
    }

    pub fn draw_match(&mut self, points: u32) {
        self.matches_played += 1;
        self.matches_drawn += 1;
        self.score = self.score.saturating_add(points);
    }

    // W-L-D, the usual standings notation.
    pub fn record(&self) -> String {
        format!(
            "{}W-{}L-{}D",
            self.matches_won, self.matches_lost, self.matches_drawn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::types::PlayerId;

    #[test]
    fn test_outcomes_keep_record_consistent() {
        let mut player = Player::new(PlayerId::from_u128(1), "Ada");
        player.win_match(3);
        player.draw_match(1);
        player.lose_match(0);
        player.win_match(3);

        assert_eq!(player.score(), 7);
        assert_eq!(player.matches_played(), 4);
        assert_eq!(
            player.matches_played(),
            player.matches_won() + player.matches_lost() + player.matches_drawn()
        );
        assert_eq!(player.record(), "2W-1L-1D");
    }

    #[test]
    fn test_loss_points_are_still_awarded() {
        let mut player = Player::new(PlayerId::from_u128(2), "Bo");
        player.lose_match(1);
        assert_eq!(player.score(), 1);
        assert_eq!(player.matches_lost(), 1);
    }
}
