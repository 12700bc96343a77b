use crate::{
    core::Match,
    engine::Tournament,
    types::{PlayerId, Round},
};
use itertools::Itertools;

const NAME_WIDTH: usize = 20;

fn player_name(tournament: &Tournament, player_id: PlayerId) -> &str {
    tournament
        .player(player_id)
        .map(|player| player.name.as_str())
        .unwrap_or("?")
}

fn describe_match(tournament: &Tournament, game: &Match) -> String {
    let player1 = player_name(tournament, game.player1);
    let player2 = player_name(tournament, game.player2);
    let result = if !game.is_completed() {
        "pending".to_string()
    } else if game.is_draw() {
        "draw".to_string()
    } else {
        game.winner()
            .map(|winner| format!("{} wins", player_name(tournament, winner)))
            .unwrap_or_default()
    };

    format!(
        "#{:<4} {player1:>width$} vs {player2:<width$} {result}",
        game.id,
        width = NAME_WIDTH
    )
}

/// One line per match of `round`.
pub fn round_table(tournament: &Tournament, round: Round) -> String {
    let mut out = format!("Round {round}\n");
    for game in tournament.schedule().round_matches(round) {
        out.push_str(&format!("  {}\n", describe_match(tournament, game)));
    }
    out
}

/// Every round played so far, in order.
pub fn rounds_table(tournament: &Tournament) -> String {
    tournament
        .matches()
        .iter()
        .map(|game| game.round)
        .unique()
        .sorted()
        .map(|round| round_table(tournament, round))
        .join("\n")
}

pub fn standings_table(tournament: &Tournament) -> String {
    let mut out = format!(
        "{:>4} {:<width$} {:>6} {:>5} {:>12}\n",
        "#",
        "Player",
        "Score",
        "Games",
        "Record",
        width = NAME_WIDTH
    );
    for (position, player) in tournament.rankings().into_iter().enumerate() {
        out.push_str(&format!(
            "{:>4} {:<width$} {:>6} {:>5} {:>12}\n",
            position + 1,
            player.name,
            player.score(),
            player.matches_played(),
            player.record(),
            width = NAME_WIDTH
        ));
    }

    match tournament.champion() {
        Some(champion) => out.push_str(&format!("\nChampion: {}\n", champion.name)),
        None if !tournament.is_completed() => out.push_str(&format!(
            "\nIn progress, round {}\n",
            tournament.current_round()
        )),
        None => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{round_table, rounds_table, standings_table};
    use crate::{
        core::{MatchOutcome, Player, TournamentConfig, TournamentFormat},
        engine::Tournament,
        types::{AppResult, PlayerId},
    };

    fn tournament() -> AppResult<Tournament> {
        let players = ["Ada", "Brian", "Carla", "Dmitri"]
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::from_u128(i as u128 + 1), *name))
            .collect();
        let config = TournamentConfig::new("Report", TournamentFormat::SingleElimination)
            .with_seed(0);
        Ok(Tournament::new(config, players)?)
    }

    #[test]
    fn test_round_table_lists_matches() -> AppResult<()> {
        let mut tournament = tournament()?;
        let game = tournament.current_round_matches()[0].clone();
        tournament.record_result(game.id, MatchOutcome::Winner(game.player1))?;

        let table = round_table(&tournament, 1);
        assert!(table.starts_with("Round 1"));
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("wins"));
        assert!(table.contains("pending"));
        Ok(())
    }

    #[test]
    fn test_standings_name_the_champion() -> AppResult<()> {
        let mut tournament = tournament()?;
        loop {
            let Some(game) = tournament.upcoming_matches().first().map(|g| (*g).clone()) else {
                break;
            };
            tournament.record_result(game.id, MatchOutcome::Winner(game.player2))?;
        }

        let champion = tournament.champion().map(|p| p.name.clone()).unwrap_or_default();
        let standings = standings_table(&tournament);
        assert!(standings.contains(&format!("Champion: {champion}")));
        assert!(standings.contains("2W-0L-0D"));
        assert_eq!(rounds_table(&tournament).matches("Round").count(), 2);
        Ok(())
    }
}
