use crate::{
    core::{Player, TournamentConfig, TournamentFormat},
    store::load_config,
    types::AppResult,
};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "tourney", about = "Multi-round tournament simulator", author, version, long_about = None)]
pub struct AppArgs {
    #[clap(long, short = 'c', action=ArgAction::Set, help = "Load tournament config from a json file")]
    pub config: Option<PathBuf>,
    #[clap(long, short = 'f', action=ArgAction::Set, help = "Tournament format (round_robin, single_elimination, double_elimination, swiss)")]
    pub format: Option<String>,
    #[clap(long, short = 'n', action=ArgAction::Set, help = "Set tournament name")]
    pub name: Option<String>,
    #[clap(long, short = 'p', action=ArgAction::Set, default_value_t = 8, help = "Number of players")]
    pub players: usize,
    #[clap(long, short = 's', action=ArgAction::Set, help = "Set random seed for pairings and results")]
    pub seed: Option<u64>,
    #[clap(long, action=ArgAction::Set, help = "Points for a win")]
    pub win_points: Option<u32>,
    #[clap(long, action=ArgAction::Set, help = "Points for a draw")]
    pub draw_points: Option<u32>,
    #[clap(long, action=ArgAction::Set, help = "Points for a loss")]
    pub loss_points: Option<u32>,
    #[clap(long, action=ArgAction::Set, help = "Number of swiss rounds")]
    pub swiss_rounds: Option<u32>,
    #[clap(long, short = 'm', action=ArgAction::SetTrue, help = "Advance rounds explicitly instead of automatically")]
    pub manual: bool,
    #[clap(long, short = 'o', action=ArgAction::Set, help = "Write a json summary to this file")]
    pub output: Option<PathBuf>,
    #[clap(long, action=ArgAction::SetTrue, help = "Print the summary as json instead of tables")]
    pub json: bool,
    #[clap(long, short = 'l', action=ArgAction::Set, default_value_t = LevelFilter::Info, help = "Set log level")]
    pub log_level: LevelFilter,
}

impl AppArgs {
    pub fn test() -> Self {
        Self {
            config: None,
            format: None,
            name: None,
            players: 8,
            seed: Some(0),
            win_points: None,
            draw_points: None,
            loss_points: None,
            swiss_rounds: None,
            manual: false,
            output: None,
            json: false,
            log_level: LevelFilter::Info,
        }
    }

    /// The config file, if any, with command line values on top.
    pub fn tournament_config(&self) -> AppResult<TournamentConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => load_config(path)?,
            None => TournamentConfig::default(),
        };

        if let Some(format) = self.format.as_ref() {
            config.format = TournamentFormat::parse(format)?;
        }
        if let Some(name) = self.name.as_ref() {
            config.name = name.clone();
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        if let Some(points) = self.win_points {
            config.win_points = points;
        }
        if let Some(points) = self.draw_points {
            config.draw_points = points;
        }
        if let Some(points) = self.loss_points {
            config.loss_points = points;
        }
        if let Some(rounds) = self.swiss_rounds {
            config.swiss_rounds = rounds;
        }
        if self.manual {
            config.auto_advance = false;
        }

        Ok(config)
    }

    pub fn roster(&self) -> Vec<Player> {
        (1..=self.players)
            .map(|i| Player::random_id(format!("Player {i}")))
            .collect()
    }
}
