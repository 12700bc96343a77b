use super::constants::*;
use crate::error::{TournamentError, TournamentResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TournamentFormat {
    #[default]
    RoundRobin,
    SingleElimination,
    DoubleElimination,
    Swiss,
}

impl TournamentFormat {
    pub fn parse(name: &str) -> TournamentResult<Self> {
        Self::from_str(name.trim())
            .map_err(|_| TournamentError::UnsupportedFormat(name.to_string()))
    }

    pub fn is_elimination(&self) -> bool {
        matches!(self, Self::SingleElimination | Self::DoubleElimination)
    }
}

fn default_win_points() -> u32 {
    DEFAULT_WIN_POINTS
}

fn default_draw_points() -> u32 {
    DEFAULT_DRAW_POINTS
}

fn default_swiss_rounds() -> u32 {
    DEFAULT_SWISS_ROUNDS
}

fn default_auto_advance() -> bool {
    true
}

/// Tournament parameters. The tournament keeps its own copy, so changes
/// after construction never reach a running tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub name: String,
    pub format: TournamentFormat,
    #[serde(default = "default_win_points")]
    pub win_points: u32,
    #[serde(default = "default_draw_points")]
    pub draw_points: u32,
    #[serde(default)]
    pub loss_points: u32,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default = "default_swiss_rounds")]
    pub swiss_rounds: u32,
    // When false, finished rounds wait for an explicit advance_round call.
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Tournament".to_string(),
            format: TournamentFormat::default(),
            win_points: DEFAULT_WIN_POINTS,
            draw_points: DEFAULT_DRAW_POINTS,
            loss_points: DEFAULT_LOSS_POINTS,
            random_seed: None,
            swiss_rounds: DEFAULT_SWISS_ROUNDS,
            auto_advance: true,
        }
    }
}

impl TournamentConfig {
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            name: name.into(),
            format,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_points(mut self, win: u32, draw: u32, loss: u32) -> Self {
        self.win_points = win;
        self.draw_points = draw;
        self.loss_points = loss;
        self
    }

    pub fn with_swiss_rounds(mut self, rounds: u32) -> Self {
        self.swiss_rounds = rounds;
        self
    }

    pub fn with_manual_advance(mut self) -> Self {
        self.auto_advance = false;
        self
    }
}
