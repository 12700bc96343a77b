use crate::{core::TournamentConfig, engine::TournamentSummary, types::AppResult};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

pub static LOG_FILENAME: &str = "tourney.log";

/// Path of `filename` inside the platform config directory, created on demand.
pub fn store_path(filename: &str) -> AppResult<PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "frittura", "tourney")
        .ok_or(anyhow!("Failed to get directories"))?;
    let config_dirs = dirs.config_dir();
    if !config_dirs.exists() {
        std::fs::create_dir_all(config_dirs)?;
    }
    let path = config_dirs.join(filename);
    Ok(path)
}

fn save_to_json<T: Serialize>(path: &Path, data: &T) -> AppResult<()> {
    let file = File::create(path)?;
    let buffer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(buffer, data)?;
    Ok(())
}

fn load_from_json<T: for<'a> Deserialize<'a>>(path: &Path) -> AppResult<T> {
    let file = File::open(path)?;
    let data: T = serde_json::from_reader(file)?;
    Ok(data)
}

pub fn load_config(path: &Path) -> AppResult<TournamentConfig> {
    load_from_json(path)
        .map_err(|err| anyhow!("Failed to load config from {}: {err}", path.display()))
}

pub fn save_config(path: &Path, config: &TournamentConfig) -> AppResult<()> {
    save_to_json(path, config)
}

pub fn save_summary(path: &Path, summary: &TournamentSummary) -> AppResult<()> {
    save_to_json(path, summary)?;
    log::info!("Summary written to {}", path.display());
    Ok(())
}

pub fn load_summary(path: &Path) -> AppResult<TournamentSummary> {
    load_from_json(path)
}

#[cfg(test)]
mod tests {
    use super::{load_config, load_summary, save_config, save_summary};
    use crate::{
        core::{Player, TournamentConfig, TournamentFormat},
        engine::{Tournament, TournamentSummary},
        types::{AppResult, PlayerId},
    };
    use std::path::PathBuf;

    fn temp_path(filename: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tourney_{}_{filename}", std::process::id()))
    }

    #[test]
    fn test_config_file_round_trip() -> AppResult<()> {
        let path = temp_path("config.json");
        let config = TournamentConfig::new("League", TournamentFormat::Swiss)
            .with_seed(12)
            .with_swiss_rounds(7);
        save_config(&path, &config)?;
        assert_eq!(load_config(&path)?, config);
        std::fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn test_missing_config_names_the_path() {
        let path = temp_path("missing.json");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_save_summary() -> AppResult<()> {
        let path = temp_path("summary.json");
        let players = (1..=4)
            .map(|i| Player::new(PlayerId::from_u128(i), format!("P{i}")))
            .collect();
        let config = TournamentConfig::new("Cup", TournamentFormat::DoubleElimination);
        let summary = TournamentSummary::from_tournament(&Tournament::new(config, players)?);

        save_summary(&path, &summary)?;
        assert_eq!(load_summary(&path)?, summary);
        std::fs::remove_file(path)?;
        Ok(())
    }
}
