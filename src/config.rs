use anyhow::{Context, Result};
use serde::Deserialize;
use std::env::{self, VarError};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    /// Fixed RNG seed; rolls are reproducible when set
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            seed: parse_seed(env::var("BOGGLE_SEED"))?,
        };

        Ok(Config { game })
    }

    pub fn dictionary_path(&self) -> &str {
        &self.game.dictionary_path
    }
}

/// An unset seed means unseeded; anything set must be a valid number
fn parse_seed(raw: std::result::Result<String, VarError>) -> Result<Option<u64>> {
    match raw {
        Ok(raw) => Ok(Some(
            raw.trim()
                .parse::<u64>()
                .context("BOGGLE_SEED must be an unsigned number")?,
        )),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).context("BOGGLE_SEED must be valid unicode"),
    }
}
