//! Runtime configuration from the environment.
//!
//! The game takes no command-line flags. Two optional variables are read:
//!
//! - `TUI_2048_LOG`: write logs to this file (otherwise logging is off)
//! - `TUI_2048_SEED`: fixed RNG seed for a reproducible game

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const LOG_ENV: &str = "TUI_2048_LOG";
pub const SEED_ENV: &str = "TUI_2048_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_file: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_file = get(LOG_ENV).map(PathBuf::from);
        let seed = match get(SEED_ENV) {
            Some(v) => Some(
                v.trim()
                    .parse::<u64>()
                    .map_err(|_| anyhow!("{}: invalid seed value: {}", SEED_ENV, v))?,
            ),
            None => None,
        };

        Ok(Self { log_file, seed })
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
