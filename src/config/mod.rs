pub mod loader;

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub use loader::SeedFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Fixed seed for reviewer selection; entropy-seeded when absent.
    pub rng_seed: Option<u64>,
    /// Teams registered at start-up.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            rng_seed: None,
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `load` reads the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => parse_value("SERVER_PORT", &raw)?,
            None => defaults.server_port,
        };

        let rng_seed: Option<u64> = lookup("RNG_SEED")
            .map(|raw| parse_value("RNG_SEED", &raw))
            .transpose()?;

        let seed_file = lookup("SEED_FILE")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(AppConfig {
            server_host,
            server_port,
            rng_seed,
            seed_file,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("{:?}: {}", raw, e),
    })
}
