//! Seed file loader
//! Reads teams to register at start-up from a YAML or TOML file

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::database::models::Team;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedFile {
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl SeedFile {
    /// Load a seed file; the format follows the extension (`.toml`, otherwise YAML)
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading seed teams from: {:?}", path);

        if !path.exists() {
            return Err(ConfigError::SeedFileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let seed: SeedFile = if is_toml {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        seed.validate()?;
        info!("Loaded {} seed team(s)", seed.teams.len());
        Ok(seed)
    }

    /// Team names must be non-empty and unique within the file
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();

        for team in &self.teams {
            if team.team_name.trim().is_empty() {
                return Err(ConfigError::InvalidSeed("team with empty team_name".to_string()));
            }
            if !names.insert(team.team_name.as_str()) {
                return Err(ConfigError::InvalidSeed(format!(
                    "team {} listed more than once",
                    team.team_name
                )));
            }
            if let Some(member) = team.members.iter().find(|m| m.user_id.trim().is_empty()) {
                return Err(ConfigError::InvalidSeed(format!(
                    "member {:?} of team {} has an empty user_id",
                    member.username, team.team_name
                )));
            }
        }

        Ok(())
    }
}
