use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Description used when neither `--description` nor a configured default is
/// given.
pub const DEFAULT_DESCRIPTION: &str = "A custom systemd service";

/// Configuration for unitz, stored in `~/.config/unitz/config.json`.
///
/// Entirely optional: a missing file means defaults, and the tool never
/// writes it on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitzConfig {
    /// Description used for services generated without `--description`
    #[serde(default = "default_description")]
    pub default_description: String,

    /// Override for the directory unit files are written to
    #[serde(default)]
    pub unit_dir: Option<PathBuf>,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Default for UnitzConfig {
    fn default() -> Self {
        Self {
            default_description: DEFAULT_DESCRIPTION.to_string(),
            unit_dir: None,
        }
    }
}

impl UnitzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UnitzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
