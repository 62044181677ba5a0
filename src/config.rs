// Session configuration loaded from a RON file

use crate::history::manager::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "CART_HISTORY_CONFIG";

/// File name looked up under the user config directory
const CONFIG_FILE_NAME: &str = "config.ron";

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] ron::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Settings for one cart session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of snapshots kept for undo
    pub history_capacity: usize,

    /// Print the cart total after every command in the shell
    pub show_totals: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            show_totals: true,
        }
    }
}

impl SessionConfig {
    /// Parse a config from RON text and validate it
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Write the config as pretty RON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity < 1 {
            return Err(ConfigError::Validation(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the config for a run
    ///
    /// Order: explicit path, then `CART_HISTORY_CONFIG`, then
    /// `<config dir>/cart_history/config.ron` if it exists, then defaults.
    /// An explicitly named file that fails to load is an error; a missing
    /// default file is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_from(
            explicit,
            std::env::var_os(CONFIG_ENV_VAR),
            default_config_path(),
        )
    }

    /// [`SessionConfig::resolve`] with the env value and default path given
    fn resolve_from(
        explicit: Option<&Path>,
        env_path: Option<OsString>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = env_path {
            return Self::load(Path::new(&path));
        }

        match default_path {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<config dir>/cart_history/config.ron`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cart_history").join(CONFIG_FILE_NAME))
}
