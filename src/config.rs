//! Shell configuration.
//!
//! The resolver reads no configuration; these settings only shape the shell
//! around it. Values come from an optional TOML file, then environment
//! overrides.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | IVOLA_ROLE | educator | Role used when a command does not pass `--role`. |
//! | IVOLA_TRANSCRIPTION_DELAY_MS | 1500 | Delay before a simulated transcription completes. |
//! | IVOLA_LOG | warn | `tracing` filter directive for the shell (read by the binary). |

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::role::Role;

/// Environment variable overriding [`IvolaConfig::default_role`].
pub const ENV_ROLE: &str = "IVOLA_ROLE";
/// Environment variable overriding [`IvolaConfig::transcription_delay_ms`].
pub const ENV_TRANSCRIPTION_DELAY_MS: &str = "IVOLA_TRANSCRIPTION_DELAY_MS";
/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "IVOLA_LOG";

fn default_transcription_delay_ms() -> u64 {
    1500
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Settings for the `ivola` shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IvolaConfig {
    /// Role selected when none is given.
    #[serde(default)]
    pub default_role: Role,

    /// Milliseconds a simulated transcription takes.
    #[serde(default = "default_transcription_delay_ms")]
    pub transcription_delay_ms: u64,

    /// `tracing` filter used when `IVOLA_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for IvolaConfig {
    fn default() -> Self {
        Self {
            default_role: Role::default(),
            transcription_delay_ms: default_transcription_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl IvolaConfig {
    /// Parse TOML text.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Load from `path` if given (defaults otherwise), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (normally the process environment).
    ///
    /// Unset or blank variables keep the current value; invalid values are errors.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(ENV_ROLE) {
            self.default_role = raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: ENV_ROLE.to_string(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(raw) = get(ENV_TRANSCRIPTION_DELAY_MS) {
            self.transcription_delay_ms =
                raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                    key: ENV_TRANSCRIPTION_DELAY_MS.to_string(),
                    reason: format!("expected milliseconds: {e}"),
                })?;
        }

        Ok(self)
    }

    /// Transcription delay as a [`Duration`].
    #[must_use]
    pub const fn transcription_delay(&self) -> Duration {
        Duration::from_millis(self.transcription_delay_ms)
    }
}
