//! Layered configuration: built-in defaults, then `config.toml` in the
//! pickfill home, then environment, then command-line overrides.

mod home;

use std::path::Path;
use std::path::PathBuf;

use pickfill_utils_option_parser::DEFAULT_DIRECTIVE_MARKER;
use serde::Deserialize;
use thiserror::Error;

pub use home::PICKFILL_HOME_ENV;
pub use home::find_pickfill_home;

pub const CONFIG_TOML_FILE: &str = "config.toml";

/// Overrides `destination_path` from `config.toml`.
pub const WORKFLOW_PATH_ENV: &str = "PICKFILL_WORKFLOW_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to locate pickfill home: {0}")]
    Home(#[source] std::io::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    /// Path of the destination form, relative to the origin.
    pub destination_path: Option<String>,
    /// Origin (`scheme://host[:port]`) the destination form is served from.
    pub origin: Option<String>,
    /// Line prefix that ends the option-bearing part of a message.
    pub directive_marker: Option<String>,
}

/// Values supplied on the command line; each one wins over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub destination_path: Option<String>,
    pub origin: Option<String>,
    pub directive_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Opaque template; may be empty when nothing configured it.
    pub destination_path: String,
    pub origin: Option<String>,
    pub directive_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination_path: String::new(),
            origin: None,
            directive_marker: DEFAULT_DIRECTIVE_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the pickfill home and the process environment.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let home = find_pickfill_home().map_err(ConfigError::Home)?;
        let env_destination = std::env::var(WORKFLOW_PATH_ENV).ok();
        Self::load_from_home(&home, env_destination, overrides)
    }

    /// Loads configuration from `home`, with `env_destination` standing in for
    /// [`WORKFLOW_PATH_ENV`]. Empty environment values are ignored.
    pub fn load_from_home(
        home: &Path,
        env_destination: Option<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let toml = load_config_toml(&home.join(CONFIG_TOML_FILE))?;
        let env_destination = env_destination.filter(|value| !value.is_empty());
        Ok(Self::from_layers(toml, env_destination, overrides))
    }

    fn from_layers(
        toml: ConfigToml,
        env_destination: Option<String>,
        overrides: ConfigOverrides,
    ) -> Self {
        let defaults = Config::default();
        let destination_path = overrides
            .destination_path
            .or(env_destination)
            .or(toml.destination_path)
            .unwrap_or(defaults.destination_path);
        if destination_path.is_empty() {
            tracing::warn!(
                "no destination path configured; set `destination_path` in {CONFIG_TOML_FILE} or {WORKFLOW_PATH_ENV}"
            );
        }
        Self {
            destination_path,
            origin: overrides.origin.or(toml.origin),
            directive_marker: overrides
                .directive_marker
                .or(toml.directive_marker)
                .unwrap_or(defaults.directive_marker),
        }
    }
}

/// Reads `config.toml`; a missing file yields the defaults.
pub fn load_config_toml(path: &Path) -> Result<ConfigToml, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(ConfigToml::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
