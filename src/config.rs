use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Deepest heading markdown renders.
pub const MAX_HEADING_LEVEL: u8 = 6;

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertConfig {
    pub indent_width: usize,
    pub max_level: u8,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            max_level: MAX_HEADING_LEVEL,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("convert.indent_width must be at least 1")]
    ZeroIndentWidth,

    #[error("convert.max_level must be between 1 and 6, got {0}")]
    MaxLevelOutOfRange(u8),
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read config from a file the user asked for, reporting any problem.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::compiled_default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config");
                Self::compiled_default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.convert.indent_width == 0 {
            return Err(ConfigError::ZeroIndentWidth);
        }
        if !(1..=MAX_HEADING_LEVEL).contains(&self.convert.max_level) {
            return Err(ConfigError::MaxLevelOutOfRange(self.convert.max_level));
        }
        Ok(())
    }
}
