use std::path::Path;

use crate::error::ConfigError;

/// Grid dimensions and search depth: the only knobs the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub search_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rows: 6,
            cols: 7,
            search_depth: 3,
        }
    }
}

impl EngineConfig {
    /// Build a validated engine configuration.
    pub fn new(rows: usize, cols: usize, search_depth: usize) -> Result<Self, ConfigError> {
        let config = EngineConfig {
            rows,
            cols,
            search_depth,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)?;
        validate_depth(self.search_depth)
    }
}

/// Largest accepted row or column count. Keeps `rows * cols` small and every
/// board coordinate representable in the terminal UI's `u16` layout.
pub const MAX_DIMENSION: usize = 64;

pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    for (name, value) in [("engine.rows", rows), ("engine.cols", cols)] {
        if value == 0 {
            return Err(ConfigError::Validation(format!("{name} must be > 0")));
        }
        if value > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "{name} must be <= {MAX_DIMENSION}, got {value}"
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_depth(depth: usize) -> Result<(), ConfigError> {
    if depth == 0 {
        return Err(ConfigError::Validation(
            "engine.search_depth must be >= 1".into(),
        ));
    }
    Ok(())
}

/// Match settings for the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The human moves first unless this is false.
    pub human_starts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { human_starts: true }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
