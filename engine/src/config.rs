use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use mega_types::{NumRows, Number, Operand};

use crate::driver::RunSettings;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MEGA_CONFIG";

/// Largest accepted `round.num_rows`; the sample matrix holds N² cells.
pub const MAX_NUM_ROWS: usize = 1024;

/// Largest accepted `solve.precision`. An `f64` carries at most 17
/// significant decimal digits.
pub const MAX_PRECISION: usize = 17;

/// Optional overrides for the demonstration run.
///
/// ```toml
/// [round]
/// num_rows = 3
///
/// [solve]
/// operands = [1, 2, -3, 4.25, 5.75]
/// precision = 2
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MegaConfig {
    pub round: Option<RoundConfig>,
    pub solve: Option<SolveConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoundConfig {
    /// Matrix dimension. Must be between 1 and [`MAX_NUM_ROWS`].
    pub num_rows: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SolveConfig {
    /// Exactly five numbers; integers stay integral until a float joins.
    pub operands: Option<Vec<Number>>,
    /// Decimal places for the printed result, at most [`MAX_PRECISION`].
    pub precision: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl MegaConfig {
    /// Load from [`config_path`]. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve against the fixture defaults.
    pub fn settings(&self) -> Result<RunSettings, ConfigError> {
        let mut settings = RunSettings::default();

        if let Some(num_rows) = self.round.as_ref().and_then(|round| round.num_rows) {
            if num_rows == 0 {
                return Err(ConfigError::Invalid {
                    field: "round.num_rows",
                    reason: "must be at least 1".to_string(),
                });
            }
            if num_rows > MAX_NUM_ROWS {
                return Err(ConfigError::Invalid {
                    field: "round.num_rows",
                    reason: format!("must be at most {MAX_NUM_ROWS}, got {num_rows}"),
                });
            }
            settings.num_rows = NumRows::new(num_rows);
        }

        if let Some(solve) = &self.solve {
            if let Some(operands) = &solve.operands {
                let operands: [Number; 5] =
                    operands
                        .clone()
                        .try_into()
                        .map_err(|values: Vec<Number>| ConfigError::Invalid {
                            field: "solve.operands",
                            reason: format!("expected 5 values, got {}", values.len()),
                        })?;
                settings.operands = operands.map(Operand::from);
            }
            if let Some(precision) = solve.precision {
                if precision > MAX_PRECISION {
                    return Err(ConfigError::Invalid {
                        field: "solve.precision",
                        reason: format!("must be at most {MAX_PRECISION}, got {precision}"),
                    });
                }
                settings.precision = precision;
            }
        }

        Ok(settings)
    }
}

/// `$MEGA_CONFIG` if set, else `~/.mega/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".mega").join("config.toml"))
}
