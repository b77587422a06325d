//! Configuration - parameter limits and the consistency rule
//!
//! Layers, later wins per key:
//! 1. built-in defaults
//! 2. user config (`<config dir>/pft/config.yaml`)
//! 3. project config (`./.pft.yaml`)
//! 4. explicit file (`--config` / `PFT_CONFIG`)

use directories::ProjectDirs;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::bounded::BoundedValue;
use crate::core::error::ParameterError;
use crate::core::frame::{ConsistencyRule, FrameParameters, ParameterName};
use crate::yaml::{parse_yaml_file, YamlError};

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = ".pft.yaml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    #[diagnostic(code(pft::config::not_found))]
    NotFound(PathBuf),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Invalid limits for {parameter}: {error}")]
    #[diagnostic(
        code(pft::config::limits),
        help("each limit needs min <= default <= max")
    )]
    Limits {
        parameter: ParameterName,
        error: ParameterError,
    },
}

/// Allowed range and starting value of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub default: f64,
    pub max: f64,
}

impl Limit {
    pub const fn new(min: f64, default: f64, max: f64) -> Self {
        Self { min, default, max }
    }

    /// Declare the bounded value this limit describes
    pub fn to_bounded(&self) -> Result<BoundedValue, ParameterError> {
        BoundedValue::new(self.min, self.default, self.max)
    }
}

/// Limits for all five parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub outer_width: Limit,
    pub outer_length: Limit,
    pub outer_height: Limit,
    pub inner_height: Limit,
    pub interval: Limit,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            outer_width: Limit::new(10.0, 100.0, 100.0),
            outer_length: Limit::new(10.0, 100.0, 100.0),
            outer_height: Limit::new(1.0, 5.0, 10.0),
            inner_height: Limit::new(1.0, 5.0, 10.0),
            interval: Limit::new(1.0, 5.0, 6.0),
        }
    }
}

impl Limits {
    pub fn get(&self, name: ParameterName) -> &Limit {
        match name {
            ParameterName::OuterWidth => &self.outer_width,
            ParameterName::OuterLength => &self.outer_length,
            ParameterName::OuterHeight => &self.outer_height,
            ParameterName::InnerHeight => &self.inner_height,
            ParameterName::Interval => &self.interval,
        }
    }

    fn get_mut(&mut self, name: ParameterName) -> &mut Limit {
        match name {
            ParameterName::OuterWidth => &mut self.outer_width,
            ParameterName::OuterLength => &mut self.outer_length,
            ParameterName::OuterHeight => &mut self.outer_height,
            ParameterName::InnerHeight => &mut self.inner_height,
            ParameterName::Interval => &mut self.interval,
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub rule: ConsistencyRule,
    pub limits: Limits,
}

/// One config file as written on disk; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    rule: Option<ConsistencyRule>,

    #[serde(default)]
    limits: BTreeMap<ParameterName, Limit>,
}

impl Config {
    /// Load configuration from all standard locations plus an optional explicit file
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut paths = Vec::new();
        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                paths.push(global);
            }
        }

        let local = PathBuf::from(PROJECT_CONFIG_FILE);
        if local.exists() {
            paths.push(local);
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            paths.push(path.to_path_buf());
        }

        Self::load_from(&paths)
    }

    /// Merge the given files over the built-in defaults, in order
    pub fn load_from(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in paths {
            info!(path = %path.display(), "loading config");
            let layer: ConfigLayer = parse_yaml_file(path)?;
            config.merge(layer);
        }

        config.check_limits()?;
        Ok(config)
    }

    /// User-level config file location, if the platform has a config dir
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pft").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(rule) = layer.rule {
            self.rule = rule;
        }
        for (name, limit) in layer.limits {
            debug!(parameter = %name, min = limit.min, default = limit.default, max = limit.max, "limit override");
            *self.limits.get_mut(name) = limit;
        }
    }

    fn check_limits(&self) -> Result<(), ConfigError> {
        for name in ParameterName::ALL {
            self.limits
                .get(name)
                .to_bounded()
                .map_err(|error| ConfigError::Limits {
                    parameter: name,
                    error,
                })?;
        }
        Ok(())
    }

    /// Build a fresh parameter set at the configured defaults
    pub fn frame_parameters(&self) -> Result<FrameParameters, ConfigError> {
        let bounded = |name: ParameterName| {
            self.limits
                .get(name)
                .to_bounded()
                .map_err(|error| ConfigError::Limits {
                    parameter: name,
                    error,
                })
        };

        let frame = FrameParameters::new(
            bounded(ParameterName::OuterWidth)?,
            bounded(ParameterName::OuterHeight)?,
            bounded(ParameterName::OuterLength)?,
            bounded(ParameterName::InnerHeight)?,
            bounded(ParameterName::Interval)?,
        );

        Ok(frame.with_rule(self.rule))
    }
}
