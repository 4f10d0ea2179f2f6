//! Draw configuration management
//!
//! Handles loading configuration from a TOML file, `DETRA_*` environment
//! variables and command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

use detra_core::any::UnknownSource;
use detra_core::SourceKind;

/// Largest accepted `count`.
pub const MAX_COUNT: usize = 1_000_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}. Must be between 1 and 1000000")]
    InvalidCount(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output kind: {0}. Must be one of: int, float, bool")]
    InvalidKind(String),

    #[error(transparent)]
    UnknownSource(#[from] UnknownSource),

    #[error("Invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Verbosity accepted by `--log-level` and `DETRA_LOG_LEVEL`.
///
/// Names parse the way [`tracing::Level`] parses them, so `warn`, `WARN` and
/// `3` are all accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct LogLevel(pub Level);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(Level::WARN)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        s.parse()
            .map(LogLevel)
            .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

/// Lowercase, usable directly as an `EnvFilter` directive.
impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_string().to_ascii_lowercase())
    }
}

/// Quantity printed by `detra draw`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputKind {
    /// Raw `randi()` values
    #[default]
    Int,
    /// `randf()` values
    Float,
    /// `randb()` values
    Bool,
}

impl FromStr for OutputKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "i" | "randi" => Ok(OutputKind::Int),
            "float" | "f" | "randf" => Ok(OutputKind::Float),
            "bool" | "b" | "randb" => Ok(OutputKind::Bool),
            _ => Err(ConfigError::InvalidKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputKind::Int => write!(f, "int"),
            OutputKind::Float => write!(f, "float"),
            OutputKind::Bool => write!(f, "bool"),
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    /// Source to draw from
    pub source: SourceKind,
    /// First (or only) seed word
    pub seed: Option<u64>,
    /// Second seed word (xorshift128plus only)
    pub seed2: Option<u64>,
    /// Number of values to draw
    pub count: usize,
    /// Quantity to print
    pub kind: OutputKind,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::XorShift32,
            seed: None,
            seed2: None,
            count: 10,
            kind: OutputKind::Int,
            log_level: LogLevel(Level::WARN),
        }
    }
}

/// Partial configuration: one layer of file, environment or CLI values
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub source: Option<SourceKind>,
    pub seed: Option<u64>,
    pub seed2: Option<u64>,
    pub count: Option<usize>,
    pub kind: Option<OutputKind>,
    pub log_level: Option<LogLevel>,
}

impl ConfigLayer {
    /// Load a layer from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse a layer from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a layer from `DETRA_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load a layer from any key lookup (environment-shaped)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut layer = Self::default();

        if let Some(source) = lookup("DETRA_SOURCE") {
            layer.source = Some(source.parse()?);
        }
        if let Some(seed) = lookup("DETRA_SEED") {
            layer.seed = Some(parse_number("DETRA_SEED", &seed)?);
        }
        if let Some(seed2) = lookup("DETRA_SEED2") {
            layer.seed2 = Some(parse_number("DETRA_SEED2", &seed2)?);
        }
        if let Some(count) = lookup("DETRA_COUNT") {
            layer.count = Some(parse_number("DETRA_COUNT", &count)?);
        }
        if let Some(kind) = lookup("DETRA_KIND") {
            layer.kind = Some(kind.parse()?);
        }
        if let Some(log_level) = lookup("DETRA_LOG_LEVEL") {
            layer.log_level = Some(log_level.parse()?);
        }

        Ok(layer)
    }

    /// Apply this layer over `config` (present values win)
    pub fn apply(&self, config: &mut DrawConfig) {
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(seed2) = self.seed2 {
            config.seed2 = Some(seed2);
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal.
fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + TryFrom<u64>,
{
    let trimmed = value.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16)
            .ok()
            .and_then(|v| T::try_from(v).ok()),
        None => trimmed.replace('_', "").parse::<T>().ok(),
    };
    parsed.ok_or_else(|| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

/// Parse a seed given on the command line (decimal or hex)
pub fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    parse_number("seed", value)
}

impl DrawConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(ConfigError::InvalidCount(self.count));
        }
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(
    config_file: Option<&PathBuf>,
    env: &ConfigLayer,
    cli: &ConfigLayer,
) -> Result<DrawConfig, ConfigError> {
    let mut config = DrawConfig::default();

    if let Some(path) = config_file {
        ConfigLayer::from_file(path)?.apply(&mut config);
    }
    env.apply(&mut config);
    cli.apply(&mut config);

    config.validate()?;
    Ok(config)
}
