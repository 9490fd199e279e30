//! Configuration loading for conform.
//!
//! A `conform.toml` holds verification options and, optionally, interface
//! manifests so contracts can be declared next to the code that checks them:
//!
//! ```toml
//! [verify]
//! max_depth = 32
//! mode = "collect-all"
//!
//! [[interfaces]]
//! name = "Drawable"
//! methods = [{ name = "draw", args = ["number", "number"], returns = "void" }]
//! ```
//!
//! Raw TOML structs stay private. They are resolved into [`VerifyOptions`]
//! and [`InterfaceDefinition`]s at the parse boundary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use conform_core::{ConformanceChecker, VerifyMode, VerifyOptions};
use conform_types::InterfaceDefinition;

pub const CONFIG_FILE_NAME: &str = "conform.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    verify: Option<RawVerify>,
    #[serde(default)]
    interfaces: Vec<InterfaceDefinition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVerify {
    max_depth: Option<usize>,
    mode: Option<RawMode>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawMode {
    FailFast,
    CollectAll,
}

impl From<RawMode> for VerifyMode {
    fn from(mode: RawMode) -> Self {
        match mode {
            RawMode::FailFast => VerifyMode::FailFast,
            RawMode::CollectAll => VerifyMode::CollectAll,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config{}: {source}", origin(path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config{}: {message}", origin(path.as_deref()))]
    Invalid {
        path: Option<PathBuf>,
        message: String,
    },
    #[error("no interface named {0:?} in config")]
    UnknownInterface(String),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } => Some(path),
            ConfigError::Parse { path, .. } | ConfigError::Invalid { path, .. } => path.as_deref(),
            ConfigError::UnknownInterface(_) => None,
        }
    }
}

fn origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Resolved configuration: options plus declared interfaces.
#[derive(Debug, Clone, Default)]
pub struct ConformConfig {
    options: VerifyOptions,
    interfaces: Vec<InterfaceDefinition>,
    path: Option<PathBuf>,
}

impl ConformConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_from(content, None)
    }

    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };
        Self::parse_from(&content, Some(path))
    }

    /// Load `conform.toml` from `dir` if it exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!("No config at {:?}", path);
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    fn parse_from(content: &str, path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let raw: RawConfig = match toml::from_str(content) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse { path, source: err });
            }
        };

        let verify = raw.verify.unwrap_or_default();
        let mut options = VerifyOptions::default();
        if let Some(max_depth) = verify.max_depth {
            if max_depth == 0 {
                return Err(ConfigError::Invalid {
                    path,
                    message: "verify.max_depth must be at least 1".to_string(),
                });
            }
            options = options.with_max_depth(max_depth);
        }
        if let Some(mode) = verify.mode {
            options = options.with_mode(mode.into());
        }

        tracing::debug!(
            max_depth = options.max_depth(),
            mode = options.mode().as_str(),
            interfaces = raw.interfaces.len(),
            "Loaded conform config"
        );

        Ok(Self {
            options,
            interfaces: raw.interfaces,
            path,
        })
    }

    #[must_use]
    pub fn verify_options(&self) -> VerifyOptions {
        self.options
    }

    #[must_use]
    pub fn checker(&self) -> ConformanceChecker {
        ConformanceChecker::new(self.options)
    }

    #[must_use]
    pub fn interfaces(&self) -> &[InterfaceDefinition] {
        &self.interfaces
    }

    /// First interface declared under `name`.
    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&InterfaceDefinition> {
        self.interfaces.iter().find(|iface| iface.name() == name)
    }

    /// Clone the named interfaces, in the order asked for.
    pub fn select(&self, names: &[&str]) -> Result<Vec<InterfaceDefinition>, ConfigError> {
        names
            .iter()
            .map(|name| {
                self.interface(name)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownInterface((*name).to_string()))
            })
            .collect()
    }

    /// File the config was loaded from; `None` for parsed strings and defaults.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
