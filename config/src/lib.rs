//! Configuration for Summit.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Built-in defaults (linear strategy, trust the precondition, no tracing)
//! 2. `~/.summit/config.toml`
//! 3. `SUMMIT_STRATEGY` / `SUMMIT_PRECONDITION` environment variables
//!
//! Command-line flags sit on top of all three and are applied by the binary.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use summit_types::{PreconditionPolicy, RunMode};

pub const STRATEGY_ENV: &str = "SUMMIT_STRATEGY";
pub const PRECONDITION_ENV: &str = "SUMMIT_PRECONDITION";

#[derive(Debug, Default, Deserialize)]
pub struct SummitConfig {
    pub search: Option<SearchConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchConfig {
    /// `linear`, `binary`, or `both`.
    pub strategy: Option<String>,
    /// `assume` or `verify`.
    pub precondition: Option<String>,
    /// Emit one debug event per binary-search probe.
    #[serde(default)]
    pub trace: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path.as_path(),
        }
    }
}

/// Fully resolved search settings. Every field has a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSettings {
    pub mode: RunMode,
    pub policy: PreconditionPolicy,
    pub trace: bool,
}

impl SummitConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

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
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Resolve against the process environment.
    #[must_use]
    pub fn resolve(&self) -> SearchSettings {
        self.resolve_with(|name| env::var(name).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    ///
    /// Unknown values are logged and skipped, leaving the lower layer in place.
    #[must_use]
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> SearchSettings {
        let mut settings = SearchSettings::default();

        if let Some(search) = &self.search {
            settings.trace = search.trace;
            if let Some(raw) = &search.strategy {
                apply_mode(&mut settings, &expand_env_vars_with(raw, &lookup), "config");
            }
            if let Some(raw) = &search.precondition {
                apply_policy(&mut settings, &expand_env_vars_with(raw, &lookup), "config");
            }
        }

        if let Some(raw) = lookup(STRATEGY_ENV) {
            apply_mode(&mut settings, &raw, STRATEGY_ENV);
        }
        if let Some(raw) = lookup(PRECONDITION_ENV) {
            apply_policy(&mut settings, &raw, PRECONDITION_ENV);
        }

        settings
    }

    /// Log filter directive from `[log] filter`, with `${VAR}` expanded.
    #[must_use]
    pub fn log_filter(&self) -> Option<String> {
        self.log
            .as_ref()
            .and_then(|log| log.filter.as_deref())
            .map(expand_env_vars)
            .filter(|filter| !filter.trim().is_empty())
    }
}

fn apply_mode(settings: &mut SearchSettings, raw: &str, source: &str) {
    match RunMode::parse(raw) {
        Some(mode) => settings.mode = mode,
        None => tracing::warn!(source, value = raw, "Ignoring unknown search strategy"),
    }
}

fn apply_policy(settings: &mut SearchSettings, raw: &str, source: &str) {
    match PreconditionPolicy::parse(raw) {
        Some(policy) => settings.policy = policy,
        None => tracing::warn!(source, value = raw, "Ignoring unknown precondition policy"),
    }
}

pub fn expand_env_vars(value: &str) -> String {
    expand_env_vars_with(value, |name| env::var(name).ok())
}

/// Replace every `${NAME}` with `lookup(NAME)`, or nothing when unset.
/// An unclosed `${` is kept verbatim.
pub fn expand_env_vars_with(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < value.len() {
        if value[i..].starts_with("${") {
            let start = i + 2;
            if let Some(end_rel) = value[start..].find('}') {
                let end = start + end_rel;
                let var = &value[start..end];
                if !var.is_empty() {
                    out.push_str(&lookup(var).unwrap_or_default());
                }
                i = end + 1;
                continue;
            }
        }

        let Some(ch) = value[i..].chars().next() else {
            break;
        };
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".summit").join("config.toml"))
}
