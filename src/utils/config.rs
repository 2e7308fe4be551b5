// src/utils/config.rs
use std::path::PathBuf;
use crate::extractors::section::normalize_version;

/// Environment variable holding the release version. Takes precedence over the CLI argument.
pub const VERSION_ENV: &str = "VERSION";

/// Changelog read when neither `--changelog-path` nor `CHANGELOG_PATH` is given.
pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Resolved runtime settings for one extraction run.
#[derive(Debug, Clone)]
pub struct Config {
    pub version: String,
    pub changelog_path: PathBuf,
}

impl Config {
    /// Builds the config, reading `VERSION` from the process environment.
    pub fn from_env(arg_version: Option<&str>, changelog_path: PathBuf) -> Self {
        let env_version = std::env::var(VERSION_ENV).ok();
        if env_version.as_deref().is_some_and(|v| !v.is_empty()) {
            tracing::debug!("Using version from {} environment variable", VERSION_ENV);
        }

        Self {
            version: resolve_version(env_version.as_deref(), arg_version),
            changelog_path,
        }
    }
}

/// Picks the version from the env value if non-empty, otherwise the CLI argument.
/// A leading `v` is stripped from whichever source wins.
pub fn resolve_version(env_version: Option<&str>, arg_version: Option<&str>) -> String {
    let raw = match env_version {
        Some(v) if !v.is_empty() => v,
        _ => arg_version.unwrap_or(""),
    };
    normalize_version(raw).to_string()
}
