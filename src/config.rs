use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "TASKBOARD_DIR";

/// Name of the config file looked up in the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timers: TimersConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimersConfig {
    /// Event loop poll interval
    pub tick_ms: u64,
    /// Inactivity before the typing indicator clears
    pub typing_idle_ms: u64,
    /// How long a deleted task can be restored
    pub undo_window_ms: u64,
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            typing_idle_ms: 1000,
            undo_window_ms: 5000,
        }
    }
}

impl TimersConfig {
    pub fn typing_idle(&self) -> Duration {
        Duration::from_millis(self.typing_idle_ms)
    }

    pub fn undo_window(&self) -> Duration {
        Duration::from_millis(self.undo_window_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Replaces the terminal's ambient preference when nothing is stored yet
    pub dark_mode: Option<bool>,
}

impl Config {
    /// Load config from an explicit path, or from config.toml in the data directory.
    ///
    /// A missing file yields defaults; a file that exists but does not parse is an error.
    pub fn load(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => data_dir.join(CONFIG_FILE),
        };

        if !path.exists() {
            if explicit.is_some() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Resolve the data directory: flag, then environment, then the platform data dir.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    dirs::data_local_dir()
        .map(|d| d.join("taskboard"))
        .unwrap_or_else(|| PathBuf::from(".taskboard"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timers.tick_ms, 250);
        assert_eq!(config.timers.typing_idle(), Duration::from_secs(1));
        assert_eq!(config.timers.undo_window(), Duration::from_secs(5));
        assert_eq!(config.theme.dark_mode, None);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(
            r#"
            [timers]
            undo_window_ms = 8000

            [theme]
            dark_mode = true
            "#,
        )
        .unwrap();

        assert_eq!(config.timers.undo_window_ms, 8000);
        assert_eq!(config.timers.typing_idle_ms, 1000);
        assert_eq!(config.theme.dark_mode, Some(true));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("[timers]\ntick_ms = \"fast\"").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(missing.as_path()), dir.path()).is_err());
    }

    #[test]
    fn test_load_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[timers]\ntick_ms = 100\n").unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.timers.tick_ms, 100);
    }

    #[test]
    fn test_resolve_data_dir_flag_then_env() {
        // Only test touching TASKBOARD_DIR
        std::env::set_var(DATA_DIR_ENV, "/tmp/from-env");
        let flag = PathBuf::from("/tmp/board");
        assert_eq!(resolve_data_dir(Some(flag.as_path())), flag);
        assert_eq!(resolve_data_dir(None), PathBuf::from("/tmp/from-env"));

        // Blank value falls through to the platform directory
        std::env::set_var(DATA_DIR_ENV, "  ");
        let fallback = resolve_data_dir(None);
        assert_ne!(fallback, PathBuf::from("  "));
        assert!(fallback.ends_with("taskboard") || fallback.ends_with(".taskboard"));

        std::env::remove_var(DATA_DIR_ENV);
    }
}
