use crate::model::LanguageTag;
use crate::services::ClipboardBackend;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language preferred for pages that don't name a default
    pub default_language: LanguageTag,
    /// How long the "Copied" indicator stays up
    pub copy_feedback_ms: u64,
    /// Event poll timeout; also the resolution of time-based updates
    pub tick_rate_ms: u64,
    /// Draw the decorative container around code blocks
    pub show_container: bool,
    pub show_splash: bool,
    pub clipboard: ClipboardBackend,
    /// Extra catalog files or directories, merged over the built-in catalog
    pub catalog_paths: Vec<String>,
    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: LanguageTag::Cpp,
            copy_feedback_ms: 2000,
            tick_rate_ms: 100,
            show_container: true,
            show_splash: true,
            clipboard: ClipboardBackend::Auto,
            catalog_paths: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

/// Config resolved at startup, with where UI changes may be written back
#[derive(Debug)]
pub struct StartupConfig {
    pub config: Config,
    /// None when the file on disk could not be read; it is never overwritten then
    pub save_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".algocode-tui"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from `path`, falling back to defaults
    ///
    /// A missing file is not an error and may be created later. An
    /// unreadable or malformed file is reported and left alone: the
    /// returned `save_path` is None so the user's file survives until they
    /// fix it.
    pub fn startup(path: Option<PathBuf>) -> StartupConfig {
        let Some(path) = path else {
            return StartupConfig {
                config: Config::default(),
                save_path: None,
                error: None,
            };
        };

        match Self::load_from(&path) {
            Ok(config) => StartupConfig {
                config: config.unwrap_or_default(),
                save_path: Some(path),
                error: None,
            },
            Err(e) => StartupConfig {
                config: Config::default(),
                save_path: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Option<Config>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(Some(config))
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        // A zero timeout would turn the event loop into a busy spin
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_language, LanguageTag::Cpp);
        assert_eq!(config.copy_feedback(), Duration::from_millis(2000));
        assert!(config.show_container);
        assert_eq!(config.clipboard, ClipboardBackend::Auto);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "default_language": "python", "clipboard": "osc52" }"#).unwrap();
        assert_eq!(config.default_language, LanguageTag::Python);
        assert_eq!(config.clipboard, ClipboardBackend::Osc52);
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            catalog_paths: vec!["~/algorithms".to_string()],
            show_splash: false,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from(dir.path().join("config.json")).unwrap(), None);
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn test_startup_with_valid_file_allows_saving() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "copy_feedback_ms": 3000 }"#).unwrap();

        let startup = Config::startup(Some(path.clone()));

        assert_eq!(startup.config.copy_feedback_ms, 3000);
        assert_eq!(startup.save_path, Some(path));
        assert!(startup.error.is_none());
    }

    #[test]
    fn test_startup_with_missing_file_allows_saving() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let startup = Config::startup(Some(path.clone()));

        assert_eq!(startup.config, Config::default());
        assert_eq!(startup.save_path, Some(path));
        assert!(startup.error.is_none());
    }

    #[test]
    fn test_startup_with_malformed_file_disables_saving() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "copy_feedback_ms": 3000, }"#).unwrap();

        let startup = Config::startup(Some(path));

        assert_eq!(startup.config, Config::default());
        assert!(startup.save_path.is_none());
        assert!(startup.error.unwrap().contains("Invalid config"));
    }
}
