use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::settings::{SortSettings, TextOrderKind};

const DEFAULT_CONFIG_PATH: &str = "~/.config/sonic-sort/config.yml";

/// Application configuration (config.yml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sorting settings
    #[serde(default)]
    pub sort: SortSettings,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for Config {
    fn default() -> Self {
        Config {
            sort: SortSettings::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from file, with fallback to defaults
    /// Precedence: environment variables > config file > defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => expand_home_path(path),
            None => expand_home(DEFAULT_CONFIG_PATH),
        };

        let mut config = if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path)?;
            Self::from_yaml(&content)?
        } else if path.is_some() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        } else {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str::<Config>(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SONIC_SORT_LOCALE") {
            self.sort.locale = val;
        }
        if let Ok(val) = std::env::var("SONIC_SORT_TEXT_ORDER") {
            match val.as_str() {
                "collated" => self.sort.text_order = TextOrderKind::Collated,
                "ordinal" => self.sort.text_order = TextOrderKind::Ordinal,
                "ordinal_ignore_case" => self.sort.text_order = TextOrderKind::OrdinalIgnoreCase,
                other => tracing::warn!("Ignoring unknown SONIC_SORT_TEXT_ORDER: {}", other),
            }
        }
        if let Some(val) = env_flag("SONIC_SORT_ALPHANUM") {
            self.sort.sort_alphanum = val;
        }
        if let Some(val) = env_flag("SONIC_SORT_ALBUMS_BY_YEAR") {
            self.sort.sort_albums_by_year = val;
        }
        if let Some(val) = env_flag("SONIC_SORT_PROHIBIT_SORT_VARIOUS") {
            self.sort.prohibit_sort_various = val;
        }
        if let Ok(val) = std::env::var("SONIC_SORT_LOG_LEVEL") {
            self.log_level = val;
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {:?}, got: {}",
                LEVELS, self.log_level
            )));
        }

        if self.sort.text_order == TextOrderKind::Collated && self.sort.locale.trim().is_empty() {
            return Err(Error::Config(
                "locale must be set when text_order is collated".to_string(),
            ));
        }

        Ok(())
    }

    /// Default tracing filter for the configured log level
    pub fn log_filter(&self) -> String {
        format!("sonic_sort={}", self.log_level)
    }
}

/// Parse a boolean environment variable ("1"/"true"/"yes", "0"/"false"/"no")
fn env_flag(name: &str) -> Option<bool> {
    let val = std::env::var(name).ok()?;
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        other => {
            tracing::warn!("Ignoring non-boolean {}: {}", name, other);
            None
        }
    }
}

/// Expand ~ to home directory in a string path
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Expand ~ in a Path
fn expand_home_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(path_str) => expand_home(path_str),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Tests reading or writing SONIC_SORT_* variables hold this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 6] = [
        "SONIC_SORT_LOCALE",
        "SONIC_SORT_TEXT_ORDER",
        "SONIC_SORT_ALPHANUM",
        "SONIC_SORT_ALBUMS_BY_YEAR",
        "SONIC_SORT_PROHIBIT_SORT_VARIOUS",
        "SONIC_SORT_LOG_LEVEL",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
log_level: debug
sort:
  text_order: ordinal_ignore_case
  locale: en-US
  sort_alphanum: false
  sort_albums_by_year: false
  prohibit_sort_various: false
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.sort.text_order, TextOrderKind::OrdinalIgnoreCase);
        assert_eq!(config.sort.locale, "en-US");
        assert!(!config.sort.sort_alphanum);
        assert!(!config.sort.sort_albums_by_year);
        assert!(!config.sort.prohibit_sort_various);
    }

    #[test]
    fn test_from_yaml_empty_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sort, SortSettings::default());
    }

    #[test]
    fn test_from_yaml_rejects_bad_enum() {
        let err = Config::from_yaml("sort:\n  text_order: sideways\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: warn\nsort:\n  locale: fr").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.sort.locale, "fr");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yml");
        assert!(matches!(Config::load(Some(&missing)), Err(Error::Config(_))));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sort:\n  text_order: collated\n  sort_alphanum: true").unwrap();

        std::env::set_var("SONIC_SORT_TEXT_ORDER", "ordinal_ignore_case");
        std::env::set_var("SONIC_SORT_ALPHANUM", "No");
        let config = Config::load(Some(file.path()));
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.sort.text_order, TextOrderKind::OrdinalIgnoreCase);
        assert!(!config.sort.sort_alphanum);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        std::env::set_var("SONIC_SORT_TEXT_ORDER", "sideways");
        std::env::set_var("SONIC_SORT_ALBUMS_BY_YEAR", "maybe");
        std::env::set_var("SONIC_SORT_PROHIBIT_SORT_VARIOUS", "0");
        let mut config = Config::default();
        config.apply_env_overrides();
        let missing = env_flag("SONIC_SORT_ALPHANUM");
        clear_env();

        assert_eq!(config.sort.text_order, TextOrderKind::Collated);
        assert!(config.sort.sort_albums_by_year);
        assert!(!config.sort.prohibit_sort_various);
        assert_eq!(missing, None);
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_locale_for_collation() {
        let mut config = Config::default();
        config.sort.locale = " ".to_string();
        assert!(config.validate().is_err());

        config.sort.text_order = TextOrderKind::Ordinal;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x.yml"), home.join("x.yml"));
        }
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(Config::default().log_filter(), "sonic_sort=info");
    }
}
