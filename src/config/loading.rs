use std::fs;
use std::path::{Path, PathBuf};

use super::types::{CONFIG_FILES, Config, ConfigError, GLOBAL_KEYS, RULE_KEYS, TOP_LEVEL_KEYS, USER_CONFIG_FILE};

/// Configuration together with the file it was read from, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Where edits should be written: the loaded file, or `.taglink.toml` in the
    /// current directory when nothing was found.
    pub fn save_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILES[0]))
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = self.save_path();
        self.config.save(&path)?;
        Ok(path)
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path is loaded as-is. Otherwise the project file is searched
    /// upward from the current directory, then the user configuration directory
    /// is checked, and finally the defaults are used.
    pub fn load(config_path: Option<&str>) -> Result<LoadedConfig, ConfigError> {
        if let Some(path) = config_path {
            log::debug!("[taglink-config] Loading explicit config file: {path}");
            let path = PathBuf::from(path);
            let config = Self::from_file(&path)?;
            return Ok(LoadedConfig {
                config,
                path: Some(path),
            });
        }

        let found = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::discover_config_upward(&dir))
            .or_else(Self::user_configuration_path);

        match found {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok(LoadedConfig {
                    config,
                    path: Some(path),
                })
            }
            None => {
                log::debug!("[taglink-config] No configuration found, using defaults");
                Ok(LoadedConfig::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse TOML content. Unknown keys are reported and otherwise ignored.
    pub fn from_toml_str(content: &str, display_path: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("{display_path}: {e}")))?;
        warn_unknown_keys(&table, display_path);

        toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("{display_path}: {e}")))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::IoError {
                source,
                path: parent.display().to_string(),
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        log::debug!("[taglink-config] Saved {} rules to {}", self.rules.len(), path.display());
        Ok(())
    }

    /// Search `start_dir` and its ancestors for a project config file, stopping
    /// at the first directory that contains `.git`.
    pub fn discover_config_upward(start_dir: &Path) -> Option<PathBuf> {
        const MAX_DEPTH: usize = 100; // Prevent infinite traversal

        let mut current_dir = start_dir.to_path_buf();
        for _ in 0..MAX_DEPTH {
            log::debug!("[taglink-config] Searching for config in: {}", current_dir.display());

            for config_name in CONFIG_FILES {
                let config_path = current_dir.join(config_name);
                if config_path.is_file() {
                    log::debug!("[taglink-config] Found config file: {}", config_path.display());
                    return Some(config_path);
                }
            }

            if current_dir.join(".git").exists() {
                log::debug!("[taglink-config] Stopping at .git directory");
                return None;
            }

            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_owned(),
                None => {
                    log::debug!("[taglink-config] Reached filesystem root");
                    return None;
                }
            }
        }

        log::debug!("[taglink-config] Maximum traversal depth reached");
        None
    }

    fn user_configuration_path_impl(config_dir: &Path) -> Option<PathBuf> {
        let config_path = config_dir.join("taglink").join(USER_CONFIG_FILE);
        log::debug!(
            "[taglink-config] Checking for user configuration at: {}",
            config_path.display()
        );
        config_path.is_file().then_some(config_path)
    }

    fn user_configuration_path() -> Option<PathBuf> {
        use etcetera::{BaseStrategy, choose_base_strategy};

        match choose_base_strategy() {
            Ok(strategy) => Self::user_configuration_path_impl(&strategy.config_dir()),
            Err(e) => {
                log::debug!("[taglink-config] Failed to determine user config directory: {e}");
                None
            }
        }
    }
}

fn warn_unknown_keys(table: &toml::Table, display_path: &str) {
    for (key, value) in table {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            log::warn!("[WARN] Unknown top-level key in {display_path}: {key}");
            continue;
        }
        match (key.as_str(), value) {
            ("global", toml::Value::Table(global)) => {
                for key in global.keys().filter(|k| !GLOBAL_KEYS.contains(&k.as_str())) {
                    log::warn!("[WARN] Unknown key in [global] section of {display_path}: {key}");
                }
            }
            ("rules", toml::Value::Array(rules)) => {
                for (index, rule) in rules.iter().enumerate() {
                    let Some(rule) = rule.as_table() else { continue };
                    for key in rule.keys().filter(|k| !RULE_KEYS.contains(&k.as_str())) {
                        log::warn!("[WARN] Unknown key in rule #{index} of {display_path}: {key}");
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::TagRule;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[global]
marker = "+"
open-links = false

[[rules]]
pattern = 'project\/(\w+)'
template = "https://tracker/$1"

[[rules]]
pattern = '(\w+)'
template = "https://wiki/$1"
"#;
        let config = Config::from_toml_str(content, "test.toml").unwrap();
        assert_eq!(config.global.marker, '+');
        assert!(!config.global.open_links);
        assert_eq!(
            config.rules,
            vec![
                TagRule::new(r"project\/(\w+)", "https://tracker/$1"),
                TagRule::new(r"(\w+)", "https://wiki/$1"),
            ]
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("", "empty.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.global.marker, '#');
        assert!(config.global.open_links);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "color = true\n[global]\nfoo = 1\n[[rules]]\npattern = '(a)'\ntemplate = 'x'\nmetadata = 'y'\n";
        let config = Config::from_toml_str(content, "unknown.toml").unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = Config::from_toml_str("[[rules]\n", "bad.toml");
        assert!(matches!(result, Err(ConfigError::ParseError(msg)) if msg.contains("bad.toml")));
    }

    #[test]
    fn test_save_and_reload_preserves_rule_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(".taglink.toml");

        let config = Config {
            rules: vec![
                TagRule::new(r"b/(\w+)", "https://b/$1"),
                TagRule::new(r"a/(\w+)", "https://a/$1"),
                TagRule::default(),
            ],
            ..Config::default()
        };
        config.save(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        let result = Config::load(Some(path.to_str().unwrap()));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_discover_config_upward() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join(".git")).unwrap();
        std::fs::write(root.join("taglink.toml"), "").unwrap();
        let nested = root.join("notes").join("daily");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config_upward(&nested), Some(root.join("taglink.toml")));
    }

    #[test]
    fn test_discovery_prefers_hidden_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join(".git")).unwrap();
        std::fs::write(root.join("taglink.toml"), "").unwrap();
        std::fs::write(root.join(".taglink.toml"), "").unwrap();

        assert_eq!(Config::discover_config_upward(root), Some(root.join(".taglink.toml")));
    }

    #[test]
    fn test_discovery_stops_at_git_root() {
        let temp_dir = TempDir::new().unwrap();
        let outer = temp_dir.path();
        std::fs::write(outer.join(".taglink.toml"), "").unwrap();
        let repo = outer.join("repo");
        std::fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(Config::discover_config_upward(&repo), None);
    }

    #[test]
    fn test_user_configuration_path_impl() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(Config::user_configuration_path_impl(temp_dir.path()), None);

        let dir = temp_dir.path().join("taglink");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("taglink.toml"), "").unwrap();
        assert_eq!(
            Config::user_configuration_path_impl(temp_dir.path()),
            Some(dir.join("taglink.toml"))
        );
    }

    #[test]
    fn test_save_path_defaults_to_project_file() {
        assert_eq!(LoadedConfig::default().save_path(), PathBuf::from(".taglink.toml"));
    }
}
