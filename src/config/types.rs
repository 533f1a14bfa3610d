use serde::{Deserialize, Serialize};
use std::io;

use crate::locator::DEFAULT_MARKER;
use crate::rule::TagRule;

/// Project configuration file names, in order of precedence
pub const CONFIG_FILES: &[&str] = &[".taglink.toml", "taglink.toml", ".config/taglink.toml"];

/// File name looked up inside the user configuration directory
pub const USER_CONFIG_FILE: &str = "taglink.toml";

/// Keys accepted at the top level of a configuration file
pub(crate) const TOP_LEVEL_KEYS: &[&str] = &["global", "rules"];

/// Keys accepted in the `[global]` section
pub(crate) const GLOBAL_KEYS: &[&str] = &["marker", "open-links"];

/// Keys accepted in a `[[rules]]` entry
pub(crate) const RULE_KEYS: &[&str] = &["pattern", "template"];

/// Represents the complete configuration loaded from .taglink.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Tag link rules, in match priority order
    #[serde(default)]
    pub rules: Vec<TagRule>,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Character that introduces a tag
    pub marker: char,

    /// Launch the browser for resolved links
    pub open_links: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            open_links: true,
        }
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to access config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}
