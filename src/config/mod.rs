//!
//! This module defines the configuration file model, discovery and persistence for taglink.
//! The rule list lives in the `[[rules]]` array; only patterns and templates are stored.

pub mod types;
pub use types::*;

mod loading;
pub use loading::LoadedConfig;

use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r##"# taglink configuration file

[global]
# Character that introduces a tag
marker = "#"

# Open resolved links in the browser (set to false to only print them)
open-links = true

# Rules are tried in order; the first pattern that matches the whole tag wins.
# Capture groups are inserted into the template as $1, $2, ...
#
# [[rules]]
# pattern = 'project\/(\w+)'
# template = "https://tracker.example.com/projects/$1"
#
# [[rules]]
# pattern = 'issue\/(\d+)'
# template = "https://github.com/owner/repo/issues/$1"
"##;

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &str) -> Result<(), ConfigError> {
    if Path::new(path).exists() {
        return Err(ConfigError::FileExists { path: path.to_string() });
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::IoError {
        source,
        path: path.to_string(),
    })
}
