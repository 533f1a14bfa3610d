//! Conversion of the note editor plugin's `data.json` into taglink rules.
//!
//! The plugin stores its rules as
//! `{"tagLinkSubstitutions": [{"tagRegex": ..., "linkSubstitution": ..., "metadata": {...}}]}`.
//! Cached metadata is discarded; diagnostics are always recomputed.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::Config;
use crate::rule::TagRule;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    Io { source: std::io::Error, path: String },
    #[error("Failed to parse {path}: {source}")]
    Json { source: serde_json::Error, path: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PluginSettings {
    #[serde(default)]
    tag_link_substitutions: Vec<PluginSubstitution>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PluginSubstitution {
    #[serde(default)]
    tag_regex: String,
    #[serde(default)]
    link_substitution: String,
}

impl From<PluginSubstitution> for TagRule {
    fn from(substitution: PluginSubstitution) -> Self {
        TagRule::new(substitution.tag_regex, substitution.link_substitution)
    }
}

/// Parse plugin settings JSON into an ordered rule list.
pub fn rules_from_plugin_json(content: &str) -> Result<Vec<TagRule>, serde_json::Error> {
    let settings: PluginSettings = serde_json::from_str(content)?;
    Ok(settings.tag_link_substitutions.into_iter().map(TagRule::from).collect())
}

/// Load a plugin `data.json` file as a configuration with default global options.
pub fn load_plugin_settings(path: &Path) -> Result<Config, ImportError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ImportError::Io {
        source,
        path: display.clone(),
    })?;
    let rules = rules_from_plugin_json(&content).map_err(|source| ImportError::Json { source, path: display })?;
    log::debug!("[taglink-import] Imported {} rules from {}", rules.len(), path.display());

    Ok(Config {
        rules,
        ..Config::default()
    })
}
