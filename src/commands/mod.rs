//! Command handlers for the taglink CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod check;
pub mod completions;
pub mod import;
pub mod init;
pub mod open;
pub mod resolve;
pub mod rule;

use colored::*;

use taglink_lib::config::{Config, LoadedConfig};
use taglink_lib::exit_codes::exit;

/// Load configuration, exiting with a tool error if it cannot be read.
pub fn load_config_or_exit(config_path: Option<&str>) -> LoadedConfig {
    match Config::load(config_path) {
        Ok(loaded) => {
            match &loaded.path {
                Some(path) => log::debug!("[taglink-config] Using {}", path.display()),
                None => log::debug!("[taglink-config] Using default configuration"),
            }
            loaded
        }
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    }
}
