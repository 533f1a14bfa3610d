//! Handler for the `init` command.

use colored::*;

use taglink_lib::config::{CONFIG_FILES, ConfigError, create_default_config};
use taglink_lib::exit_codes::exit;

/// Handle the init command: write a starter configuration file.
pub fn handle_init() {
    let path = CONFIG_FILES[0];
    match create_default_config(path) {
        Ok(()) => {
            println!("Created default configuration file: {path}");
            println!("Add rules with: taglink rule add --pattern '<regex>' --template '<link>'");
        }
        Err(ConfigError::FileExists { path }) => {
            eprintln!("{}: Configuration file {path} already exists", "Error".red().bold());
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
