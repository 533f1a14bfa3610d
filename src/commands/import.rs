//! Handler for the `import` command.

use colored::*;
use std::fs;
use std::path::Path;

use taglink_lib::config::CONFIG_FILES;
use taglink_lib::exit_codes::exit;
use taglink_lib::import::load_plugin_settings;

/// Handle the import command: convert plugin data.json to taglink format.
pub fn handle_import(file: String, output: Option<String>, dry_run: bool) {
    let config = match load_plugin_settings(Path::new(&file)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Import error".red().bold(), e);
            exit::tool_error();
        }
    };

    let output_content = match config.to_toml_string() {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}: {}", "Import error".red().bold(), e);
            exit::tool_error();
        }
    };

    if dry_run {
        println!("{output_content}");
        return;
    }

    let output_path = output.as_deref().unwrap_or(CONFIG_FILES[0]);
    if Path::new(output_path).exists() {
        eprintln!("{}: Output file '{}' already exists", "Error".red().bold(), output_path);
        exit::tool_error();
    }

    match fs::write(output_path, output_content) {
        Ok(()) => {
            println!(
                "Imported {} rules from '{file}' to '{output_path}'",
                config.rules.len()
            );
            println!("You can now use: taglink check --config {output_path}");
        }
        Err(e) => {
            eprintln!("{}: Failed to write to '{}': {}", "Error".red().bold(), output_path, e);
            exit::tool_error();
        }
    }
}
