//! Handler for the `open` command.

use colored::*;
use std::fs;
use std::path::PathBuf;

use taglink_lib::exit_codes::exit;
use taglink_lib::host::{SystemHost, open_tag_at_cursor};
use taglink_lib::locator::TagLocator;

pub struct OpenArgs {
    pub file: Option<PathBuf>,
    pub text: Option<String>,
    /// 1-based line number within `file`
    pub line: usize,
    pub cursor: usize,
    pub no_open: bool,
    pub quiet: bool,
}

fn read_line(args: &OpenArgs) -> String {
    if let Some(text) = &args.text {
        return text.clone();
    }

    let Some(file) = &args.file else {
        eprintln!("{}: Either a file or --text is required", "Error".red().bold());
        exit::tool_error();
    };

    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}: Failed to read '{}': {}", "Error".red().bold(), file.display(), e);
            exit::tool_error();
        }
    };

    match args.line.checked_sub(1).and_then(|i| content.lines().nth(i)) {
        Some(line) => line.to_string(),
        None => {
            eprintln!(
                "{}: Line {} is out of range for '{}'",
                "Error".red().bold(),
                args.line,
                file.display()
            );
            exit::tool_error();
        }
    }
}

/// Handle the open command: resolve the tag under the cursor and open it.
pub fn handle_open(config_path: Option<&str>, args: OpenArgs) {
    let loaded = super::load_config_or_exit(config_path);
    let line = read_line(&args);

    let host = SystemHost {
        dry_run: args.no_open || !loaded.config.global.open_links,
        quiet: args.quiet,
    };
    let locator = TagLocator::new(loaded.config.global.marker);

    match open_tag_at_cursor(&host, &loaded.config.rules, &locator, &line, args.cursor) {
        Some(result) if result.is_resolved() => exit::success(),
        Some(_) => exit::no_match(),
        None => {
            if !args.quiet {
                eprintln!("No tag at cursor position {}", args.cursor);
            }
            exit::no_match();
        }
    }
}
