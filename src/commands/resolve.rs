//! Handler for the `resolve` command.

use colored::*;

use taglink_lib::exit_codes::exit;
use taglink_lib::host::NO_MATCH_NOTICE;
use taglink_lib::resolver::find_match;

/// Handle the resolve command: print the link for a tag.
pub fn handle_resolve(config_path: Option<&str>, tag: &str, verbose: bool, quiet: bool) {
    let loaded = super::load_config_or_exit(config_path);

    // Accept a tag pasted with its marker
    let tag = tag.strip_prefix(loaded.config.global.marker).unwrap_or(tag);

    match find_match(tag, &loaded.config.rules) {
        Some(resolution) => {
            if verbose {
                eprintln!("Matched rule [{}]", resolution.rule_index);
            }
            println!("{}", resolution.link);
        }
        None => {
            if !quiet {
                eprintln!("{}", NO_MATCH_NOTICE.yellow());
            }
            exit::no_match();
        }
    }
}
