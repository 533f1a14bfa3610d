//! Handler for the `completions` command.

use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate};
use colored::*;

use taglink_lib::exit_codes::exit;

/// Names accepted on the command line, in clap's order.
fn shell_names() -> Vec<String> {
    Shell::value_variants()
        .iter()
        .filter_map(|shell| shell.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect()
}

/// Print a completion script for `shell`, or for the shell named by `$SHELL`.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        for name in shell_names() {
            println!("{name}");
        }
        return;
    }

    let Some(shell) = shell.or_else(Shell::from_env) else {
        eprintln!("{}: $SHELL does not name a supported shell", "Error".red().bold());
        eprintln!("Pass one of: {}", shell_names().join(", "));
        exit::tool_error();
    };

    log::debug!("[taglink-completions] Generating completions for {shell}");
    generate(shell, &mut crate::Cli::command(), "taglink", &mut std::io::stdout());
}
