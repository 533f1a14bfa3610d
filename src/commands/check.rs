//! Handler for the `check` command.

use colored::*;
use serde::Serialize;

use taglink_lib::exit_codes::exit;
use taglink_lib::rule::{RuleDiagnostics, TagRule};

use crate::OutputFormat;

#[derive(Serialize)]
struct RuleReport<'a> {
    index: usize,
    pattern: &'a str,
    template: &'a str,
    diagnostics: RuleDiagnostics,
}

/// Print one rule and its diagnostics in human-readable form.
pub fn print_rule(index: usize, rule: &TagRule, diagnostics: &RuleDiagnostics) {
    println!(
        "{} {} {} {}",
        format!("[{index}]").bold(),
        format!("'{}'", rule.pattern).cyan(),
        "->".dimmed(),
        format!("'{}'", rule.template).cyan()
    );

    if diagnostics.is_ok() {
        let groups = if diagnostics.group_count == 1 { "group" } else { "groups" };
        println!("    {} {} capture {groups}", "ok".green(), diagnostics.group_count);
    } else {
        for message in diagnostics.messages() {
            println!("    {} {message}", "problem:".red().bold());
        }
    }
}

/// Handle the check command: validate every rule and report problems.
pub fn handle_check(config_path: Option<&str>, output_format: OutputFormat) {
    let loaded = super::load_config_or_exit(config_path);
    let rules = &loaded.config.rules;
    let diagnostics: Vec<RuleDiagnostics> = rules.iter().map(TagRule::diagnostics).collect();
    let problems = diagnostics.iter().filter(|d| !d.is_ok()).count();

    match output_format {
        OutputFormat::Json => {
            let reports: Vec<RuleReport> = rules
                .iter()
                .zip(&diagnostics)
                .enumerate()
                .map(|(index, (rule, diagnostics))| RuleReport {
                    index,
                    pattern: &rule.pattern,
                    template: &rule.template,
                    diagnostics: *diagnostics,
                })
                .collect();
            match serde_json::to_string_pretty(&reports) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("{}: {}", "Error".red().bold(), e);
                    exit::tool_error();
                }
            }
        }
        OutputFormat::Text => {
            if rules.is_empty() {
                println!("No rules configured. Add one with: taglink rule add");
                return;
            }
            for (index, (rule, diagnostics)) in rules.iter().zip(&diagnostics).enumerate() {
                print_rule(index, rule, diagnostics);
            }
            println!();
            if problems == 0 {
                println!("{} All {} rules are valid", "Success:".green().bold(), rules.len());
            } else {
                println!("{} {problems} of {} rules have problems", "Found:".yellow().bold(), rules.len());
            }
        }
    }

    if problems > 0 {
        exit::no_match();
    }
}
