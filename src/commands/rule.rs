//! Handler for the `rule` command.

use colored::*;

use taglink_lib::exit_codes::exit;
use taglink_lib::store::{RuleStore, StoreError};

use super::check::print_rule;
use crate::RuleAction;

/// Handle the rule command: list rules or edit one by index and save.
pub fn handle_rule(config_path: Option<&str>, action: RuleAction, quiet: bool) {
    let mut loaded = super::load_config_or_exit(config_path);
    let mut store = RuleStore::new(std::mem::take(&mut loaded.config.rules));

    let shown = match apply_action(&mut store, action) {
        Ok(Edit::Changed { show }) => show,
        Ok(Edit::ReadOnly) => {
            if store.is_empty() {
                println!("No rules configured. Add one with: taglink rule add");
            }
            for (index, (rule, diagnostics)) in store.rules().iter().zip(store.diagnostics()).enumerate() {
                print_rule(index, rule, &diagnostics);
            }
            return;
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    loaded.config.rules = store.into_rules();
    let path = match loaded.save() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    };

    if quiet {
        return;
    }
    println!("Saved {} rules to {}", loaded.config.rules.len(), path.display());
    if let Some(index) = shown
        && let Some(rule) = loaded.config.rules.get(index)
    {
        print_rule(index, rule, &rule.diagnostics());
    }
}

enum Edit {
    ReadOnly,
    /// The store changed; `show` is the rule to print afterwards
    Changed { show: Option<usize> },
}

fn apply_action(store: &mut RuleStore, action: RuleAction) -> Result<Edit, StoreError> {
    match action {
        RuleAction::List => Ok(Edit::ReadOnly),
        RuleAction::Add { pattern, template } => {
            let index = store.add();
            if let Some(pattern) = pattern {
                store.set_pattern(index, pattern)?;
            }
            if let Some(template) = template {
                store.set_template(index, template)?;
            }
            Ok(Edit::Changed { show: Some(index) })
        }
        RuleAction::Remove { index } => {
            let removed = store.remove(index)?;
            log::debug!("[taglink-rule] Removed rule [{index}] '{}'", removed.pattern);
            Ok(Edit::Changed { show: None })
        }
        RuleAction::SetPattern { index, pattern } => {
            store.set_pattern(index, pattern)?;
            Ok(Edit::Changed { show: Some(index) })
        }
        RuleAction::SetTemplate { index, template } => {
            store.set_template(index, template)?;
            Ok(Edit::Changed { show: Some(index) })
        }
    }
}
