//! Host integration: the side effects performed once a tag has been resolved.
//!
//! The editor (or the CLI) implements [`Host`]; the core only calls
//! [`Host::open_link`] and [`Host::show_notice`] and never waits on their outcome.

use colored::*;

use crate::locator::TagLocator;
use crate::resolver::{MatchResult, resolve};
use crate::rule::TagRule;

pub const NO_MATCH_NOTICE: &str = "The selected tag doesn't match any configured tag link substitutions!";

pub fn opening_notice(link: &str) -> String {
    format!("Opening the following link in the browser: {link}")
}

/// Capabilities the surrounding application provides.
pub trait Host {
    /// Open a link in the user's browser. Failures are the host's to report.
    fn open_link(&self, link: &str);

    /// Show a short, transient message to the user.
    fn show_notice(&self, message: &str);
}

/// Resolve `tag` and perform the matching side effects.
pub fn open_tag(host: &dyn Host, rules: &[TagRule], tag: &str) -> MatchResult {
    let result = resolve(tag, rules);
    match result.link() {
        Some(link) => {
            host.show_notice(&opening_notice(link));
            host.open_link(link);
        }
        None => host.show_notice(NO_MATCH_NOTICE),
    }
    result
}

/// Open the tag under the cursor, if there is one.
///
/// Returns `None` without touching the host when the cursor is not on a tag.
pub fn open_tag_at_cursor(
    host: &dyn Host,
    rules: &[TagRule],
    locator: &TagLocator,
    line: &str,
    cursor: usize,
) -> Option<MatchResult> {
    let Some(located) = locator.locate(line, cursor) else {
        log::debug!("[taglink-host] No tag under cursor {cursor}");
        return None;
    };
    Some(open_tag(host, rules, &located.tag))
}

/// Host backed by the system browser, with notices on stderr.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    /// Announce links without launching the browser
    pub dry_run: bool,
    pub quiet: bool,
}

impl Host for SystemHost {
    fn open_link(&self, link: &str) {
        if self.dry_run {
            println!("{link}");
            return;
        }
        if let Err(e) = open::that_detached(link) {
            log::warn!("Failed to open '{link}' in the browser: {e}");
            eprintln!("{}: Failed to open '{}': {}", "Error".red().bold(), link, e);
        }
    }

    fn show_notice(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.cyan());
        }
    }
}
