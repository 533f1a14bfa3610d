//! Tag resolution: find the first rule whose pattern matches a tag and render its
//! link template with the captured groups.
//!
//! Resolution never fails. A rule that is blank, does not compile, has no capture
//! groups or does not match the tag is skipped, and an exhausted rule list yields
//! [`MatchResult::NoMatch`].

use crate::rule::TagRule;
use crate::validation::{PLACEHOLDER_REGEX, compile_whole_tag};

/// Outcome of resolving a tag against a rule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Resolved(String),
    NoMatch,
}

impl MatchResult {
    pub fn link(&self) -> Option<&str> {
        match self {
            MatchResult::Resolved(link) => Some(link),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, MatchResult::Resolved(_))
    }
}

/// A successful match together with the position of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub rule_index: usize,
    pub link: String,
}

/// Resolve a tag against an ordered rule list. The first matching rule wins.
pub fn resolve(tag: &str, rules: &[TagRule]) -> MatchResult {
    match find_match(tag, rules) {
        Some(resolution) => MatchResult::Resolved(resolution.link),
        None => MatchResult::NoMatch,
    }
}

/// Like [`resolve`], but also reports which rule matched.
pub fn find_match(tag: &str, rules: &[TagRule]) -> Option<Resolution> {
    for (rule_index, rule) in rules.iter().enumerate() {
        if rule.is_blank() {
            continue;
        }

        let regex = match compile_whole_tag(&rule.pattern) {
            Ok(regex) => regex,
            Err(e) => {
                log::debug!("[taglink-resolve] Skipping rule #{rule_index}: pattern does not compile: {e}");
                continue;
            }
        };

        let captures = match regex.captures(tag) {
            Ok(Some(captures)) => captures,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Rule #{rule_index} failed while matching tag '{tag}': {e}");
                continue;
            }
        };

        if captures.len() <= 1 {
            log::debug!("[taglink-resolve] Skipping rule #{rule_index}: no capture groups");
            continue;
        }

        // Groups that did not take part in the match substitute as empty text.
        let groups: Vec<&str> = (1..captures.len())
            .map(|i| captures.get(i).map_or("", |m| m.as_str()))
            .collect();

        let link = render_template(&rule.template, &groups);
        log::debug!("[taglink-resolve] Tag '{tag}' matched rule #{rule_index} -> {link}");
        return Some(Resolution { rule_index, link });
    }

    None
}

/// Replace `$N` placeholders with `groups[N - 1]`.
///
/// Each placeholder is consumed as a whole digit run, so `$12` is replaced by
/// group 12 and never read as `$1` followed by `2`. Placeholders without a
/// corresponding group (including `$0`) are left as literal text, and inserted
/// values are never scanned for further placeholders.
pub fn render_template(template: &str, groups: &[&str]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &regex::Captures| {
            let token = &caps[0];
            match caps[1].parse::<usize>() {
                Ok(index) if (1..=groups.len()).contains(&index) => groups[index - 1].to_string(),
                _ => token.to_string(),
            }
        })
        .into_owned()
}
