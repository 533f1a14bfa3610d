//! Rule validation: pattern compilation, capture group counting and template
//! placeholder checks.
//!
//! Validation is pure. [`validate_template`] depends on the group count produced
//! by [`validate_pattern`], so callers re-run it whenever the pattern changes;
//! [`diagnose`] does both in the right order.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

use crate::rule::{PatternProblem, RuleDiagnostics, TagRule, TemplateProblem};

/// `$` followed by one or more decimal digits
pub(crate) static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(\d+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternValidation {
    pub error: Option<PatternProblem>,
    pub group_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateValidation {
    pub error: Option<TemplateProblem>,
}

/// Compile a user pattern so that it must match the entire tag.
///
/// This is the only way patterns are compiled, for validation and for matching
/// alike. The bare pattern must compile on its own: wrapping an unbalanced
/// pattern such as `a)(b` would otherwise turn it into a valid one. A trailing
/// `#` comment under the `x` flag runs to the end of the line and would swallow
/// the closing anchor, so the wrapper is retried with the comment terminated.
pub(crate) fn compile_whole_tag(pattern: &str) -> Result<FancyRegex, fancy_regex::Error> {
    FancyRegex::new(pattern)?;
    FancyRegex::new(&format!("^(?:{pattern})$"))
        .or_else(|_| FancyRegex::new(&format!("^(?:{pattern}\n)$")))
}

/// Check that a pattern compiles and has at least one capture group.
pub fn validate_pattern(pattern: &str) -> PatternValidation {
    if pattern.is_empty() {
        return PatternValidation {
            error: Some(PatternProblem::Empty),
            group_count: 0,
        };
    }

    let regex = match compile_whole_tag(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            log::debug!("[taglink-validate] Pattern {pattern:?} does not compile: {e}");
            return PatternValidation {
                error: Some(PatternProblem::Invalid),
                group_count: 0,
            };
        }
    };

    // Slot 0 is the whole match; named groups count, non-capturing groups do not.
    let group_count = regex.captures_len().saturating_sub(1);
    if group_count == 0 {
        return PatternValidation {
            error: Some(PatternProblem::NoCaptureGroups),
            group_count: 0,
        };
    }

    PatternValidation {
        error: None,
        group_count,
    }
}

/// Check that every `$N` placeholder in a template refers to an available group.
///
/// A template without placeholders is a literal link and is valid.
pub fn validate_template(template: &str, group_count: usize) -> TemplateValidation {
    let mut maximum: Option<usize> = None;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        // Digit runs too long for usize are the only way this parse can fail.
        let Ok(value) = caps[1].parse::<usize>() else {
            return TemplateValidation {
                error: Some(TemplateProblem::InvalidNumber),
            };
        };
        maximum = Some(maximum.map_or(value, |m| m.max(value)));
    }

    match maximum {
        Some(max) if max > group_count => TemplateValidation {
            error: Some(TemplateProblem::ExceedsGroups),
        },
        _ => TemplateValidation { error: None },
    }
}

/// Compute the full diagnostics of a rule.
pub fn diagnose(rule: &TagRule) -> RuleDiagnostics {
    let pattern = validate_pattern(&rule.pattern);
    let template = validate_template(&rule.template, pattern.group_count);

    RuleDiagnostics {
        pattern_error: pattern.error,
        template_error: template.error,
        group_count: pattern.group_count,
    }
}
