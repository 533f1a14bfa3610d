//!
//! This module defines the tag link rule type and the diagnostics derived from it.
//! A rule pairs a regular expression matched against a tag with a link template
//! whose `$N` placeholders are filled from the pattern's capture groups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problem detected in a rule's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternProblem {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern is invalid")]
    Invalid,
    #[error("at least one capture group is required")]
    NoCaptureGroups,
}

/// Problem detected in a rule's link template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateProblem {
    #[error("a substitution value is not a valid number")]
    InvalidNumber,
    #[error("a substitution value exceeds the available capture groups")]
    ExceedsGroups,
}

/// A single tag-to-link substitution rule.
///
/// Only `pattern` and `template` are persisted. Diagnostics are derived on demand
/// through [`TagRule::diagnostics`], so they can never go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    /// Regular expression matched against the whole tag
    #[serde(default)]
    pub pattern: String,

    /// Link template with `$N` placeholders
    #[serde(default)]
    pub template: String,
}

impl TagRule {
    pub fn new(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            template: template.into(),
        }
    }

    /// A rule missing its pattern or template never matches and is skipped during resolution.
    pub fn is_blank(&self) -> bool {
        self.pattern.is_empty() || self.template.is_empty()
    }

    pub fn diagnostics(&self) -> RuleDiagnostics {
        crate::validation::diagnose(self)
    }
}

/// Validation results for one rule, computed from `(pattern, template)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleDiagnostics {
    #[serde(serialize_with = "serialize_problem")]
    pub pattern_error: Option<PatternProblem>,
    #[serde(serialize_with = "serialize_problem")]
    pub template_error: Option<TemplateProblem>,
    pub group_count: usize,
}

impl RuleDiagnostics {
    pub fn is_ok(&self) -> bool {
        self.pattern_error.is_none() && self.template_error.is_none()
    }

    /// All problem messages, pattern first.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(problem) = self.pattern_error {
            messages.push(problem.to_string());
        }
        if let Some(problem) = self.template_error {
            messages.push(problem.to_string());
        }
        messages
    }
}

// Diagnostics are reported by message text, which is what editing surfaces display.
fn serialize_problem<S, P>(problem: &Option<P>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    P: std::fmt::Display,
{
    match problem {
        Some(p) => serializer.serialize_some(&p.to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_messages() {
        assert_eq!(PatternProblem::Empty.to_string(), "pattern is empty");
        assert_eq!(PatternProblem::Invalid.to_string(), "pattern is invalid");
        assert_eq!(
            PatternProblem::NoCaptureGroups.to_string(),
            "at least one capture group is required"
        );
        assert_eq!(
            TemplateProblem::InvalidNumber.to_string(),
            "a substitution value is not a valid number"
        );
        assert_eq!(
            TemplateProblem::ExceedsGroups.to_string(),
            "a substitution value exceeds the available capture groups"
        );
    }

    #[test]
    fn test_blank_rule() {
        assert!(TagRule::default().is_blank());
        assert!(TagRule::new("(a)", "").is_blank());
        assert!(TagRule::new("", "x").is_blank());
        assert!(!TagRule::new("(a)", "x").is_blank());
    }

    #[test]
    fn test_diagnostics_serialize_as_messages() {
        let diagnostics = RuleDiagnostics {
            pattern_error: Some(PatternProblem::NoCaptureGroups),
            template_error: None,
            group_count: 0,
        };
        let json = serde_json::to_value(diagnostics).unwrap();
        assert_eq!(json["pattern_error"], "at least one capture group is required");
        assert!(json["template_error"].is_null());
        assert_eq!(json["group_count"], 0);
        assert_eq!(diagnostics.messages().len(), 1);
        assert!(!diagnostics.is_ok());
    }

    #[test]
    fn test_rule_deserializes_without_metadata() {
        let rule: TagRule = toml::from_str("pattern = 'a(b)'\ntemplate = 'x/$1'\n").unwrap();
        assert_eq!(rule, TagRule::new("a(b)", "x/$1"));
    }
}
