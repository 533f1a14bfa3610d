//! Ordered rule list with positional editing.
//!
//! Rules are addressed by index. Every field update returns the rule's fresh
//! diagnostics so editing surfaces can annotate it without caching anything.

use thiserror::Error;

use crate::rule::{RuleDiagnostics, TagRule};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Rule index {index} is out of range (there are {len} rules)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleStore {
    rules: Vec<TagRule>,
}

impl RuleStore {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<TagRule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&TagRule, StoreError> {
        let len = self.rules.len();
        self.rules.get(index).ok_or(StoreError::IndexOutOfRange { index, len })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut TagRule, StoreError> {
        let len = self.rules.len();
        self.rules.get_mut(index).ok_or(StoreError::IndexOutOfRange { index, len })
    }

    /// Append an empty rule and return its index.
    pub fn add(&mut self) -> usize {
        self.rules.push(TagRule::default());
        self.rules.len() - 1
    }

    /// Remove the rule at `index`. Later rules move up one position.
    pub fn remove(&mut self, index: usize) -> Result<TagRule, StoreError> {
        if index >= self.rules.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    pub fn set_pattern(&mut self, index: usize, pattern: impl Into<String>) -> Result<RuleDiagnostics, StoreError> {
        let rule = self.get_mut(index)?;
        rule.pattern = pattern.into();
        // The template depends on the pattern's group count, so both are re-checked.
        Ok(rule.diagnostics())
    }

    pub fn set_template(&mut self, index: usize, template: impl Into<String>) -> Result<RuleDiagnostics, StoreError> {
        let rule = self.get_mut(index)?;
        rule.template = template.into();
        Ok(rule.diagnostics())
    }

    /// Diagnostics for every rule, in order.
    pub fn diagnostics(&self) -> Vec<RuleDiagnostics> {
        self.rules.iter().map(TagRule::diagnostics).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{PatternProblem, TemplateProblem};

    #[test]
    fn test_add_creates_empty_rule() {
        let mut store = RuleStore::default();
        assert!(store.is_empty());
        assert_eq!(store.add(), 0);
        assert_eq!(store.add(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap(), &TagRule::default());

        let diagnostics = store.get(0).unwrap().diagnostics();
        assert_eq!(diagnostics.pattern_error, Some(PatternProblem::Empty));
        assert_eq!(diagnostics.template_error, None);
        assert_eq!(diagnostics.group_count, 0);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = RuleStore::new(vec![
            TagRule::new("(a)", "1"),
            TagRule::new("(b)", "2"),
            TagRule::new("(c)", "3"),
        ]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.pattern, "(b)");
        let patterns: Vec<&str> = store.rules().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["(a)", "(c)"]);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut store = RuleStore::new(vec![TagRule::new("(a)", "1")]);
        assert_eq!(store.remove(3), Err(StoreError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(
            store.set_pattern(1, "(x)"),
            Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(store.set_template(5, "y").is_err());
        assert!(store.get(1).is_err());
    }

    #[test]
    fn test_set_pattern_revalidates_template() {
        let mut store = RuleStore::default();
        let index = store.add();

        let diagnostics = store.set_template(index, "https://x/$2").unwrap();
        assert_eq!(diagnostics.template_error, Some(TemplateProblem::ExceedsGroups));

        let diagnostics = store.set_pattern(index, r"(\w+)/(\w+)").unwrap();
        assert_eq!(diagnostics.pattern_error, None);
        assert_eq!(diagnostics.template_error, None);
        assert_eq!(diagnostics.group_count, 2);

        let diagnostics = store.set_pattern(index, "abc").unwrap();
        assert_eq!(diagnostics.pattern_error, Some(PatternProblem::NoCaptureGroups));
        assert_eq!(diagnostics.template_error, Some(TemplateProblem::ExceedsGroups));
    }

    #[test]
    fn test_diagnostics_for_all_rules() {
        let store = RuleStore::new(vec![TagRule::new(r"(\w+)", "https://x/$1"), TagRule::new("(", "x")]);
        let all = store.diagnostics();
        assert_eq!(all.len(), 2);
        assert!(all[0].is_ok());
        assert_eq!(all[1].pattern_error, Some(PatternProblem::Invalid));
    }
}
