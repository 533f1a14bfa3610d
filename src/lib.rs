pub mod config;
pub mod exit_codes;
pub mod host;
pub mod import;
pub mod locator;
pub mod resolver;
pub mod rule;
pub mod store;
pub mod utils;
pub mod validation;

pub use crate::host::{Host, SystemHost, open_tag, open_tag_at_cursor};
pub use crate::locator::{LocatedTag, TagLocator, locate};
pub use crate::resolver::{MatchResult, Resolution, find_match, resolve};
pub use crate::rule::{PatternProblem, RuleDiagnostics, TagRule, TemplateProblem};
pub use crate::store::{RuleStore, StoreError};
pub use crate::validation::{diagnose, validate_pattern, validate_template};
