//! Conventional Commits validation engine.
//!
//! The engine is pure: it parses a message into a [`ParsedCommit`], runs the
//! fixed rule table over it, scores the outcome and derives suggestions. It
//! performs no I/O and never fails; a message that does not conform is
//! reported through the returned [`ValidationResult`].

pub mod parser;
pub mod rules;
pub mod suggestions;
pub mod validator;

pub use parser::{parse, ParsedCommit};
pub use rules::{rules, Rule, RuleId, Severity, VALID_TYPES};
pub use suggestions::suggest;
pub use validator::{validate, validate_parsed, ValidationResult, Violation};
