//! # commit-lint
//!
//! Validates commit messages against the Conventional Commits convention and
//! manages a Git `commit-msg` hook that runs the validation on every commit.
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_lint::lint::validate;
//!
//! let result = validate("feat(auth): add login functionality");
//! assert!(result.is_valid);
//! assert_eq!(result.score, 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod git;
pub mod lint;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::lint::{validate, ValidationResult};

/// The current version of commit-lint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
