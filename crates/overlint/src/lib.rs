//! # overlint
//!
//! TypeScript override-decorator linter.
//!
//! This is the main facade crate that re-exports core functionality and rules.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! overlint = "0.1"
//! ```
//!
//! ```rust,ignore
//! // tests/lint.rs
//! #[test]
//! fn typescript_sources_are_clean() {
//!     overlint::run_check(None, None, None);
//! }
//! ```
//!
//! This runs overlint as part of `cargo test`. Configure via `overlint.toml`.
//!
//! ## Suppression Comments
//!
//! Use `// overlint: allow(...)` to suppress rules at a specific site:
//!
//! ```typescript
//! // overlint: allow(declare-override) reason="mirrors upstream API"
//! foo(): void { }
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use overlint::Analyzer;
//! use overlint::rules::recommended_rules;
//!
//! let mut builder = Analyzer::builder().root("./src");
//! for rule in recommended_rules() {
//!     builder = builder.rule_box(rule);
//! }
//!
//! let result = builder.build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use overlint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use overlint_rules::*;
}

mod runner;

pub use runner::run_check;
