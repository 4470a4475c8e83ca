//! # overlint-core
//!
//! Core framework for linting TypeScript sources, built on Tree-sitter
//! extraction and whole-program class resolution.
//!
//! This crate provides the foundational traits and types for building the
//! overlint rules. It includes:
//!
//! - [`Rule`] trait for per-file rules over the extracted syntax model
//! - [`TypeResolver`] / [`ProgramIndex`] for resolving class references
//! - [`HierarchyResolver`] for collecting inherited member names up an
//!   ancestor chain
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use overlint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod hierarchy;
mod resolver;
mod rule;
mod types;

/// TypeScript syntax model consumed by rules.
pub mod syntax;
/// Tree-sitter based extraction.
pub mod typescript;
/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use hierarchy::{HierarchyResolver, InheritedMemberSet};
pub use resolver::{ProgramIndex, TypeResolver};
pub use rule::{Rule, RuleBox};
pub use syntax::{ClassDecl, MemberDecl, MemberKind, SourceUnit, Span, TypeRef};
pub use types::{Label, LintResult, Location, Severity, Suggestion, Violation};
pub use typescript::TypeScriptExtractor;
pub use utils::allowance::{AllowCheck, AllowState};
