//! # overlint-rules
//!
//! Built-in lint rules for overlint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | OL001 | `declare-override` | Requires @override on members that override an inherited member |
//! | OL002 | `single-export` | Allows only one top-level export per file |
//! | OL003 | `top-level-comment` | Requires a JSDoc comment on every top-level export |
//! | OL004 | `no-any-workaround` | Blocks the 'any' keyword and its workarounds |
//! | OL005 | `boolean-only-has-two-values` | Booleans may only be declared and assigned true or false |
//!
//! ## Usage
//!
//! ```ignore
//! use overlint_core::Analyzer;
//! use overlint_rules::{DeclareOverride, SingleExport};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(DeclareOverride::new())
//!     .rule(SingleExport::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boolean_literals;
mod declare_override;
mod no_any_workaround;
mod presets;
mod single_export;
mod top_level_comment;

pub use boolean_literals::BooleanOnlyHasTwoValues;
pub use declare_override::DeclareOverride;
pub use no_any_workaround::NoAnyWorkaround;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use single_export::SingleExport;
pub use top_level_comment::TopLevelComment;

/// Re-export core types for convenience.
pub use overlint_core::{Rule, Severity, Violation};
