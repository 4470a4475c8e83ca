//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::resolver::TypeResolver;
use crate::syntax::SourceUnit;
use crate::types::{Severity, Violation};

/// A per-file lint rule over the extracted TypeScript syntax model.
///
/// Rules receive the file context, the extracted source unit, and the
/// program-wide type-resolution service. Single-pass rules ignore the
/// service; hierarchy-aware rules resolve ancestor references through it.
///
/// # Example
///
/// ```ignore
/// use overlint_core::{FileContext, Rule, Severity, SourceUnit, TypeResolver, Violation};
///
/// pub struct NoEmptyClasses;
///
/// impl Rule for NoEmptyClasses {
///     fn name(&self) -> &'static str { "no-empty-classes" }
///     fn code(&self) -> &'static str { "OL099" }
///
///     fn check(
///         &self,
///         ctx: &FileContext,
///         unit: &SourceUnit,
///         _types: &dyn TypeResolver,
///     ) -> Vec<Violation> {
///         unit.classes
///             .iter()
///             .filter(|c| c.members.is_empty())
///             .map(|c| /* ... */ unimplemented!())
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "declare-override").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "OL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    /// Override this to customize the requirement.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `unit` - The extracted syntax model of the file
    /// * `types` - The program-wide type-resolution service
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(
        &self,
        ctx: &FileContext,
        unit: &SourceUnit,
        types: &dyn TypeResolver,
    ) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
