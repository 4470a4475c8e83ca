//! Rule to block `any` and its common workarounds.
//!
//! # Rationale
//!
//! The typing system is the point of TypeScript. Besides the `any` keyword
//! itself, `Object` type references and empty `{}` literals are the usual
//! escape hatches and are blocked the same way.
//!
//! # Configuration
//!
//! - `allow_in_declarations`: Skip `.d.ts` files (default: true)

use overlint_core::syntax::{walk_tree, Span};
use overlint_core::{
    FileContext, Location, Rule, Severity, SourceUnit, Suggestion, TypeResolver, Violation,
};

/// Rule code for no-any-workaround.
pub const CODE: &str = "OL004";

/// Rule name for no-any-workaround.
pub const NAME: &str = "no-any-workaround";

/// Failure message.
pub const FAILURE_STRING: &str =
    "The 'any' keyword and workarounds are blocked. Interfaces, properties and parameters must be typed.";

/// Blocks the `any` keyword, `Object` type references, and empty `{}` literals.
#[derive(Debug, Clone)]
pub struct NoAnyWorkaround {
    /// Skip `.d.ts` declaration files.
    pub allow_in_declarations: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoAnyWorkaround {
    fn default() -> Self {
        Self::new()
    }
}

impl NoAnyWorkaround {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_in_declarations: true,
            severity: Severity::Error,
        }
    }

    /// Sets whether declaration files are skipped.
    #[must_use]
    pub fn allow_in_declarations(mut self, allow: bool) -> Self {
        self.allow_in_declarations = allow;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoAnyWorkaround {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Blocks the 'any' keyword and its workarounds"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(
        &self,
        ctx: &FileContext,
        unit: &SourceUnit,
        _types: &dyn TypeResolver,
    ) -> Vec<Violation> {
        // Declaration files describe foreign code and often cannot avoid any.
        if self.allow_in_declarations && ctx.is_declaration {
            return Vec::new();
        }

        let mut violations = Vec::new();

        walk_tree(unit.root_node(), &mut |node| {
            let flagged = match node.kind() {
                "predefined_type" => unit.text(&node) == "any",
                "type_identifier" => unit.text(&node) == "Object",
                "object" | "object_type" => matches!(unit.text(&node), "{}" | "{ }"),
                _ => false,
            };

            if flagged {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.relative_path.clone(), Span::of(&node)),
                        FAILURE_STRING,
                    )
                    .with_suggestion(Suggestion::new(
                        "Declare a concrete interface or type alias instead",
                    )),
                );
            }
        });

        violations
    }
}
