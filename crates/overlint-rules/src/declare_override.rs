//! Rule to require the `@override` decorator on overriding members.
//!
//! # Rationale
//!
//! When a derived class redeclares a method or property inherited from an
//! ancestor, the author must state the intent with an `@override` decorator.
//! The inverse holds too: a decorator on a member that overrides nothing is
//! flagged, since it documents a relationship that does not exist.
//!
//! Inherited names are collected recursively up the whole `extends` chain,
//! excluding constructors and static members at every level, so a member
//! declared only on a distant ancestor is still recognized as overridden.
//!
//! # Suppression
//!
//! - `// overlint: allow(declare-override) reason="..."` comment

use overlint_core::{
    FileContext, HierarchyResolver, Location, Rule, Severity, SourceUnit, Suggestion,
    TypeResolver, Violation,
};
use tracing::trace;

/// Rule code for declare-override.
pub const CODE: &str = "OL001";

/// Rule name for declare-override.
pub const NAME: &str = "declare-override";

/// Failure message for an overriding member with no decorator.
pub const MISSING_OVERRIDE: &str = "Missing override decorator";

/// Failure message for a decorated member that overrides nothing.
pub const UNNECESSARY_OVERRIDE: &str = "Unnecessary override decorator";

/// Decorator text that marks an intentional override. Matched purely
/// syntactically; the decorator itself carries no runtime behavior.
const OVERRIDE_MARKER: &str = "@override";

/// Requires `@override` on members that override an inherited member, and
/// forbids it on members that do not.
#[derive(Debug, Clone)]
pub struct DeclareOverride {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for DeclareOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclareOverride {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for DeclareOverride {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Overrides must be declared with an @override decorator"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(
        &self,
        ctx: &FileContext,
        unit: &SourceUnit,
        types: &dyn TypeResolver,
    ) -> Vec<Violation> {
        // The member-name cache is shared across every class in this file,
        // so sibling classes extending the same ancestor resolve it once.
        let mut hierarchy = HierarchyResolver::new(types);
        let mut violations = Vec::new();

        for class in &unit.classes {
            // Each class is its own scope; nested classes resolve their own
            // ancestor chain and never see the enclosing class's set.
            let inherited = match &class.extends {
                Some(reference) => hierarchy.inherited_members(reference),
                None => HierarchyResolver::empty(),
            };

            trace!(
                class = class.name.as_deref().unwrap_or("<anonymous>"),
                inherited = inherited.len(),
                "reconciling class members"
            );

            for member in &class.members {
                // Constructors are never overrides.
                if member.is_constructor {
                    continue;
                }

                let declared = member.has_decorator(OVERRIDE_MARKER);
                let overrides = inherited.contains(&member.name);
                if declared == overrides {
                    continue;
                }

                let location = Location::from_span(ctx.relative_path.clone(), member.span);
                let violation = if overrides {
                    let parent = class
                        .extends
                        .as_ref()
                        .map_or(String::new(), |e| e.name.clone());
                    Violation::new(CODE, NAME, self.severity, location, MISSING_OVERRIDE)
                        .with_suggestion(Suggestion::new(format!(
                            "Mark `{}` with @override; it overrides a member inherited from `{parent}`",
                            member.name
                        )))
                } else {
                    Violation::new(CODE, NAME, self.severity, location, UNNECESSARY_OVERRIDE)
                        .with_suggestion(Suggestion::new(format!(
                            "Remove @override from `{}`; no ancestor declares a member with that name",
                            member.name
                        )))
                };
                violations.push(violation);
            }
        }

        violations
    }
}
