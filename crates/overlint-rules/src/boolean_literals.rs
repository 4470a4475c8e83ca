//! Rule to keep booleans two-valued.
//!
//! # Rationale
//!
//! A boolean has two values. Declaring or assigning `null`/`undefined` to a
//! `boolean`-annotated variable smuggles in a third state that every reader
//! then has to defend against.
//!
//! Assignment checking is file-local: a variable must be declared with a
//! `boolean` annotation in the same file for later assignments to be
//! checked.

use std::collections::HashSet;

use overlint_core::{
    FileContext, Location, Rule, Severity, SourceUnit, Suggestion, TypeResolver, Violation,
};

/// Rule code for boolean-only-has-two-values.
pub const CODE: &str = "OL005";

/// Rule name for boolean-only-has-two-values.
pub const NAME: &str = "boolean-only-has-two-values";

/// Failure message for a declaration initialized with null/undefined.
pub const FAILURE_DECLARATION: &str =
    "A variable declaration of a Boolean may only be true or false.";

/// Failure message for an assignment of null/undefined.
pub const FAILURE_ASSIGNMENT: &str = "Booleans may only have true or false assigned to them.";

/// Forbids `null`/`undefined` in `boolean` declarations and assignments.
#[derive(Debug, Clone)]
pub struct BooleanOnlyHasTwoValues {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for BooleanOnlyHasTwoValues {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanOnlyHasTwoValues {
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

impl Rule for BooleanOnlyHasTwoValues {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Booleans may only be declared and assigned true or false"
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
        let declared: HashSet<&str> = unit
            .boolean_vars
            .iter()
            .map(|v| v.name.as_str())
            .collect();

        let mut violations = Vec::new();

        for var in &unit.boolean_vars {
            if var.null_initializer {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.relative_path.clone(), var.span),
                        FAILURE_DECLARATION,
                    )
                    .with_suggestion(Suggestion::new("Initialize with true or false")),
                );
            }
        }

        for assign in &unit.null_assigns {
            if declared.contains(assign.name.as_str()) {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.relative_path.clone(), assign.span),
                        FAILURE_ASSIGNMENT,
                    )
                    .with_suggestion(Suggestion::new("Assign true or false")),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlint_core::{ProgramIndex, TypeScriptExtractor};
    use std::path::Path;

    fn check_source(source: &str) -> Vec<Violation> {
        let unit = TypeScriptExtractor::new().analyze(source.to_owned());
        let index = ProgramIndex::new();
        let ctx = FileContext::new(Path::new("test.ts"), &unit.source, Path::new("."));
        BooleanOnlyHasTwoValues::new().check(&ctx, &unit, &index)
    }

    #[test]
    fn true_false_declarations_are_clean() {
        let violations = check_source("let a: boolean = true;\nlet b: boolean = false;\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn null_declaration_is_flagged() {
        let violations = check_source("let flag: boolean = null;\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, FAILURE_DECLARATION);
    }

    #[test]
    fn undefined_declaration_is_flagged() {
        let violations = check_source("let flag: boolean = undefined;\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, FAILURE_DECLARATION);
    }

    #[test]
    fn null_assignment_to_declared_boolean_is_flagged() {
        let violations = check_source("let flag: boolean = true;\nflag = null;\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, FAILURE_ASSIGNMENT);
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn null_assignment_to_other_types_is_ignored() {
        let violations = check_source("let name: string = 'x';\nname = null;\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn unannotated_variables_are_ignored() {
        let violations = check_source("let flag = true;\nflag = null;\n");
        assert!(violations.is_empty());
    }
}
