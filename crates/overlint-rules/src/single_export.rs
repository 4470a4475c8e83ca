//! Rule to allow only a single export per file.
//!
//! # Rationale
//!
//! One export per file keeps modules discoverable: the file name says what
//! you get. Exports inside `namespace` blocks are not counted; the namespace
//! itself is the export that matters.

use overlint_core::{
    FileContext, Location, Rule, Severity, SourceUnit, Suggestion, TypeResolver, Violation,
};

/// Rule code for single-export.
pub const CODE: &str = "OL002";

/// Rule name for single-export.
pub const NAME: &str = "single-export";

/// Failure message.
pub const FAILURE_STRING: &str = "Only one export per file is allowed";

/// Disallows more than one top-level export statement per file.
#[derive(Debug, Clone)]
pub struct SingleExport {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SingleExport {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleExport {
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

impl Rule for SingleExport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows only one top-level export per file"
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
        // The first export is fine; everything after it is flagged.
        unit.exports
            .iter()
            .skip(1)
            .map(|export| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::from_span(ctx.relative_path.clone(), export.span),
                    format!("{FAILURE_STRING} (additional {} found)", export.decl_kind),
                )
                .with_suggestion(Suggestion::new(
                    "Move this export into its own file",
                ))
            })
            .collect()
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
        SingleExport::new().check(&ctx, &unit, &index)
    }

    #[test]
    fn single_export_is_clean() {
        let violations = check_source("export class Only { }\nconst helper = 1;\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn second_export_is_flagged() {
        let violations =
            check_source("export class First { }\nexport function second(): void { }\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains(FAILURE_STRING));
        assert!(violations[0].message.contains("function_declaration"));
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn every_extra_export_is_flagged() {
        let violations = check_source(
            "export const a = 1;\nexport const b = 2;\nexport const c = 3;\n",
        );
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn namespace_internal_exports_do_not_count() {
        let violations = check_source(
            "namespace Config {\n    export const a = 1;\n    export const b = 2;\n}\nexport class Only { }\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn no_exports_is_clean() {
        let violations = check_source("const a = 1;\nfunction b(): void { }\n");
        assert!(violations.is_empty());
    }
}
