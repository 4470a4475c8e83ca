//! Rule to require doc comments on top-level exports.
//!
//! # Rationale
//!
//! Anything a file exports should say what it is for. A `/** ... */` comment
//! directly above the export is required; optionally it must be non-empty
//! and of a minimum length, so `/** */` placeholders do not satisfy the rule.
//!
//! # Configuration
//!
//! - `forbid_empty`: Reject blank doc comments (default: true)
//! - `min_length`: Minimum comment length in characters, 0 disables (default: 0)

use overlint_core::{
    FileContext, Location, Rule, Severity, SourceUnit, Suggestion, TypeResolver, Violation,
};

/// Rule code for top-level-comment.
pub const CODE: &str = "OL003";

/// Rule name for top-level-comment.
pub const NAME: &str = "top-level-comment";

/// Failure message for a missing doc comment.
pub const FAILURE_MISSING: &str = "Top level implementations must have a JSDoc comment";

/// Failure message for a blank doc comment.
pub const FAILURE_BLANK: &str =
    "Top level implementations must have a human understandable JSDoc comment";

/// Failure message for a too-short doc comment.
pub const FAILURE_SHORT: &str =
    "Top level implementations must have a JSDoc comment of meaningful length";

/// Requires documentation comments on top-level exports.
#[derive(Debug, Clone)]
pub struct TopLevelComment {
    /// Custom severity.
    pub severity: Severity,
    /// Reject blank doc comments.
    pub forbid_empty: bool,
    /// Minimum comment length in characters; 0 disables the check.
    pub min_length: usize,
}

impl Default for TopLevelComment {
    fn default() -> Self {
        Self::new()
    }
}

impl TopLevelComment {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            forbid_empty: true,
            min_length: 0,
        }
    }

    /// Sets whether blank comments are rejected.
    #[must_use]
    pub fn forbid_empty(mut self, forbid: bool) -> Self {
        self.forbid_empty = forbid;
        self
    }

    /// Sets the minimum comment length.
    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for TopLevelComment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a JSDoc comment on every top-level export"
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
        let mut violations = Vec::new();

        for export in &unit.exports {
            let location = Location::from_span(ctx.relative_path.clone(), export.span);

            match &export.doc_comment {
                None => {
                    violations.push(
                        Violation::new(CODE, NAME, self.severity, location, FAILURE_MISSING)
                            .with_suggestion(Suggestion::new(
                                "Add a /** ... */ comment directly above the export",
                            )),
                    );
                }
                Some(text) => {
                    let text = text.trim();
                    if self.forbid_empty && text.is_empty() {
                        violations.push(Violation::new(
                            CODE,
                            NAME,
                            self.severity,
                            location,
                            FAILURE_BLANK,
                        ));
                    } else if self.min_length > 0 && text.len() < self.min_length {
                        violations.push(Violation::new(
                            CODE,
                            NAME,
                            self.severity,
                            location,
                            format!("{FAILURE_SHORT} ({} characters)", self.min_length),
                        ));
                    }
                }
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

    fn check_with(rule: &TopLevelComment, source: &str) -> Vec<Violation> {
        let unit = TypeScriptExtractor::new().analyze(source.to_owned());
        let index = ProgramIndex::new();
        let ctx = FileContext::new(Path::new("test.ts"), &unit.source, Path::new("."));
        rule.check(&ctx, &unit, &index)
    }

    fn check_source(source: &str) -> Vec<Violation> {
        check_with(&TopLevelComment::new(), source)
    }

    #[test]
    fn documented_export_is_clean() {
        let violations =
            check_source("/** Builds widgets on demand. */\nexport class Factory { }\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn missing_comment_is_flagged() {
        let violations = check_source("export class Factory { }\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, FAILURE_MISSING);
    }

    #[test]
    fn blank_comment_is_flagged() {
        let violations = check_source("/** */\nexport class Factory { }\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, FAILURE_BLANK);
    }

    #[test]
    fn blank_comment_allowed_when_configured() {
        let rule = TopLevelComment::new().forbid_empty(false);
        let violations = check_with(&rule, "/** */\nexport class Factory { }\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn short_comment_is_flagged_with_min_length() {
        let rule = TopLevelComment::new().min_length(50);
        let violations = check_with(&rule, "/** Short. */\nexport class Factory { }\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("50 characters"));
    }

    #[test]
    fn distant_comment_does_not_satisfy() {
        let violations = check_source("/** Far away. */\n\n\nexport class Factory { }\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, FAILURE_MISSING);
    }

    #[test]
    fn non_exported_declarations_are_ignored() {
        let violations = check_source("class Internal { }\nconst helper = 1;\n");
        assert!(violations.is_empty());
    }
}
