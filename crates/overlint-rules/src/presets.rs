//! Rule presets for common configurations.

use crate::{
    BooleanOnlyHasTwoValues, DeclareOverride, NoAnyWorkaround, SingleExport, TopLevelComment,
};
use overlint_core::{RuleBox, Severity};

/// Preset configurations for overlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules for maximum safety.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `declare-override` (OL001) - Requires @override on overriding members
/// - `single-export` (OL002) - One export per file
/// - `top-level-comment` (OL003) - Doc comments on exports
/// - `no-any-workaround` (OL004) - Blocks `any` and its workarounds
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DeclareOverride::new()),
        Box::new(SingleExport::new()),
        Box::new(TopLevelComment::new()),
        Box::new(NoAnyWorkaround::new()),
    ]
}

/// Returns the strict set of rules.
///
/// Includes all recommended rules plus:
/// - `top-level-comment` at error severity with a 50-character minimum
/// - `no-any-workaround` applied to declaration files as well
/// - `boolean-only-has-two-values` (OL005)
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DeclareOverride::new()),
        Box::new(SingleExport::new()),
        Box::new(
            TopLevelComment::new()
                .min_length(50)
                .severity(Severity::Error),
        ),
        Box::new(NoAnyWorkaround::new().allow_in_declarations(false)),
        Box::new(BooleanOnlyHasTwoValues::new()),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `declare-override`
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(DeclareOverride::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DeclareOverride::new()),
        Box::new(SingleExport::new()),
        Box::new(TopLevelComment::new()),
        Box::new(NoAnyWorkaround::new()),
        Box::new(BooleanOnlyHasTwoValues::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_non_empty() {
        assert!(!Preset::Recommended.rules().is_empty());
        assert!(!Preset::Strict.rules().is_empty());
        assert!(!Preset::Minimal.rules().is_empty());
    }

    #[test]
    fn all_rules_have_unique_codes() {
        let rules = all_rules();
        let mut codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), rules.len());
    }

    #[test]
    fn all_rules_snapshot() {
        let names: Vec<&str> = all_rules().iter().map(|r| r.name()).collect();
        insta::assert_debug_snapshot!(names, @r#"
        [
            "declare-override",
            "single-export",
            "top-level-comment",
            "no-any-workaround",
            "boolean-only-has-two-values",
        ]
        "#);
    }
}
