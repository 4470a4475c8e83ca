//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // overlint: allow(declare-override) reason="generated shim"
//! ```

use std::collections::HashSet;

use crate::types::{Severity, Suggestion, Violation};

/// State of allowance for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowState {
    /// Rule is not allowed (default).
    Denied,
    /// Rule is explicitly allowed.
    Allowed,
}

impl AllowState {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

/// Checks source code for allowance comments.
///
/// Looks for comments in the format:
/// ```text
/// // overlint: allow(rule1, rule2) reason="explanation"
/// ```
///
/// # Arguments
///
/// * `content` - Source code content
/// * `line` - Line number to check (1-indexed)
/// * `rule_name` - Name of the rule to check for
///
/// # Returns
///
/// `AllowState::Allowed` if an allowance directive is found for the rule.
#[must_use]
pub fn check_allow_comment(content: &str, line: usize, rule_name: &str) -> AllowState {
    match check_allow_with_reason(content, line, rule_name) {
        AllowCheck::Allowed { .. } => AllowState::Allowed,
        AllowCheck::Denied => AllowState::Denied,
    }
}

/// Checks source code for allowance comments with reason.
///
/// The directive may sit on the offending line or the line directly above.
///
/// # Returns
///
/// `AllowCheck::Allowed` with optional reason if an allowance directive is found.
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        let line_content = lines[check_line - 1];
        if let Some(directive) = parse_allow_directive(line_content) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Filters a rule's violations through any allowance directives in the file.
///
/// Allowed violations are dropped; when a rule requires a reason and the
/// directive has none, the violation is replaced by a warning about the
/// directive itself.
#[must_use]
pub fn apply_allowances(
    content: &str,
    rule_name: &str,
    requires_reason: bool,
    violations: Vec<Violation>,
) -> Vec<Violation> {
    let mut kept = Vec::with_capacity(violations.len());

    for violation in violations {
        let check = check_allow_with_reason(content, violation.location.line, rule_name);
        match check {
            AllowCheck::Denied => kept.push(violation),
            AllowCheck::Allowed { reason } => {
                if requires_reason && reason.is_none() {
                    kept.push(
                        Violation::new(
                            violation.code.clone(),
                            violation.rule.clone(),
                            Severity::Warning,
                            violation.location.clone(),
                            format!(
                                "Allow directive for '{rule_name}' is missing required reason"
                            ),
                        )
                        .with_suggestion(Suggestion::new(
                            "Add reason=\"...\" to explain why this exception is necessary",
                        )),
                    );
                }
            }
        }
    }

    kept
}

/// Parses an allowance directive from a comment line.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let line = line.trim();

    // Accept both // and /* */ comment styles; directives are single-line.
    let comment_content = if let Some(rest) = line.strip_prefix("//") {
        rest.trim()
    } else if let Some(rest) = line.strip_prefix("/*") {
        rest.trim_end_matches("*/").trim()
    } else {
        return None;
    };

    let directive = comment_content.strip_prefix("overlint:")?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules_str = &allow_content[..paren_end];

    let rules: HashSet<String> = rules_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = &allow_content[paren_end + 1..].trim();
    let reason = if let Some(reason_part) = rest.strip_prefix("reason=") {
        let reason_part = reason_part.trim();
        if reason_part.starts_with('"') && reason_part.len() > 1 {
            let end = reason_part[1..].find('"').map(|i| i + 1)?;
            Some(reason_part[1..end].to_string())
        } else {
            None
        }
    } else {
        None
    };

    Some(AllowDirective { rules, reason })
}
