//! End-to-end tests: analyzer + declare-override over real files on disk.

use overlint_core::{Analyzer, Config, Severity};
use overlint_rules::DeclareOverride;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("write source file");
}

fn analyze(dir: &TempDir) -> overlint_core::LintResult {
    Analyzer::builder()
        .root(dir.path())
        .rule(DeclareOverride::new())
        .build()
        .expect("build analyzer")
        .analyze()
        .expect("analyze")
}

#[test]
fn ancestor_in_sibling_file_is_seen() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "base.ts",
        "export class Base {\n    area(): number { return 1; }\n}\n",
    );
    write(
        &dir,
        "derived.ts",
        "export class Derived extends Base {\n    area(): number { return 2; }\n}\n",
    );

    let result = analyze(&dir);
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].message, "Missing override decorator");
    assert!(result.violations[0]
        .location
        .file
        .to_string_lossy()
        .contains("derived.ts"));
}

#[test]
fn decorated_hierarchy_is_clean() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "shapes.ts",
        r"
class Shape {
    area(): number { return 0; }
}
class Circle extends Shape {
    @override area(): number { return 3; }
}
",
    );

    let result = analyze(&dir);
    assert!(result.violations.is_empty());
}

#[test]
fn allow_directive_with_reason_suppresses() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "app.ts",
        r#"
class Base {
    foo(): void { }
}
class Derived extends Base {
    // overlint: allow(declare-override) reason="generated shim"
    foo(): void { }
}
"#,
    );

    let result = analyze(&dir);
    assert!(result.violations.is_empty());
}

#[test]
fn allow_directive_without_reason_downgrades_to_warning() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "app.ts",
        r"
class Base {
    foo(): void { }
}
class Derived extends Base {
    // overlint: allow(declare-override)
    foo(): void { }
}
",
    );

    let result = analyze(&dir);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert!(result.violations[0]
        .message
        .contains("missing required reason"));
}

#[test]
fn disabled_rule_produces_nothing() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "app.ts",
        "class Base {\n    foo(): void { }\n}\nclass Derived extends Base {\n    foo(): void { }\n}\n",
    );

    let config = Config::parse("[rules.declare-override]\nenabled = false\n").expect("config");
    let result = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .rule(DeclareOverride::new())
        .build()
        .expect("build analyzer")
        .analyze()
        .expect("analyze");

    assert!(result.violations.is_empty());
}

#[test]
fn severity_override_applies() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "app.ts",
        "class Standalone {\n    @override bar(): void { }\n}\n",
    );

    let config =
        Config::parse("[rules.declare-override]\nseverity = \"info\"\n").expect("config");
    let result = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .rule(DeclareOverride::new())
        .build()
        .expect("build analyzer")
        .analyze()
        .expect("analyze");

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Info);
}

#[test]
fn unparsable_file_is_skipped_not_fatal() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "broken.ts", "class {{{{\n");
    write(
        &dir,
        "ok.ts",
        "class Standalone {\n    @override bar(): void { }\n}\n",
    );

    let result = analyze(&dir);
    // Only the parsable file is checked; analysis of the rest survives.
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn violations_are_sorted_by_file_and_line() {
    let dir = TempDir::new().expect("tempdir");
    write(
        &dir,
        "b.ts",
        "class S1 {\n    @override a(): void { }\n    @override b(): void { }\n}\n",
    );
    write(&dir, "a.ts", "class S2 {\n    @override c(): void { }\n}\n");

    let result = analyze(&dir);
    assert_eq!(result.violations.len(), 3);
    let files: Vec<String> = result
        .violations
        .iter()
        .map(|v| v.location.file.to_string_lossy().into_owned())
        .collect();
    assert!(files[0].contains("a.ts"));
    assert!(files[1].contains("b.ts"));
    assert!(result.violations[1].location.line <= result.violations[2].location.line);
}
