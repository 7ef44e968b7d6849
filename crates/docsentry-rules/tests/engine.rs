//! End-to-end tests: declaration dumps on disk through the full analyzer.

use docsentry_core::{Analyzer, Config, Severity};
use docsentry_rules::recommended_rules;
use std::path::Path;

const WIDGET_DUMP: &str = r#"{
  "file": "Widget.cs",
  "declarations": [
    {
      "kind": "class",
      "name": "UserRepository",
      "modifiers": ["public"],
      "parent": "namespace",
      "span": { "line": 12, "column": 18 }
    },
    {
      "kind": "method",
      "name": "Fetch",
      "modifiers": ["private"],
      "span": { "line": 20, "column": 22 }
    },
    {
      "kind": "method",
      "name": "OnClick",
      "span": { "line": 28, "column": 18 }
    },
    {
      "kind": "field",
      "modifiers": ["private", "const"],
      "span": { "line": 34, "column": 5 },
      "declarators": [
        { "name": "MaxRetries", "initializer": "5", "span": { "line": 34, "column": 23 } }
      ]
    },
    {
      "kind": "property",
      "name": "IsEnabled",
      "modifiers": ["public"],
      "span": { "line": 40, "column": 17 },
      "doc": { "has_summary": true, "span": { "line": 38, "column": 5 } },
      "has_getter": true,
      "has_setter": true,
      "is_boolean": true
    },
    {
      "kind": "method",
      "name": "Refresh",
      "modifiers": ["public"],
      "span": { "line": 50, "column": 17 },
      "doc": { "has_summary": true, "span": { "line": 48, "column": 5 } },
      "preceding_token": "other",
      "leading_trivia": [
        { "kind": "line_comment", "span": { "line": 47, "column": 5 } },
        { "kind": "whitespace", "span": { "line": 48, "column": 1 } },
        { "kind": "doc_comment", "span": { "line": 48, "column": 5 } }
      ]
    }
  ]
}"#;

fn write_dump(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write dump");
}

fn analyze(dir: &Path, config: Config) -> docsentry_core::LintResult {
    let mut builder = Analyzer::builder().root(dir).config(config);
    for rule in recommended_rules() {
        builder = builder.rule_box(rule);
    }
    builder
        .build()
        .expect("build analyzer")
        .analyze()
        .expect("analyze")
}

#[test]
fn full_pipeline_reports_expected_codes() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);

    let result = analyze(dir.path(), Config::default());
    assert_eq!(result.files_checked, 1);

    let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["DS0001", "DS1005", "DS1005", "DS4005", "DS8000"]);
}

#[test]
fn violations_carry_synthesized_fix_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);

    let result = analyze(dir.path(), Config::default());
    let fix_for = |code: &str, line: usize| -> String {
        result
            .violations
            .iter()
            .find(|v| v.code == code && v.location.line == line)
            .and_then(|v| v.suggestion.as_ref())
            .and_then(|s| s.replacement.as_ref())
            .map(|r| r.new_text.clone())
            .unwrap_or_default()
    };

    assert_eq!(fix_for("DS0001", 12), "The user repository class.");
    assert_eq!(fix_for("DS1005", 20), "Fetch.");
    assert_eq!(fix_for("DS1005", 28), "Raises the click event.");
    assert_eq!(fix_for("DS4005", 34), "The max retries (const). Value: 5.");
}

#[test]
fn documented_declarations_are_not_flagged() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);

    let result = analyze(dir.path(), Config::default());
    // IsEnabled and Refresh both have summary sections; neither appears in
    // missing-header violations (Refresh only trips the blank-line rule).
    assert!(!result
        .violations
        .iter()
        .any(|v| v.message.contains("IsEnabled") || v.message.contains("Refresh")));
}

#[test]
fn config_severity_override_applies() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);

    let config = Config::parse(
        r#"
[rules.require-class-docs]
severity = "error"
"#,
    )
    .expect("parse config");

    let result = analyze(dir.path(), config);
    assert!(result.has_errors());
    let class_violation = result
        .violations
        .iter()
        .find(|v| v.code == "DS0001")
        .expect("class violation");
    assert_eq!(class_violation.severity, Severity::Error);
}

#[test]
fn disabled_rule_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);

    let config = Config::parse(
        r#"
[rules.blank-line-before-header]
enabled = false
"#,
    )
    .expect("parse config");

    let result = analyze(dir.path(), config);
    assert!(!result.violations.iter().any(|v| v.code == "DS8000"));
}

#[test]
fn invalid_dump_is_skipped_with_warning() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);
    write_dump(dir.path(), "Broken.decls.json", "{ not json");

    let result = analyze(dir.path(), Config::default());
    // The broken dump is skipped; the good one is still checked.
    assert_eq!(result.files_checked, 1);
    assert!(!result.violations.is_empty());
}

#[test]
fn violations_are_sorted_by_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dump(dir.path(), "Widget.decls.json", WIDGET_DUMP);

    let result = analyze(dir.path(), Config::default());
    let lines: Vec<usize> = result.violations.iter().map(|v| v.location.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}
