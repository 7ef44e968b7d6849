//! Rule requiring a blank line before documentation headers.
//!
//! # Rationale
//!
//! A header jammed against the previous statement is easy to misread as a
//! trailing comment. The first member of a block (directly after `{`) and
//! the top of a file are exempt, as is a header directly under a `#region`
//! marker.
//!
//! This rule is independent of the missing-header rules: it fires on the
//! formatting of headers that exist, documented or not.

use docsentry_core::trivia::blank_line_violation;
use docsentry_core::{FileContext, FileDump, Location, Rule, Severity, Suggestion, Violation};

/// Rule code for blank-line-before-header.
pub const CODE: &str = "DS8000";

/// Rule name for blank-line-before-header.
pub const NAME: &str = "blank-line-before-header";

/// Requires documentation headers to be preceded by a blank line.
#[derive(Debug, Clone)]
pub struct BlankLineBeforeHeader {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for BlankLineBeforeHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl BlankLineBeforeHeader {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for BlankLineBeforeHeader {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a blank line before documentation headers"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, _ctx: &FileContext, dump: &FileDump) -> Vec<Violation> {
        let mut violations = Vec::new();
        for decl in &dump.declarations {
            if let Some(span) = blank_line_violation(decl) {
                let location = Location::from_span(dump.file.clone(), span);
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location,
                        "A documentation header must be preceded by a blank line",
                    )
                    .with_suggestion(Suggestion::new(
                        "Insert a blank line before the documentation header",
                    )),
                );
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsentry_core::{
        DeclKind, Declaration, PrecedingToken, Span, Trivia, TriviaKind,
    };
    use std::path::{Path, PathBuf};

    fn run(declarations: Vec<Declaration>) -> Vec<Violation> {
        let dump = FileDump {
            file: PathBuf::from("Widget.cs"),
            declarations,
        };
        let ctx = FileContext::new(Path::new("Widget.decls.json"), Path::new("."));
        BlankLineBeforeHeader::new().check(&ctx, &dump)
    }

    fn decl(trivia: &[TriviaKind], preceding: PrecedingToken) -> Declaration {
        let mut decl = Declaration::new(DeclKind::Method, "Fetch");
        decl.leading_trivia = trivia
            .iter()
            .enumerate()
            .map(|(i, &kind)| Trivia::new(kind, Span::new(i + 1, 1)))
            .collect();
        decl.preceding_token = preceding;
        decl
    }

    #[test]
    fn header_after_open_brace_passes() {
        let violations = run(vec![decl(
            &[TriviaKind::Whitespace, TriviaKind::DocComment],
            PrecedingToken::OpenBrace,
        )]);
        assert!(violations.is_empty());
    }

    #[test]
    fn header_after_statement_is_flagged() {
        let violations = run(vec![decl(
            &[
                TriviaKind::LineComment,
                TriviaKind::Whitespace,
                TriviaKind::DocComment,
            ],
            PrecedingToken::Other,
        )]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].location.line, 1);
    }

    #[test]
    fn header_after_blank_line_passes() {
        let violations = run(vec![decl(
            &[TriviaKind::EndOfLine, TriviaKind::DocComment],
            PrecedingToken::Other,
        )]);
        assert!(violations.is_empty());
    }

    #[test]
    fn runs_independently_of_documentation_state() {
        // The declaration has a doc comment in trivia but no summary; the
        // blank-line rule still judges its placement.
        let violations = run(vec![decl(
            &[TriviaKind::Directive, TriviaKind::DocComment],
            PrecedingToken::Other,
        )]);
        assert_eq!(violations.len(), 1);
    }
}
