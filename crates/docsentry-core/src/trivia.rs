//! Blank-line checks over leading trivia.
//!
//! Pure functions over a declaration's trivia list; the host's trivia
//! structures are read-only views and are never mutated.

use crate::decl::{Declaration, PrecedingToken, Span, TriviaKind};

/// Checks that a documentation block is preceded by a blank line.
///
/// Walks backward from the block, skipping whitespace. An end-of-line
/// (blank line) or `#region` marker satisfies the rule, as does sitting at
/// the start of a file or directly after an opening brace. Anything else is
/// a violation; the returned span covers the trivia immediately before the
/// block (or the block itself when no trivia precedes it).
///
/// Returns `None` when the declaration has no documentation block, or when
/// the rule is satisfied.
#[must_use]
pub fn blank_line_violation(decl: &Declaration) -> Option<Span> {
    let doc_index = decl
        .leading_trivia
        .iter()
        .rposition(|t| t.kind == TriviaKind::DocComment)?;

    let mut index = doc_index;
    while index > 0 && decl.leading_trivia[index - 1].kind == TriviaKind::Whitespace {
        index -= 1;
    }

    if index == 0 {
        return match decl.preceding_token {
            PrecedingToken::OpenBrace | PrecedingToken::StartOfFile => None,
            PrecedingToken::Other => Some(decl.leading_trivia[doc_index].span),
        };
    }

    let before = decl.leading_trivia[index - 1];
    match before.kind {
        TriviaKind::EndOfLine | TriviaKind::RegionStart => None,
        _ => Some(before.span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{DeclKind, Declaration, Trivia};

    fn decl_with_trivia(trivia: &[TriviaKind], preceding: PrecedingToken) -> Declaration {
        let mut decl = Declaration::new(DeclKind::Class, "Widget");
        decl.leading_trivia = trivia
            .iter()
            .enumerate()
            .map(|(i, &kind)| Trivia::new(kind, Span::new(i + 1, 1)))
            .collect();
        decl.preceding_token = preceding;
        decl
    }

    #[test]
    fn no_doc_block_is_never_flagged() {
        let decl = decl_with_trivia(&[TriviaKind::LineComment], PrecedingToken::Other);
        assert_eq!(blank_line_violation(&decl), None);
    }

    #[test]
    fn blank_line_before_block_passes() {
        let decl = decl_with_trivia(
            &[
                TriviaKind::EndOfLine,
                TriviaKind::Whitespace,
                TriviaKind::DocComment,
            ],
            PrecedingToken::Other,
        );
        assert_eq!(blank_line_violation(&decl), None);
    }

    #[test]
    fn region_start_before_block_passes() {
        let decl = decl_with_trivia(
            &[TriviaKind::RegionStart, TriviaKind::DocComment],
            PrecedingToken::Other,
        );
        assert_eq!(blank_line_violation(&decl), None);
    }

    #[test]
    fn open_brace_directly_before_block_passes() {
        let decl = decl_with_trivia(
            &[TriviaKind::Whitespace, TriviaKind::DocComment],
            PrecedingToken::OpenBrace,
        );
        assert_eq!(blank_line_violation(&decl), None);
    }

    #[test]
    fn start_of_file_passes() {
        let decl = decl_with_trivia(&[TriviaKind::DocComment], PrecedingToken::StartOfFile);
        assert_eq!(blank_line_violation(&decl), None);
    }

    #[test]
    fn non_blank_line_before_block_is_flagged() {
        let decl = decl_with_trivia(
            &[
                TriviaKind::LineComment,
                TriviaKind::Whitespace,
                TriviaKind::DocComment,
            ],
            PrecedingToken::Other,
        );
        // Anchored at the line comment, not the whitespace.
        assert_eq!(blank_line_violation(&decl), Some(Span::new(1, 1)));
    }

    #[test]
    fn region_end_before_block_is_flagged() {
        let decl = decl_with_trivia(
            &[TriviaKind::RegionEnd, TriviaKind::DocComment],
            PrecedingToken::Other,
        );
        assert_eq!(blank_line_violation(&decl), Some(Span::new(1, 1)));
    }

    #[test]
    fn bare_block_after_statement_is_flagged_at_the_block() {
        let decl = decl_with_trivia(&[TriviaKind::DocComment], PrecedingToken::Other);
        assert_eq!(blank_line_violation(&decl), Some(Span::new(1, 1)));
    }
}
