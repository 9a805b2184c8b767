//! Test helpers shared by the laxml crates.
//!
//! Sources can be annotated with caret lines that point at the span a diagnostic is
//! expected on, followed by the diagnostic's kind name:
//!
//! ```text
//! <a></b></a>
//!    ^^^^ MismatchedCloseTag
//! ```
//!
//! Caret columns are relative to the closest preceding source line.

use std::ops::Range;

use similar::TextDiff;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything. Honors
/// `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A diagnostic produced by the code under test, reduced to span and kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualDiagnostic {
    /// Byte range in the source without annotations.
    pub span: Range<usize>,
    /// Name of the diagnostic kind, as written in annotations.
    pub kind: String,
}

/// An annotation line: leading spaces, carets, then a kind name.
struct Annotation<'a> {
    column: usize,
    width: usize,
    kind: &'a str,
}

fn parse_annotation(line: &str) -> Option<Annotation<'_>> {
    let column = line.len() - line.trim_start_matches(' ').len();
    let rest = &line[column..];
    let width = rest.len() - rest.trim_start_matches('^').len();
    if width == 0 {
        return None;
    }
    let kind = rest[width..].trim();
    if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(Annotation {
        column,
        width,
        kind,
    })
}

/// Split an annotated source into the plain source and its expected diagnostics.
///
/// A blank first line is dropped so raw string literals can start on their own line.
fn split_annotations(annotated: &str) -> (String, Vec<ActualDiagnostic>) {
    let mut lines = annotated.lines().peekable();
    if lines.peek().is_some_and(|l| l.trim().is_empty()) {
        lines.next();
    }

    let mut source_lines: Vec<&str> = Vec::new();
    let mut expected = Vec::new();
    let mut offset = 0;
    let mut last_line_start = 0;

    for line in lines {
        if let Some(annotation) = parse_annotation(line) {
            let start = last_line_start + annotation.column;
            expected.push(ActualDiagnostic {
                span: start..start + annotation.width,
                kind: annotation.kind.to_string(),
            });
            continue;
        }
        last_line_start = offset;
        offset += line.len() + 1;
        source_lines.push(line);
    }

    (source_lines.join("\n"), expected)
}

/// The source text with annotation lines removed.
pub fn source_without_annotations(annotated: &str) -> String {
    split_annotations(annotated).0
}

/// The diagnostics an annotated source expects.
pub fn expected_diagnostics(annotated: &str) -> Vec<ActualDiagnostic> {
    split_annotations(annotated).1
}

fn sort(diagnostics: &mut [ActualDiagnostic]) {
    diagnostics.sort_by(|a, b| {
        (a.span.start, a.span.end, &a.kind).cmp(&(b.span.start, b.span.end, &b.kind))
    });
}

fn render(diagnostics: &[ActualDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}..{} {}\n", d.span.start, d.span.end, d.kind))
        .collect()
}

/// Assert that `actual` matches the annotations in `annotated`, ignoring order.
///
/// # Panics
/// Panics with a diff of expected vs actual diagnostics when they differ.
pub fn assert_annotated_diagnostics(annotated: &str, mut actual: Vec<ActualDiagnostic>) {
    let mut expected = expected_diagnostics(annotated);
    sort(&mut expected);
    sort(&mut actual);
    if expected == actual {
        return;
    }

    let expected = render(&expected);
    let actual = render(&actual);
    let diff = TextDiff::from_lines(&expected, &actual)
        .unified_diff()
        .header("expected", "actual")
        .to_string();
    panic!(
        "diagnostics do not match annotations\nsource:\n{}\n{}",
        source_without_annotations(annotated),
        diff
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_annotations() {
        let annotated = r#"
<a></b></a>
   ^^^^ MismatchedCloseTag
"#;
        assert_eq!(source_without_annotations(annotated), "<a></b></a>");
        assert_eq!(
            expected_diagnostics(annotated),
            vec![ActualDiagnostic {
                span: 3..7,
                kind: "MismatchedCloseTag".to_string(),
            }]
        );
    }

    #[test]
    fn test_annotation_on_second_line() {
        let annotated = "x\n</b>\n^^^^ StrayCloseTag";
        assert_eq!(source_without_annotations(annotated), "x\n</b>");
        assert_eq!(expected_diagnostics(annotated)[0].span, 2..6);
    }

    #[test]
    fn test_caret_text_is_not_an_annotation() {
        assert!(expected_diagnostics("a ^ b").is_empty());
        assert!(expected_diagnostics("^^^").is_empty());
    }

    #[test]
    #[should_panic(expected = "diagnostics do not match annotations")]
    fn test_mismatch_panics() {
        assert_annotated_diagnostics("<a>\n^^^ UnclosedElement", Vec::new());
    }
}
