//! Diagnostic rendering for recovered markup problems.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};
use laxml_parse::{Recovery, RecoveryKind, Span};

/// A markup problem with source location.
///
/// Lenient parsing never fails; these are produced from the tree builder's
/// recoveries by [`crate::Document::parse_with_diagnostics`] and
/// [`crate::Document::parse_strict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of problem.
    pub kind: RecoveryKind,
    /// Source location.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: RecoveryKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        if self.write_report(filename, source, &mut output).is_err() {
            return self.to_string();
        }
        String::from_utf8(output).unwrap_or_else(|_| self.to_string())
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(
        &self,
        filename: &str,
        source: &str,
        writer: W,
    ) -> std::io::Result<()> {
        self.build_report(filename)
            .finish()
            .write((filename, Source::from(source)), writer)
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();
        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(self.kind.to_string());

        match &self.kind {
            RecoveryKind::StrayCloseTag { name } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("no element is open here")
                        .with_color(Color::Red),
                )
                .with_help(format!("remove it, or add `<{}>` before it", name)),

            RecoveryKind::MismatchedCloseTag { expected, .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("`<{}>` is still open", expected))
                        .with_color(Color::Red),
                )
                .with_help(format!("close the inner element first with `</{}>`", expected)),

            RecoveryKind::UnclosedElement { name } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("opened here")
                        .with_color(Color::Red),
                )
                .with_help(format!("add a closing `</{}>`", name)),

            RecoveryKind::DiscardedText => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("this text is dropped")
                        .with_color(Color::Yellow),
                )
                .with_help("text is only kept inside an element"),

            RecoveryKind::StrayAngleBracket => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("kept as text")
                        .with_color(Color::Yellow),
                )
                .with_help("a tag starts with `<` followed by a letter, or `</` for a close tag"),
        }
    }
}

impl From<Recovery> for ParseError {
    fn from(recovery: Recovery) -> Self {
        Self::new(recovery.kind, recovery.span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.span.start)
    }
}

impl std::error::Error for ParseError {}

/// Every problem found while strictly parsing a document. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors {
    errors: Vec<ParseError>,
}

impl ParseErrors {
    /// Wrap a list of errors, or `None` if there are none.
    pub fn new(errors: Vec<ParseError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The errors, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// The first error.
    pub fn first(&self) -> &ParseError {
        &self.errors[0]
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render every error with ariadne, one report after another.
    pub fn render(&self, filename: &str, source: &str) -> String {
        self.errors
            .iter()
            .map(|e| e.render(filename, source))
            .collect()
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first())?;
        if self.len() > 1 {
            write!(f, " (and {} more)", self.len() - 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(source: &str) -> Vec<ParseError> {
        let (_, recoveries) = laxml_parse::parse_with_recoveries(source);
        recoveries.into_iter().map(ParseError::from).collect()
    }

    fn stripped(rendered: String) -> String {
        String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap()
    }

    #[test]
    fn test_display() {
        let errors = errors("<a></b></a>");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "close tag `</b>` does not match open element `<a>` at offset 3"
        );
    }

    #[test]
    fn test_mismatched_close_tag_diagnostic() {
        let source = "<a>\n  <b>text</a>\n</b></a>";
        let errors = errors(source);
        let rendered = stripped(errors[0].render("test.xml", source));
        assert!(rendered.contains("close tag `</a>` does not match open element `<b>`"));
        assert!(rendered.contains("test.xml"));
        assert!(rendered.contains("`<b>` is still open"));
        assert!(rendered.contains("close the inner element first with `</b>`"));
    }

    #[test]
    fn test_unclosed_element_diagnostic() {
        let source = "<server host=\"localhost\">\n  <port>80</port>";
        let errors = errors(source);
        assert_eq!(errors.len(), 1);
        let rendered = stripped(errors[0].render("test.xml", source));
        assert!(rendered.contains("unclosed element `<server>`"));
        assert!(rendered.contains("opened here"));
        assert!(rendered.contains("add a closing `</server>`"));
    }

    #[test]
    fn test_discarded_text_diagnostic() {
        let source = "hello <a/>";
        let rendered = stripped(errors(source)[0].render("test.xml", source));
        assert!(rendered.contains("text outside of any element"));
        assert!(rendered.contains("this text is dropped"));
    }

    #[test]
    fn test_parse_errors_display() {
        let all = ParseErrors::new(errors("</x></y>")).unwrap();
        assert_eq!(all.len(), 2);
        assert!(!all.is_empty());
        assert_eq!(all.to_string(), "stray close tag `</x>` at offset 0 (and 1 more)");
        assert!(ParseErrors::new(Vec::new()).is_none());
    }

    #[test]
    fn test_parse_errors_render_all() {
        let source = "</x></y>";
        let all = ParseErrors::new(errors(source)).unwrap();
        let rendered = stripped(all.render("test.xml", source));
        assert!(rendered.contains("`</x>`"));
        assert!(rendered.contains("`</y>`"));
    }
}
