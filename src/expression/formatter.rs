use super::error::{ExpressionError, ExpressionErrorKind};
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};

const ARIADNE_MSG: &str = "Ariadne produces valid utf-8 strings";
const ARIADNE_WRITE_MSG: &str = "Write into buffer should not fail.";

pub trait ExpressionErrorFormatter {
    fn format_error(&self, error: &ExpressionError) -> String;
}

pub struct DebugFormatter;

impl ExpressionErrorFormatter for DebugFormatter {
    fn format_error(&self, error: &ExpressionError) -> String {
        format!("{error:?}")
    }
}

/// Renders the same text the interpreter writes into its trace.
pub struct BasicFormatter;

impl ExpressionErrorFormatter for BasicFormatter {
    fn format_error(&self, error: &ExpressionError) -> String {
        format!("{error}")
    }
}

pub struct PrettyFormatter<'src> {
    text: &'src str,
    name: &'src str,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, name: &'src str) -> Self {
        Self { text, name }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Writes a single-label report over `span` into a string.
    pub(crate) fn render(
        &self,
        code: &str,
        message: &str,
        span: std::ops::Range<usize>,
        label: String,
    ) -> String {
        let name = self.name;
        let mut output = std::io::Cursor::new(Vec::new());
        Report::build(ReportKind::Error, (name, span.clone()))
            .with_code(code)
            .with_message(message)
            .with_label(
                Label::new((name, span))
                    .with_message(label)
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((name, Source::from(self.text)), &mut output)
            .expect(ARIADNE_WRITE_MSG);
        String::from_utf8(output.into_inner()).expect(ARIADNE_MSG)
    }
}

impl ExpressionErrorFormatter for PrettyFormatter<'_> {
    fn format_error(&self, error: &ExpressionError) -> String {
        let span = error.span.range();
        let (message, label) = match &error.kind {
            ExpressionErrorKind::UnexpectedEnd => (
                "Expression ended early",
                "Expected a number, a variable or `(` here".to_string(),
            ),
            ExpressionErrorKind::UnexpectedCharacter { found, .. } => (
                "Encountered a character that cannot start a factor",
                format!(
                    "{} is not a number, a variable or `(`",
                    found.fg(Color::BrightRed)
                ),
            ),
            ExpressionErrorKind::UnexpectedTrailingInput { .. } => (
                "Expression continues after a complete parse",
                "Unexpected input starts here".to_string(),
            ),
            ExpressionErrorKind::UnclosedParenthesis => (
                "Missing closing parenthesis",
                "This group is never closed".to_string(),
            ),
            ExpressionErrorKind::UnknownVariable(name) => (
                "Attempted to read a variable that has not been declared",
                format!("{} has not been declared", name.fg(Color::BrightYellow)),
            ),
            ExpressionErrorKind::DivisionByZero => (
                "Division by zero",
                "This divisor evaluates to zero".to_string(),
            ),
            ExpressionErrorKind::ModuloByZero => (
                "Modulo by zero",
                "This divisor evaluates to zero".to_string(),
            ),
        };
        self.render(error.code(), message, span, label)
    }
}
