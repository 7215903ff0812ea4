use super::span::Span;
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionErrorKind {
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unexpected character at position {position}")]
    UnexpectedTrailingInput { position: usize },
    #[error("Missing closing parenthesis")]
    UnclosedParenthesis,
    #[error("Unknown variable '{0}'")]
    UnknownVariable(CompactString),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ExpressionError {
    pub kind: ExpressionErrorKind,
    pub span: Span,
}

impl ExpressionError {
    pub fn new(kind: ExpressionErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Moves the span by `offset` characters. The message is left untouched so
    /// positions stay relative to the text that was evaluated.
    pub fn shifted(self, offset: usize) -> Self {
        Self {
            kind: self.kind,
            span: self.span.shifted(offset),
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ExpressionErrorKind::UnexpectedEnd => "EX001",
            ExpressionErrorKind::UnexpectedCharacter { .. } => "EX002",
            ExpressionErrorKind::UnexpectedTrailingInput { .. } => "EX003",
            ExpressionErrorKind::UnclosedParenthesis => "EX004",
            ExpressionErrorKind::UnknownVariable(_) => "EX005",
            ExpressionErrorKind::DivisionByZero => "EX006",
            ExpressionErrorKind::ModuloByZero => "EX007",
        }
    }
}
