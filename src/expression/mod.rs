//! Recursive-descent evaluator for integer arithmetic over named variables.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/' | '%') factor)*
//! factor     := integer | identifier | '(' expression ')'
//! ```
//!
//! Expressions are evaluated while they are parsed; no tree is built. All
//! arithmetic is two's-complement 32-bit and wraps on overflow.

mod cursor;
mod error;
pub mod formatter;
mod span;

use compact_str::CompactString;
use cursor::{Cursor, SourceChar};
pub use error::{ExpressionError, ExpressionErrorKind};
pub use span::Span;
use std::{collections::HashMap, num::Wrapping};

pub type Value = i32;
pub type Variables = HashMap<CompactString, Value>;

type Wide = Wrapping<Value>;

pub fn evaluate(text: &str, variables: &Variables) -> Result<Value, ExpressionError> {
    ExpressionEvaluator::new(text, variables).evaluate()
}

pub struct ExpressionEvaluator<'src, 'env> {
    cursor: Cursor<'src>,
    variables: &'env Variables,
}

impl<'src, 'env> ExpressionEvaluator<'src, 'env> {
    pub fn new(text: &'src str, variables: &'env Variables) -> Self {
        Self {
            cursor: Cursor::new(text),
            variables,
        }
    }

    pub fn evaluate(mut self) -> Result<Value, ExpressionError> {
        let result = self.expression()?;
        self.cursor.skip_whitespace();
        if let Some(SourceChar { offset, .. }) = self.cursor.peek() {
            return Err(ExpressionError::new(
                ExpressionErrorKind::UnexpectedTrailingInput { position: offset },
                Span::single(offset),
            ));
        }
        Ok(result.0)
    }
}

impl ExpressionEvaluator<'_, '_> {
    fn expression(&mut self) -> Result<Wide, ExpressionError> {
        let mut result = self.term()?;
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek().map(|c| c.value) {
                Some('+') => {
                    self.cursor.bump();
                    result += self.term()?;
                }
                Some('-') => {
                    self.cursor.bump();
                    result -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(result)
    }

    fn term(&mut self) -> Result<Wide, ExpressionError> {
        let mut result = self.factor()?;
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek().map(|c| c.value) {
                Some('*') => {
                    self.cursor.bump();
                    result *= self.factor()?;
                }
                Some('/') => {
                    self.cursor.bump();
                    let divisor = self.nonzero_factor(ExpressionErrorKind::DivisionByZero)?;
                    result /= divisor;
                }
                Some('%') => {
                    self.cursor.bump();
                    let divisor = self.nonzero_factor(ExpressionErrorKind::ModuloByZero)?;
                    result %= divisor;
                }
                _ => break,
            }
        }
        Ok(result)
    }

    fn nonzero_factor(&mut self, on_zero: ExpressionErrorKind) -> Result<Wide, ExpressionError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.offset();
        let divisor = self.factor()?;
        if divisor.0 == 0 {
            return Err(ExpressionError::new(
                on_zero,
                Span::between(start, self.cursor.offset()),
            ));
        }
        Ok(divisor)
    }

    fn factor(&mut self) -> Result<Wide, ExpressionError> {
        self.cursor.skip_whitespace();
        let Some(next) = self.cursor.peek() else {
            let end = self.cursor.offset();
            return Err(ExpressionError::new(
                ExpressionErrorKind::UnexpectedEnd,
                Span::new(end, 0),
            ));
        };

        match next.value {
            '(' => {
                self.cursor.bump();
                let inner = self.expression()?;
                self.cursor.skip_whitespace();
                match self.cursor.bump() {
                    Some(SourceChar { value: ')', .. }) => Ok(inner),
                    _ => Err(ExpressionError::new(
                        ExpressionErrorKind::UnclosedParenthesis,
                        Span::between(next.offset, self.cursor.offset()),
                    )),
                }
            }
            '0'..='9' => Ok(self.number()),
            'a'..='z' | 'A'..='Z' | '_' => self.variable(),
            found => Err(ExpressionError::new(
                ExpressionErrorKind::UnexpectedCharacter {
                    found,
                    position: next.offset,
                },
                Span::single(next.offset),
            )),
        }
    }

    fn number(&mut self) -> Wide {
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        digits.bytes().fold(Wrapping(0), |acc, digit| {
            acc * Wrapping(10) + Wrapping(Value::from(digit - b'0'))
        })
    }

    fn variable(&mut self) -> Result<Wide, ExpressionError> {
        let start = self.cursor.offset();
        let name = self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
        match self.variables.get(&name) {
            Some(&value) => Ok(Wrapping(value)),
            None => Err(ExpressionError::new(
                ExpressionErrorKind::UnknownVariable(name),
                Span::between(start, self.cursor.offset()),
            )),
        }
    }
}
