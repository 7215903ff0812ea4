//! Comparison conditions of the form `<expression> <operator> <expression>`.
//!
//! The text is split around the earliest comparison operator it contains and
//! both sides are evaluated as expressions. Only that first occurrence is
//! considered, so logical connectives and parenthesised sub-conditions are
//! not part of the language.

mod error;
pub mod formatter;
mod operator;

pub use error::ConditionError;
pub use operator::ComparisonOperator;

use crate::expression::{self, Variables};

pub fn evaluate(text: &str, variables: &Variables) -> Result<bool, ConditionError> {
    Comparison::split(text)?.evaluate(variables)
}

/// A condition split into its two operand texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<'src> {
    pub lhs: &'src str,
    pub operator: ComparisonOperator,
    pub rhs: &'src str,
    // Character offsets of the trimmed operands within the whole condition.
    lhs_offset: usize,
    rhs_offset: usize,
}

impl<'src> Comparison<'src> {
    pub fn split(text: &'src str) -> Result<Self, ConditionError> {
        let (index, operator) = ComparisonOperator::SEARCH_ORDER
            .iter()
            .filter_map(|operator| text.find(operator.symbol()).map(|index| (index, *operator)))
            .min_by_key(|(index, _)| *index)
            .ok_or(ConditionError::MissingOperator)?;

        let rhs_start = index + operator.symbol().len();
        let (lhs, lhs_byte) = trim_with_offset(&text[..index], 0);
        let (rhs, rhs_byte) = trim_with_offset(&text[rhs_start..], rhs_start);

        Ok(Self {
            lhs,
            operator,
            rhs,
            lhs_offset: text[..lhs_byte].chars().count(),
            rhs_offset: text[..rhs_byte].chars().count(),
        })
    }

    pub fn evaluate(&self, variables: &Variables) -> Result<bool, ConditionError> {
        let lhs = expression::evaluate(self.lhs, variables)
            .map_err(|error| error.shifted(self.lhs_offset))?;
        let rhs = expression::evaluate(self.rhs, variables)
            .map_err(|error| error.shifted(self.rhs_offset))?;
        Ok(self.operator.compare(lhs, rhs))
    }
}

/// Trims `part` and returns it with the byte offset of its first kept
/// character, given that `part` starts at byte `base` of the whole text.
fn trim_with_offset(part: &str, base: usize) -> (&str, usize) {
    let leading = part.len() - part.trim_start().len();
    (part.trim(), base + leading)
}

#[cfg(test)]
mod tests {
    use super::{Comparison, ComparisonOperator};

    #[test]
    fn two_character_operator_wins_tie_with_its_prefix() {
        let comparison = Comparison::split("x <= 3").unwrap();
        assert_eq!(comparison.operator, ComparisonOperator::LessThanEqual);
        assert_eq!((comparison.lhs, comparison.rhs), ("x", "3"));
    }

    #[test]
    fn earliest_operator_is_used() {
        let comparison = Comparison::split("a > b == c").unwrap();
        assert_eq!(comparison.operator, ComparisonOperator::GreaterThan);
        assert_eq!(comparison.rhs, "b == c");
    }

    #[test]
    fn operand_offsets_skip_whitespace() {
        let comparison = Comparison::split("  a + 1 !=   b").unwrap();
        assert_eq!(comparison.lhs_offset, 2);
        assert_eq!(comparison.rhs_offset, 13);
    }
}
