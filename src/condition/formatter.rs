use super::{ComparisonOperator, ConditionError};
use crate::expression::formatter::{
    BasicFormatter, DebugFormatter, ExpressionErrorFormatter, PrettyFormatter,
};
use ariadne::{Color, Fmt};

pub trait ConditionErrorFormatter {
    fn format_condition_error(&self, error: &ConditionError) -> String;
}

impl ConditionErrorFormatter for DebugFormatter {
    fn format_condition_error(&self, error: &ConditionError) -> String {
        format!("{error:?}")
    }
}

impl ConditionErrorFormatter for BasicFormatter {
    fn format_condition_error(&self, error: &ConditionError) -> String {
        format!("{error}")
    }
}

impl ConditionErrorFormatter for PrettyFormatter<'_> {
    fn format_condition_error(&self, error: &ConditionError) -> String {
        match error {
            ConditionError::MissingOperator => {
                let operators = ComparisonOperator::SEARCH_ORDER
                    .map(|operator| format!("{}", operator.symbol().fg(Color::BrightCyan)))
                    .join(" ");
                self.render(
                    error.code(),
                    "Condition does not contain a comparison operator",
                    0..self.text().chars().count(),
                    format!("Expected one of {operators}"),
                )
            }
            ConditionError::Expression(error) => self.format_error(error),
        }
    }
}
