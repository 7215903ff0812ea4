use crate::expression::ExpressionError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Invalid condition")]
    MissingOperator,
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}

impl ConditionError {
    pub fn code(&self) -> &'static str {
        match self {
            ConditionError::MissingOperator => "CD001",
            ConditionError::Expression(error) => error.code(),
        }
    }
}
