use crate::{block::ParameterKey, condition::ConditionError, expression::ExpressionError};
use compact_str::CompactString;
use thiserror::Error;

/// Every way a run can abort. Only the message reaches the trace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Missing {0}")]
    MissingParameter(ParameterKey),
    #[error("Invalid {0}")]
    InvalidNumber(ParameterKey),
    #[error("Unknown operation '{0}'")]
    UnknownOperation(CompactString),
    #[error("Empty variable name")]
    EmptyVariableName,
    #[error("Variable '{0}' already exists")]
    DuplicateVariable(CompactString),
    #[error("Array '{0}' already exists")]
    DuplicateArray(CompactString),
    #[error("Unknown variable '{0}'")]
    UnknownVariable(CompactString),
    #[error("Array '{0}' not found")]
    UnknownArray(CompactString),
    #[error("Array size must be positive")]
    NonPositiveArraySize(i32),
    #[error("Index {index} out of bounds")]
    IndexOutOfBounds { index: i32, length: usize },
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error(transparent)]
    Condition(#[from] ConditionError),
    #[error("Iteration budget of {limit} exceeded")]
    BudgetExceeded { limit: u64 },
    #[error("Execution interrupted")]
    Interrupted,
    #[error("Array size {size} exceeds the limit of {limit}")]
    ArrayTooLarge { size: i32, limit: usize },
}

impl RuntimeError {
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::MissingParameter(_) => "RT001",
            RuntimeError::InvalidNumber(_) => "RT002",
            RuntimeError::UnknownOperation(_) => "RT003",
            RuntimeError::EmptyVariableName => "RT004",
            RuntimeError::DuplicateVariable(_) => "RT005",
            RuntimeError::DuplicateArray(_) => "RT006",
            RuntimeError::UnknownVariable(_) => "RT007",
            RuntimeError::UnknownArray(_) => "RT008",
            RuntimeError::NonPositiveArraySize(_) => "RT009",
            RuntimeError::IndexOutOfBounds { .. } => "RT010",
            RuntimeError::Expression(error) => error.code(),
            RuntimeError::Condition(error) => error.code(),
            RuntimeError::BudgetExceeded { .. } => "RT011",
            RuntimeError::Interrupted => "RT012",
            RuntimeError::ArrayTooLarge { .. } => "RT013",
        }
    }
}
