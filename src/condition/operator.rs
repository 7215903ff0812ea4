use crate::expression::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    EqualEqual,
    BangEqual,
    LessThanEqual,
    GreaterThanEqual,
    LessThan,
    GreaterThan,
}

impl ComparisonOperator {
    /// Tie-break order when two operators start at the same index. Two
    /// character operators come before their one character prefixes.
    pub const SEARCH_ORDER: [Self; 6] = [
        Self::EqualEqual,
        Self::BangEqual,
        Self::LessThanEqual,
        Self::GreaterThanEqual,
        Self::LessThan,
        Self::GreaterThan,
    ];

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessThanEqual => "<=",
            Self::GreaterThanEqual => ">=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
        }
    }

    pub fn compare(&self, lhs: Value, rhs: Value) -> bool {
        match self {
            Self::EqualEqual => lhs == rhs,
            Self::BangEqual => lhs != rhs,
            Self::LessThanEqual => lhs <= rhs,
            Self::GreaterThanEqual => lhs >= rhs,
            Self::LessThan => lhs < rhs,
            Self::GreaterThan => lhs > rhs,
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
