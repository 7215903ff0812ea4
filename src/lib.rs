pub mod block;
pub mod condition;
pub mod environment;
pub mod expression;
pub mod interpreter;
