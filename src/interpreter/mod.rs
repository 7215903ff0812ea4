pub mod error;
mod limits;
mod state;
mod tree;

use crate::block::Block;
pub use limits::{InterruptHandle, Limits, DEFAULT_MAX_ARRAY_LENGTH};
pub use state::State;
pub use tree::{TreeWalkBlockInterpreter, TreeWalkInterpreter};

/// The two calls the block editor makes into the core.
pub trait Interpreter {
    /// Runs `program` from a cleared state and returns its trace. A run that
    /// aborts ends with a single `Error: ` line after the output produced so
    /// far.
    fn run(&mut self, program: &[Block]) -> Vec<String>;

    /// Clears variables, arrays and the trace without running anything.
    fn reset(&mut self);
}
