use super::error::RuntimeError;
use crate::environment::Environment;

/// Everything a run mutates. Cleared at the start of every run.
#[derive(Debug, Default)]
pub struct State {
    pub environment: Environment,
    pub trace: Vec<String>,
    pub halted: bool,
    pub iterations: u64,
}

impl State {
    pub fn emit(&mut self, line: String) {
        self.trace.push(line);
    }

    pub fn halt(&mut self, error: &RuntimeError) {
        self.halted = true;
        self.trace.push(format!("Error: {error}"));
    }

    pub fn clear(&mut self) {
        self.environment.clear();
        self.trace.clear();
        self.halted = false;
        self.iterations = 0;
    }
}
