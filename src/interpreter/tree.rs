use tracing::{debug, trace, warn};

use super::{
    error::RuntimeError,
    limits::{InterruptHandle, Limits},
    state::State,
    Interpreter,
};
use crate::{
    block::{Block, BlockKind, ParameterKey, Parameters},
    condition,
    environment::Environment,
    expression::{self, Value},
};

pub struct TreeWalkInterpreter {
    state: State,
    interpreter: TreeWalkBlockInterpreter,
}

impl TreeWalkInterpreter {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            state: State::default(),
            interpreter: TreeWalkBlockInterpreter::create(limits),
        }
    }

    pub fn trace(&self) -> &[String] {
        &self.state.trace
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    pub fn environment(&self) -> &Environment {
        &self.state.environment
    }

    pub fn limits(&self) -> Limits {
        self.interpreter.limits
    }

    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.interpreter.interrupt.clone()
    }
}

impl Default for TreeWalkInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter for TreeWalkInterpreter {
    #[tracing::instrument(level = "debug", skip_all, fields(blocks = program.len()))]
    fn run(&mut self, program: &[Block]) -> Vec<String> {
        self.reset();
        if let Err(error) = self.interpreter.interpret_blocks(&mut self.state, program) {
            warn!(code = error.code(), %error, "run aborted");
            self.state.halt(&error);
        }
        // An interrupt that arrived after the last loop check must not leak
        // into the next run.
        self.interpreter.interrupt.take();
        debug!(lines = self.state.trace.len(), "run finished");
        self.state.trace.clone()
    }

    fn reset(&mut self) {
        self.state.clear();
    }
}

/// Executes blocks against a [`State`] passed in by the caller.
pub struct TreeWalkBlockInterpreter {
    limits: Limits,
    interrupt: InterruptHandle,
}

impl TreeWalkBlockInterpreter {
    fn create(limits: Limits) -> Self {
        Self {
            limits,
            interrupt: InterruptHandle::new(),
        }
    }

    pub fn interpret_blocks(
        &self,
        state: &mut State,
        blocks: &[Block],
    ) -> Result<(), RuntimeError> {
        for block in blocks {
            self.interpret_block(state, block)?;
        }
        Ok(())
    }

    fn interpret_block(&self, state: &mut State, block: &Block) -> Result<(), RuntimeError> {
        debug!(kind = block.kind.name(), "interpreting block");
        let parameters = &block.parameters;
        match &block.kind {
            BlockKind::DeclareVars => self.interpret_variable_declaration(state, parameters),
            BlockKind::Assign => self.interpret_assignment(state, parameters),
            BlockKind::ArithmeticEval => self.interpret_arithmetic(state, parameters),
            BlockKind::If { body } => self.interpret_if(state, parameters, body),
            BlockKind::IfElse {
                then_branch,
                else_branch,
            } => self.interpret_if_else(state, parameters, then_branch, else_branch),
            BlockKind::While { body } => self.interpret_while(state, parameters, body),
            BlockKind::DeclareArray => self.interpret_array_declaration(state, parameters),
            BlockKind::ArrayAccess => self.interpret_array_access(state, parameters),
        }
    }

    pub fn evaluate(&self, state: &State, text: &str) -> Result<Value, RuntimeError> {
        let value = expression::evaluate(text, state.environment.variables())?;
        trace!(expression = text, value, "evaluated expression");
        Ok(value)
    }

    pub fn evaluate_condition(&self, state: &State, text: &str) -> Result<bool, RuntimeError> {
        let value = condition::evaluate(text, state.environment.variables())?;
        trace!(condition = text, value, "evaluated condition");
        Ok(value)
    }
}

// Block interpreter
impl TreeWalkBlockInterpreter {
    fn interpret_variable_declaration(
        &self,
        state: &mut State,
        parameters: &Parameters,
    ) -> Result<(), RuntimeError> {
        let names = parameters.require(ParameterKey::Names)?;
        for name in names.split(',').map(str::trim) {
            if name.is_empty() {
                return Err(RuntimeError::EmptyVariableName);
            }
            state.environment.declare(name)?;
            state.emit(format!("Declared variable: {name} = 0"));
        }
        Ok(())
    }

    fn interpret_assignment(
        &self,
        state: &mut State,
        parameters: &Parameters,
    ) -> Result<(), RuntimeError> {
        let name = parameters.require(ParameterKey::VarName)?;
        let expr = parameters.require(ParameterKey::Expression)?;
        if state.environment.access(name).is_none() {
            return Err(RuntimeError::UnknownVariable(name.into()));
        }
        let value = self.evaluate(state, expr)?;
        state.environment.assign(name, value)?;
        state.emit(format!("{name} = {value}"));
        Ok(())
    }

    fn interpret_arithmetic(
        &self,
        state: &mut State,
        parameters: &Parameters,
    ) -> Result<(), RuntimeError> {
        let expr = parameters.require(ParameterKey::Expression)?;
        let value = self.evaluate(state, expr)?;
        state.emit(format!("Result: {expr} = {value}"));
        Ok(())
    }

    fn interpret_if(
        &self,
        state: &mut State,
        parameters: &Parameters,
        body: &[Block],
    ) -> Result<(), RuntimeError> {
        let condition = parameters.require(ParameterKey::Condition)?;
        if self.evaluate_condition(state, condition)? {
            state.emit(format!("Condition '{condition}' is TRUE"));
            self.interpret_blocks(state, body)?;
        } else {
            state.emit(format!("Condition '{condition}' is FALSE"));
        }
        Ok(())
    }

    fn interpret_if_else(
        &self,
        state: &mut State,
        parameters: &Parameters,
        then_branch: &[Block],
        else_branch: &[Block],
    ) -> Result<(), RuntimeError> {
        let condition = parameters.require(ParameterKey::Condition)?;
        if self.evaluate_condition(state, condition)? {
            state.emit(format!(
                "Condition '{condition}' is TRUE (executing if branch)"
            ));
            self.interpret_blocks(state, then_branch)
        } else {
            state.emit(format!(
                "Condition '{condition}' is FALSE (executing else branch)"
            ));
            self.interpret_blocks(state, else_branch)
        }
    }

    fn interpret_while(
        &self,
        state: &mut State,
        parameters: &Parameters,
        body: &[Block],
    ) -> Result<(), RuntimeError> {
        let condition = parameters.require(ParameterKey::Condition)?;
        while self.evaluate_condition(state, condition)? {
            self.count_iteration(state)?;
            state.emit(format!("While condition '{condition}' is TRUE"));
            self.interpret_blocks(state, body)?;
        }
        state.emit(format!("While condition '{condition}' is FALSE"));
        Ok(())
    }

    fn count_iteration(&self, state: &mut State) -> Result<(), RuntimeError> {
        if self.interrupt.take() {
            return Err(RuntimeError::Interrupted);
        }
        state.iterations += 1;
        match self.limits.max_iterations {
            Some(limit) if state.iterations > limit => Err(RuntimeError::BudgetExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn interpret_array_declaration(
        &self,
        state: &mut State,
        parameters: &Parameters,
    ) -> Result<(), RuntimeError> {
        let name = parameters.require(ParameterKey::Name)?;
        let size = parameters
            .integer(ParameterKey::Size)
            .ok_or(RuntimeError::InvalidNumber(ParameterKey::Size))?;
        state
            .environment
            .declare_array(name, size, self.limits.max_array_length)?;
        state.emit(format!("Declared array: {name}[{size}]"));
        Ok(())
    }

    fn interpret_array_access(
        &self,
        state: &mut State,
        parameters: &Parameters,
    ) -> Result<(), RuntimeError> {
        let name = parameters.require(ParameterKey::ArrayName)?;
        let index = parameters
            .integer(ParameterKey::Index)
            .ok_or(RuntimeError::InvalidNumber(ParameterKey::Index))?;
        let operation = parameters.require(ParameterKey::Operation)?;

        let element = state.environment.element_mut(name, index)?;
        let line = match operation {
            "get" => format!("{name}[{index}] = {element}"),
            "set" => {
                // An unparseable value is reported the same way as a missing one.
                let value = parameters
                    .integer(ParameterKey::Value)
                    .ok_or(RuntimeError::MissingParameter(ParameterKey::Value))?;
                *element = value;
                format!("Set {name}[{index}] = {value}")
            }
            other => return Err(RuntimeError::UnknownOperation(other.into())),
        };
        state.emit(line);
        Ok(())
    }
}
