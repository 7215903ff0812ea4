//! The program tree handed to the interpreter by the block editor.

mod parameters;

use compact_str::CompactString;
pub use parameters::{ParameterKey, Parameters};
use serde::{Deserialize, Serialize};

pub type Program = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub kind: BlockKind,
    #[serde(default)]
    pub parameters: Parameters,
}

/// Control blocks own their child lists; `IfElse` keeps its two branches
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BlockKind {
    DeclareVars,
    Assign,
    ArithmeticEval,
    If {
        #[serde(default)]
        body: Vec<Block>,
    },
    IfElse {
        #[serde(default)]
        then_branch: Vec<Block>,
        #[serde(default)]
        else_branch: Vec<Block>,
    },
    While {
        #[serde(default)]
        body: Vec<Block>,
    },
    DeclareArray,
    ArrayAccess,
}

impl BlockKind {
    pub const fn name(&self) -> &'static str {
        match self {
            BlockKind::DeclareVars => "DeclareVars",
            BlockKind::Assign => "Assign",
            BlockKind::ArithmeticEval => "ArithmeticEval",
            BlockKind::If { .. } => "If",
            BlockKind::IfElse { .. } => "IfElse",
            BlockKind::While { .. } => "While",
            BlockKind::DeclareArray => "DeclareArray",
            BlockKind::ArrayAccess => "ArrayAccess",
        }
    }
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            parameters: Parameters::new(),
        }
    }

    pub fn with_parameter(mut self, key: ParameterKey, value: impl Into<CompactString>) -> Self {
        self.parameters.insert(key, value);
        self
    }

    pub fn declare_vars(names: impl Into<CompactString>) -> Self {
        Self::new(BlockKind::DeclareVars).with_parameter(ParameterKey::Names, names)
    }

    pub fn assign(
        var_name: impl Into<CompactString>,
        expression: impl Into<CompactString>,
    ) -> Self {
        Self::new(BlockKind::Assign)
            .with_parameter(ParameterKey::VarName, var_name)
            .with_parameter(ParameterKey::Expression, expression)
    }

    pub fn arithmetic(expression: impl Into<CompactString>) -> Self {
        Self::new(BlockKind::ArithmeticEval).with_parameter(ParameterKey::Expression, expression)
    }

    pub fn if_then(condition: impl Into<CompactString>, body: Vec<Block>) -> Self {
        Self::new(BlockKind::If { body }).with_parameter(ParameterKey::Condition, condition)
    }

    pub fn if_else(
        condition: impl Into<CompactString>,
        then_branch: Vec<Block>,
        else_branch: Vec<Block>,
    ) -> Self {
        Self::new(BlockKind::IfElse {
            then_branch,
            else_branch,
        })
        .with_parameter(ParameterKey::Condition, condition)
    }

    pub fn while_loop(condition: impl Into<CompactString>, body: Vec<Block>) -> Self {
        Self::new(BlockKind::While { body }).with_parameter(ParameterKey::Condition, condition)
    }

    pub fn declare_array(name: impl Into<CompactString>, size: impl Into<CompactString>) -> Self {
        Self::new(BlockKind::DeclareArray)
            .with_parameter(ParameterKey::Name, name)
            .with_parameter(ParameterKey::Size, size)
    }

    pub fn array_get(name: impl Into<CompactString>, index: impl Into<CompactString>) -> Self {
        Self::new(BlockKind::ArrayAccess)
            .with_parameter(ParameterKey::ArrayName, name)
            .with_parameter(ParameterKey::Index, index)
            .with_parameter(ParameterKey::Operation, "get")
    }

    pub fn array_set(
        name: impl Into<CompactString>,
        index: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Self {
        Self::new(BlockKind::ArrayAccess)
            .with_parameter(ParameterKey::ArrayName, name)
            .with_parameter(ParameterKey::Index, index)
            .with_parameter(ParameterKey::Operation, "set")
            .with_parameter(ParameterKey::Value, value)
    }
}

/// Reads a program saved as a JSON array of blocks.
pub fn parse_program(json: &str) -> Result<Program, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::{parse_program, Block, BlockKind, ParameterKey};

    #[test]
    fn parses_nested_blocks() {
        let program = parse_program(
            r#"[
                {"kind": "DeclareVars", "parameters": {"names": "x"}},
                {
                    "kind": "IfElse",
                    "parameters": {"condition": "x == 0"},
                    "then_branch": [{"kind": "ArithmeticEval", "parameters": {"expression": "1"}}]
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            program,
            vec![
                Block::declare_vars("x"),
                Block::if_else("x == 0", vec![Block::arithmetic("1")], vec![]),
            ]
        );
    }

    #[test]
    fn parameters_default_to_empty() {
        let program = parse_program(r#"[{"kind": "While"}]"#).unwrap();
        assert_eq!(program[0].kind, BlockKind::While { body: vec![] });
        assert_eq!(program[0].parameters.get(ParameterKey::Condition), None);
    }

    #[test]
    fn rejects_unknown_kinds() {
        assert!(parse_program(r#"[{"kind": "Print"}]"#).is_err());
    }
}
