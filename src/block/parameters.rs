use crate::{expression::Value, interpreter::error::RuntimeError};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The parameter names blocks read, as spelled by the block editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Names,
    VarName,
    Expression,
    Condition,
    Name,
    Size,
    ArrayName,
    Index,
    Operation,
    Value,
}

impl ParameterKey {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::VarName => "varName",
            Self::Expression => "expression",
            Self::Condition => "condition",
            Self::Name => "name",
            Self::Size => "size",
            Self::ArrayName => "arrayName",
            Self::Index => "index",
            Self::Operation => "operation",
            Self::Value => "value",
        }
    }

    /// How the parameter is referred to in error messages.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Names => "variable names",
            Self::VarName => "variable name",
            Self::Expression => "expression",
            Self::Condition => "condition",
            Self::Name | Self::ArrayName => "array name",
            Self::Size => "array size",
            Self::Index => "array index",
            Self::Operation => "operation",
            Self::Value => "value",
        }
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(HashMap<CompactString, CompactString>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ParameterKey) -> Option<&str> {
        self.0.get(key.key()).map(CompactString::as_str)
    }

    pub fn insert(&mut self, key: ParameterKey, value: impl Into<CompactString>) {
        self.0.insert(key.key().into(), value.into());
    }

    pub fn require(&self, key: ParameterKey) -> Result<&str, RuntimeError> {
        self.get(key).ok_or(RuntimeError::MissingParameter(key))
    }

    /// Reads a plain integer literal with an optional sign. Absent and
    /// unparseable values both yield `None`.
    pub fn integer(&self, key: ParameterKey) -> Option<Value> {
        self.get(key).and_then(|text| text.parse().ok())
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<CompactString>,
    V: Into<CompactString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
