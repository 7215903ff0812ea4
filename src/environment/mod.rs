use crate::{
    expression::{Value, Variables},
    interpreter::error::RuntimeError,
};
use compact_str::{CompactString, ToCompactString};
use std::collections::HashMap;

/// Variables and arrays of one run. The two live in separate namespaces.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: Variables,
    arrays: HashMap<CompactString, Box<[Value]>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn access(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    pub fn declare(&mut self, name: &str) -> Result<(), RuntimeError> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::DuplicateVariable(name.to_compact_string()));
        }
        self.variables.insert(name.to_compact_string(), 0);
        Ok(())
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        let slot = self
            .variables
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownVariable(name.to_compact_string()))?;
        *slot = value;
        Ok(())
    }

    pub fn array(&self, name: &str) -> Option<&[Value]> {
        self.arrays.get(name).map(|array| &array[..])
    }

    /// Creates a zeroed array of at most `max_length` elements. A duplicate
    /// name is reported before a bad size.
    pub fn declare_array(
        &mut self,
        name: &str,
        size: i32,
        max_length: usize,
    ) -> Result<(), RuntimeError> {
        if self.arrays.contains_key(name) {
            return Err(RuntimeError::DuplicateArray(name.to_compact_string()));
        }
        let length = usize::try_from(size)
            .ok()
            .filter(|&length| length > 0)
            .ok_or(RuntimeError::NonPositiveArraySize(size))?;
        let too_large = RuntimeError::ArrayTooLarge {
            size,
            limit: max_length,
        };
        if length > max_length {
            return Err(too_large);
        }
        let mut elements: Vec<Value> = Vec::new();
        elements.try_reserve_exact(length).map_err(|_| too_large)?;
        elements.resize(length, 0);
        self.arrays.insert(name.to_compact_string(), elements.into_boxed_slice());
        Ok(())
    }

    pub fn element_mut(&mut self, name: &str, index: i32) -> Result<&mut Value, RuntimeError> {
        let array = self
            .arrays
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownArray(name.to_compact_string()))?;
        let length = array.len();
        usize::try_from(index)
            .ok()
            .and_then(|position| array.get_mut(position))
            .ok_or(RuntimeError::IndexOutOfBounds { index, length })
    }

    pub fn clear(&mut self) {
        self.variables.clear();
        self.arrays.clear();
    }
}
