//! Shared, mutable arrays with a runtime component type.

use core::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{errors::InvokeError, types::Type, values::Value};

pub type ArrayRef = Arc<Array>;

/// A fixed-length array. Arrays have identity: collectors fill them in
/// place, and every store is checked against the component type.
pub struct Array {
    component: Type,
    elements: RwLock<Vec<Value>>,
}

impl Array {
    /// A new array of `len` zero elements.
    pub fn new(component: Type, len: usize) -> ArrayRef {
        debug_assert!(!component.is_void(), "arrays of void do not exist");
        let zero = component.kind().zero();
        Arc::new(Array {
            component,
            elements: RwLock::new(vec![zero; len]),
        })
    }

    /// A new array holding `values`, each checked against `component`.
    pub fn from_values(
        component: Type,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<ArrayRef, InvokeError> {
        let elements = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| check_store(&component, index, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(Array {
            component,
            elements: RwLock::new(elements),
        }))
    }

    /// A copy of this array with the same component type, truncated or
    /// padded with zeros to `len`.
    pub fn copy_of(&self, len: usize) -> ArrayRef {
        let mut elements = self.elements.read().clone();
        elements.resize(len, self.component.kind().zero());
        Arc::new(Array {
            component: self.component.clone(),
            elements: RwLock::new(elements),
        })
    }

    pub fn component(&self) -> &Type {
        &self.component
    }

    pub fn array_type(&self) -> Type {
        Type::array(self.component.clone())
    }

    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<Value, InvokeError> {
        let elements = self.elements.read();
        elements
            .get(index)
            .cloned()
            .ok_or(InvokeError::IndexOutOfBounds {
                index,
                len: elements.len(),
            })
    }

    pub fn set(&self, index: usize, value: Value) -> Result<(), InvokeError> {
        let value = check_store(&self.component, index, value)?;
        let mut elements = self.elements.write();
        let len = elements.len();
        match elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(InvokeError::IndexOutOfBounds { index, len }),
        }
    }

    /// Stores `values` at consecutive positions starting at `offset`.
    pub fn fill(&self, offset: usize, values: &[Value]) -> Result<(), InvokeError> {
        let mut elements = self.elements.write();
        let len = elements.len();
        if offset + values.len() > len {
            return Err(InvokeError::IndexOutOfBounds {
                index: offset + values.len() - 1,
                len,
            });
        }
        for (i, value) in values.iter().enumerate() {
            elements[offset + i] = check_store(&self.component, offset + i, value.clone())?;
        }
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.elements.read().clone()
    }
}

fn check_store(component: &Type, index: usize, value: Value) -> Result<Value, InvokeError> {
    if component.accepts(&value) {
        Ok(value)
    } else {
        Err(InvokeError::ArrayStore {
            index,
            expected: component.clone(),
            found: value.type_name(),
        })
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.component == other.component && *self.elements.read() == *other.elements.read()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component)?;
        f.debug_list().entries(self.elements.read().iter()).finish()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.elements.read().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}
