//! Synthesis and invocation errors.
//!
//! Synthesis only manipulates kinds, types and shapes, so everything that
//! depends on an argument *value* is reported as an [`InvokeError`] when the
//! adapter runs, never as a [`SynthesisError`].

use thiserror::Error;

use crate::types::{Kind, Signature, Type};

/// Raised synchronously while building an adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    #[error("invalid arity {arity}: collectors accept at most {max} arguments")]
    InvalidArity { arity: usize, max: usize },

    #[error("too many arguments for {array_type}: {arity} arguments need {slots} slots, limit is {max}")]
    TooManySlots {
        array_type: Type,
        arity: usize,
        slots: usize,
        max: usize,
    },

    #[error("not an array type: {0}")]
    NotAnArray(Type),

    #[error("invalid array component type: {0}")]
    InvalidComponent(Type),

    #[error("no conversion from {from} to {to}")]
    UnsupportedConversion { from: Type, to: Type },

    #[error("cannot {operation} {signature}: {reason}")]
    SignatureMismatch {
        operation: &'static str,
        signature: Signature,
        reason: String,
    },

    #[error("invalid linker options: {0}")]
    InvalidOptions(String),

    #[error("the global linker is already configured")]
    AlreadyConfigured,
}

/// Raised while invoking an adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeError {
    #[error("cannot unbox null to {expected}")]
    NullPointer { expected: Kind },

    #[error("cannot cast {found} to {expected}")]
    ClassCast { expected: Type, found: String },

    #[error("cannot store {found} at index {index} of {expected}[]")]
    ArrayStore {
        index: usize,
        expected: Type,
        found: String,
    },

    #[error("element {index}: {cause}")]
    Element {
        index: usize,
        cause: Box<InvokeError>,
    },

    #[error("expected {expected} arguments, got {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("argument {index}: expected {expected}, got {found}")]
    ArgumentType {
        index: usize,
        expected: Type,
        found: String,
    },

    #[error("index {index} out of bounds (length: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl InvokeError {
    /// The element index this error points at, if any.
    pub fn element_index(&self) -> Option<usize> {
        match self {
            InvokeError::ArrayStore { index, .. } | InvokeError::Element { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}
