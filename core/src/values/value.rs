use core::fmt;
use std::sync::Arc;

use crate::{
    types::{Kind, Type},
    values::{ArrayRef, Primitive},
};

/// A runtime value passed to or returned from an adapter.
#[derive(Debug, Clone)]
pub enum Value {
    /// The result of an adapter returning nothing.
    Void,
    Prim(Primitive),
    Null,
    /// A boxed primitive.
    Boxed(Primitive),
    Str(Arc<str>),
    Array(ArrayRef),
    /// A read-only list view over an array.
    List(ArrayRef),
}

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    pub fn boolean(value: bool) -> Self {
        Value::Prim(Primitive::Boolean(value))
    }

    pub fn byte(value: i8) -> Self {
        Value::Prim(Primitive::Byte(value))
    }

    pub fn short(value: i16) -> Self {
        Value::Prim(Primitive::Short(value))
    }

    pub fn char(value: u16) -> Self {
        Value::Prim(Primitive::Char(value))
    }

    pub fn int(value: i32) -> Self {
        Value::Prim(Primitive::Int(value))
    }

    pub fn long(value: i64) -> Self {
        Value::Prim(Primitive::Long(value))
    }

    pub fn float(value: f32) -> Self {
        Value::Prim(Primitive::Float(value))
    }

    pub fn double(value: f64) -> Self {
        Value::Prim(Primitive::Double(value))
    }

    pub fn boxed_int(value: i32) -> Self {
        Value::Boxed(Primitive::Int(value))
    }

    pub fn str(value: &str) -> Self {
        Value::Str(Arc::from(value))
    }

    // ============================================================================
    // Inspection
    // ============================================================================

    pub fn kind(&self) -> Kind {
        match self {
            Value::Void => Kind::Void,
            Value::Prim(p) => p.kind(),
            _ => Kind::Reference,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The exact runtime type of this value; `None` for `null` and void.
    pub fn runtime_type(&self) -> Option<Type> {
        match self {
            Value::Void | Value::Null => None,
            Value::Prim(p) => Some(Type::Basic(p.kind())),
            Value::Boxed(p) => Some(Type::Wrapper(p.kind())),
            Value::Str(_) => Some(Type::Str),
            Value::Array(array) => Some(array.array_type()),
            Value::List(_) => Some(Type::List),
        }
    }

    /// Human-readable type name for error messages.
    pub fn type_name(&self) -> String {
        match self {
            Value::Void => "void".to_string(),
            Value::Null => "null".to_string(),
            other => other
                .runtime_type()
                .map(|ty| ty.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Value::Prim(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_boxed(&self) -> Option<Primitive> {
        match self {
            Value::Boxed(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Prim(Primitive::Boolean(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Prim(Primitive::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Prim(Primitive::Long(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Prim(Primitive::Double(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ArrayRef> {
        match self {
            Value::List(backing) => Some(backing),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) | (Value::Null, Value::Null) => true,
            (Value::Prim(a), Value::Prim(b)) | (Value::Boxed(a), Value::Boxed(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::List(a), Value::List(b)) => {
                Arc::ptr_eq(a, b) || a == b
            }
            _ => false,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Prim(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::short(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<ArrayRef> for Value {
    fn from(value: ArrayRef) -> Self {
        Value::Array(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Null => write!(f, "null"),
            Value::Prim(p) | Value::Boxed(p) => write!(f, "{}", p),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(array) => write!(f, "{}", array),
            Value::List(backing) => write!(f, "List{}", backing),
        }
    }
}
