use core::fmt;
use std::sync::Arc;

use super::Kind;
use crate::values::Value;

/// A kind refined with its runtime reference class.
///
/// Primitive kinds and void are represented by [`Type::Basic`]. Every other
/// variant is a reference type and has [`Kind::Reference`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A primitive kind or void. Never holds [`Kind::Reference`].
    Basic(Kind),
    /// The generic reference type; every reference value is an instance.
    Object,
    /// A boxed primitive of the given kind.
    Wrapper(Kind),
    /// Text.
    Str,
    /// A read-only list view.
    List,
    /// An array with the given component type.
    Array(Arc<Type>),
}

impl Type {
    pub const BOOLEAN: Type = Type::Basic(Kind::Boolean);
    pub const BYTE: Type = Type::Basic(Kind::Byte);
    pub const SHORT: Type = Type::Basic(Kind::Short);
    pub const CHAR: Type = Type::Basic(Kind::Char);
    pub const INT: Type = Type::Basic(Kind::Int);
    pub const LONG: Type = Type::Basic(Kind::Long);
    pub const FLOAT: Type = Type::Basic(Kind::Float);
    pub const DOUBLE: Type = Type::Basic(Kind::Double);
    pub const VOID: Type = Type::Basic(Kind::Void);
    pub const OBJECT: Type = Type::Object;

    /// The canonical type of a kind: `Object` for references, `Basic` otherwise.
    pub fn of(kind: Kind) -> Type {
        match kind {
            Kind::Reference => Type::Object,
            other => Type::Basic(other),
        }
    }

    /// The boxed type of a kind. References and void map to `Object`.
    pub fn wrapper(kind: Kind) -> Type {
        if kind.is_primitive() {
            Type::Wrapper(kind)
        } else {
            Type::Object
        }
    }

    pub fn array(component: Type) -> Type {
        Type::Array(Arc::new(component))
    }

    /// `Object[]`, the array type produced by the untyped collectors.
    pub fn object_array() -> Type {
        Type::array(Type::Object)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Type::Basic(kind) => *kind,
            _ => Kind::Reference,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.kind() == Kind::Reference
    }

    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Basic(Kind::Void))
    }

    /// Whether arrays of this type can exist. Rejects void and a malformed
    /// `Basic(Kind::Reference)`.
    pub fn is_valid_component(&self) -> bool {
        !matches!(self, Type::Basic(Kind::Void | Kind::Reference))
    }

    pub fn component(&self) -> Option<&Type> {
        match self {
            Type::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Whether a value of type `other` may be used where `self` is expected
    /// without any conversion.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Type::Object, other) => other.is_reference(),
            (Type::Array(to), Type::Array(from)) => {
                to.is_reference() && from.is_reference() && to.is_assignable_from(from)
            }
            _ => false,
        }
    }

    /// Whether `value` is a non-null instance of this reference type.
    pub fn is_instance(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Void | Value::Null | Value::Prim(_)) => false,
            (Type::Object, _) => true,
            (Type::Wrapper(kind), Value::Boxed(p)) => p.kind() == *kind,
            (Type::Str, Value::Str(_)) => true,
            (Type::List, Value::List(_)) => true,
            (Type::Array(to), Value::Array(array)) => {
                let from = array.component();
                to.as_ref() == from
                    || (to.is_reference() && from.is_reference() && to.is_assignable_from(from))
            }
            _ => false,
        }
    }

    /// Whether `value` may be passed for a parameter of this type.
    ///
    /// Primitive parameters require a primitive of the same kind; reference
    /// parameters take `null` or an instance.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Type::Basic(Kind::Void) => false,
            Type::Basic(kind) => value.kind() == *kind,
            _ => matches!(value, Value::Null) || self.is_instance(value),
        }
    }
}

impl From<Kind> for Type {
    fn from(kind: Kind) -> Self {
        Type::of(kind)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(kind) => write!(f, "{}", kind),
            Type::Object => f.write_str("Object"),
            Type::Wrapper(kind) => f.write_str(kind.wrapper_name()),
            Type::Str => f.write_str("String"),
            Type::List => f.write_str("List"),
            Type::Array(component) => write!(f, "{}[]", component),
        }
    }
}
