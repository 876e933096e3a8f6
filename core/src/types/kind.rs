//! Basic value kinds.
//!
//! A [`Kind`] is the coarse category a value belongs to from the point of
//! view of calling conventions: one of the eight primitive kinds, a
//! reference, or void. Kinds carry the attributes the conversion catalog
//! needs (slot width, wrapper type, zero value, widening relation).

use core::fmt;

use static_assertions::const_assert_eq;

use crate::values::{Primitive, Value};

/// Number of distinct kinds. Kind ordinals are dense in `0..KIND_COUNT`.
pub const KIND_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Reference,
    Void,
}

const_assert_eq!(Kind::ALL.len(), KIND_COUNT);

impl Kind {
    /// All kinds, in ordinal order.
    pub const ALL: [Kind; 10] = [
        Kind::Boolean,
        Kind::Byte,
        Kind::Short,
        Kind::Char,
        Kind::Int,
        Kind::Long,
        Kind::Float,
        Kind::Double,
        Kind::Reference,
        Kind::Void,
    ];

    /// The eight primitive kinds.
    pub const PRIMITIVES: [Kind; 8] = [
        Kind::Boolean,
        Kind::Byte,
        Kind::Short,
        Kind::Char,
        Kind::Int,
        Kind::Long,
        Kind::Float,
        Kind::Double,
    ];

    /// Dense index used by the catalog's per-kind tables.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn is_primitive(self) -> bool {
        !matches!(self, Kind::Reference | Kind::Void)
    }

    /// Whether values of this kind occupy two argument slots.
    pub const fn is_wide(self) -> bool {
        matches!(self, Kind::Long | Kind::Double)
    }

    pub const fn is_floating(self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }

    /// Number of argument slots a value of this kind occupies.
    pub const fn slot_width(self) -> usize {
        match self {
            Kind::Void => 0,
            Kind::Long | Kind::Double => 2,
            _ => 1,
        }
    }

    /// Single-character basic type descriptor.
    pub const fn basic_char(self) -> char {
        match self {
            Kind::Boolean => 'Z',
            Kind::Byte => 'B',
            Kind::Short => 'S',
            Kind::Char => 'C',
            Kind::Int => 'I',
            Kind::Long => 'J',
            Kind::Float => 'F',
            Kind::Double => 'D',
            Kind::Reference => 'L',
            Kind::Void => 'V',
        }
    }

    pub fn from_basic_char(c: char) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.basic_char() == c)
    }

    /// Name of the boxed reference type associated with this kind.
    pub const fn wrapper_name(self) -> &'static str {
        match self {
            Kind::Boolean => "Boolean",
            Kind::Byte => "Byte",
            Kind::Short => "Short",
            Kind::Char => "Character",
            Kind::Int => "Integer",
            Kind::Long => "Long",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::Reference => "Object",
            Kind::Void => "Void",
        }
    }

    /// The zero value of this kind: `false`, `0`, `0.0`, `null`, or nothing.
    pub fn zero(self) -> Value {
        match self {
            Kind::Reference => Value::Null,
            Kind::Void => Value::Void,
            primitive => match Primitive::zero(primitive) {
                Some(p) => Value::Prim(p),
                None => Value::Void,
            },
        }
    }

    /// Whether a value of kind `source` can be widened to this kind without
    /// loss (or is already of this kind).
    ///
    /// Boolean only converts from itself. Char widens to int and beyond, but
    /// nothing widens to char.
    pub fn is_convertible_from(self, source: Kind) -> bool {
        use Kind::*;
        if self == source {
            return true;
        }
        match self {
            Reference => true,
            Void | Boolean | Byte | Char => false,
            Short => source == Byte,
            Int => matches!(source, Byte | Short | Char),
            Long => matches!(source, Byte | Short | Char | Int),
            Float => matches!(source, Byte | Short | Char | Int | Long),
            Double => matches!(source, Byte | Short | Char | Int | Long | Float),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Boolean => "boolean",
            Kind::Byte => "byte",
            Kind::Short => "short",
            Kind::Char => "char",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Reference => "reference",
            Kind::Void => "void",
        };
        f.write_str(name)
    }
}
