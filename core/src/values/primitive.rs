use core::fmt;

use crate::types::Kind;

/// An unboxed value of one of the eight primitive kinds.
///
/// Floating-point values compare by bit pattern, so `NaN == NaN` and
/// `0.0 != -0.0`. Conversions must preserve bits exactly, and that is what
/// callers of this type want to observe.
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Char(u16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Primitive {
    pub fn kind(self) -> Kind {
        match self {
            Primitive::Boolean(_) => Kind::Boolean,
            Primitive::Byte(_) => Kind::Byte,
            Primitive::Short(_) => Kind::Short,
            Primitive::Char(_) => Kind::Char,
            Primitive::Int(_) => Kind::Int,
            Primitive::Long(_) => Kind::Long,
            Primitive::Float(_) => Kind::Float,
            Primitive::Double(_) => Kind::Double,
        }
    }

    /// The zero of a primitive kind; `None` for reference and void.
    pub fn zero(kind: Kind) -> Option<Primitive> {
        let zero = match kind {
            Kind::Boolean => Primitive::Boolean(false),
            Kind::Byte => Primitive::Byte(0),
            Kind::Short => Primitive::Short(0),
            Kind::Char => Primitive::Char(0),
            Kind::Int => Primitive::Int(0),
            Kind::Long => Primitive::Long(0),
            Kind::Float => Primitive::Float(0.0),
            Kind::Double => Primitive::Double(0.0),
            Kind::Reference | Kind::Void => return None,
        };
        Some(zero)
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        use Primitive::*;
        match (self, other) {
            (Boolean(a), Boolean(b)) => a == b,
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Double(a), Double(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Primitive {}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Boolean(v) => write!(f, "{}", v),
            Primitive::Byte(v) => write!(f, "{}", v),
            Primitive::Short(v) => write!(f, "{}", v),
            Primitive::Char(v) => match char::from_u32(u32::from(*v)) {
                Some(c) => write!(f, "{:?}", c),
                None => write!(f, "'\\u{{{:04x}}}'", v),
            },
            Primitive::Int(v) => write!(f, "{}", v),
            Primitive::Long(v) => write!(f, "{}L", v),
            Primitive::Float(v) => write!(f, "{}f", v),
            Primitive::Double(v) => write!(f, "{}", v),
        }
    }
}
