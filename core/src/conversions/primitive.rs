//! Value-level primitive conversions.
//!
//! Conversions follow a stack machine: sub-int kinds are loaded as 32-bit
//! ints, then stored into the destination kind with that machine's
//! narrowing and widening instructions. Float to integer conversions
//! saturate and map NaN to zero, which is what Rust's `as` does.

use crate::{
    errors::InvokeError,
    types::{Kind, Type},
    values::{Primitive, Value},
};

/// A primitive as loaded onto the operand stack.
#[derive(Debug, Clone, Copy)]
enum Operand {
    I(i32),
    J(i64),
    F(f32),
    D(f64),
}

fn load(value: Primitive) -> Operand {
    match value {
        Primitive::Boolean(v) => Operand::I(i32::from(v)),
        Primitive::Byte(v) => Operand::I(i32::from(v)),
        Primitive::Short(v) => Operand::I(i32::from(v)),
        Primitive::Char(v) => Operand::I(i32::from(v)),
        Primitive::Int(v) => Operand::I(v),
        Primitive::Long(v) => Operand::J(v),
        Primitive::Float(v) => Operand::F(v),
        Primitive::Double(v) => Operand::D(v),
    }
}

/// `l2i`, `f2i`, `d2i`.
fn to_int(operand: Operand) -> i32 {
    match operand {
        Operand::I(v) => v,
        Operand::J(v) => v as i32,
        Operand::F(v) => v as i32,
        Operand::D(v) => v as i32,
    }
}

fn store_boolean(operand: Operand) -> Primitive {
    // Only bit 0 of the truncated byte survives.
    Primitive::Boolean((to_int(operand) as i8) & 1 != 0)
}

fn store_byte(operand: Operand) -> Primitive {
    Primitive::Byte(to_int(operand) as i8)
}

fn store_short(operand: Operand) -> Primitive {
    Primitive::Short(to_int(operand) as i16)
}

fn store_char(operand: Operand) -> Primitive {
    Primitive::Char(to_int(operand) as u16)
}

fn store_int(operand: Operand) -> Primitive {
    Primitive::Int(to_int(operand))
}

fn store_long(operand: Operand) -> Primitive {
    Primitive::Long(match operand {
        Operand::I(v) => i64::from(v),
        Operand::J(v) => v,
        Operand::F(v) => v as i64,
        Operand::D(v) => v as i64,
    })
}

fn store_float(operand: Operand) -> Primitive {
    Primitive::Float(match operand {
        Operand::I(v) => v as f32,
        Operand::J(v) => v as f32,
        Operand::F(v) => v,
        Operand::D(v) => v as f32,
    })
}

fn store_double(operand: Operand) -> Primitive {
    Primitive::Double(match operand {
        Operand::I(v) => f64::from(v),
        Operand::J(v) => v as f64,
        Operand::F(v) => f64::from(v),
        Operand::D(v) => v,
    })
}

/// Indexed by destination kind ordinal.
static STORE: [fn(Operand) -> Primitive; 8] = [
    store_boolean,
    store_byte,
    store_short,
    store_char,
    store_int,
    store_long,
    store_float,
    store_double,
];

/// Converts `value` to the primitive kind `target`.
///
/// Returns `None` when `target` is not a primitive kind.
pub fn convert_primitive(value: Primitive, target: Kind) -> Option<Primitive> {
    if !target.is_primitive() {
        return None;
    }
    if value.kind() == target {
        return Some(value);
    }
    Some(STORE[target.ordinal()](load(value)))
}

/// Extracts a primitive of kind `target` from a reference.
///
/// A box of `target` unboxes directly. A box of another kind converts when
/// `cast_allowed`, or when `target` is a lossless widening of it. `null`
/// becomes zero only when `cast_allowed`.
pub fn unbox_value(value: &Value, target: Kind, cast_allowed: bool) -> Result<Primitive, InvokeError> {
    let class_cast = || InvokeError::ClassCast {
        expected: Type::wrapper(target),
        found: value.type_name(),
    };
    match value {
        Value::Boxed(p) if p.kind() == target => Ok(*p),
        Value::Boxed(p) if cast_allowed || target.is_convertible_from(p.kind()) => {
            convert_primitive(*p, target).ok_or_else(class_cast)
        }
        Value::Null if cast_allowed => Primitive::zero(target).ok_or_else(class_cast),
        Value::Null => Err(InvokeError::NullPointer { expected: target }),
        _ => Err(class_cast()),
    }
}
