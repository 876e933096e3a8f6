mod array;
mod primitive;
mod value;

pub use array::{Array, ArrayRef};
pub use primitive::Primitive;
pub use value::Value;
