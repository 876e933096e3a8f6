//! Boxing, unboxing, casts and numeric conversions.

mod catalog;
mod element;
mod primitive;

pub use catalog::ConversionCatalog;
pub use element::ElementConversion;
pub use primitive::{convert_primitive, unbox_value};

#[cfg(test)]
mod catalog_test;
