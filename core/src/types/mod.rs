//! Kinds, runtime types and adapter signatures.

mod kind;
mod signature;
mod ty;

pub use kind::{KIND_COUNT, Kind};
pub use signature::Signature;
pub use ty::Type;

#[cfg(test)]
mod types_test;
