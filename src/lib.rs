//! Linkage - variadic argument collectors and value conversions for a
//! dynamic call-linking runtime
//!
//! # Overview
//!
//! A call-linking runtime adapts call sites to their targets: it boxes and
//! unboxes primitives, narrows references, and gathers trailing arguments
//! into arrays or lists. Linkage synthesizes those pieces as small composed
//! callables ([`Adapter`]s) and memoizes them, so the same request always
//! yields the same adapter.
//!
//! # Quick Start
//!
//! ```
//! use linkage::{Kind, Linker, Type, Value};
//!
//! let linker = Linker::global();
//!
//! // Collect 12 arguments into an Object[].
//! let collect = linker.varargs_array(12).unwrap();
//! let args: Vec<Value> = (0..12).map(Value::boxed_int).collect();
//! let array = collect.invoke(&args).unwrap();
//! assert_eq!(array.as_array().unwrap().to_vec(), args);
//!
//! // Collect ints into an int[].
//! let ints = linker.varargs_typed_array(&Type::array(Type::INT), 2).unwrap();
//! let array = ints.invoke(&[Value::int(1), Value::int(2)]).unwrap();
//! assert_eq!(array.as_array().unwrap().component(), &Type::INT);
//!
//! // Unbox with explicit-cast semantics: null becomes zero.
//! let unbox = linker.unbox(Kind::Long, true);
//! assert_eq!(unbox.invoke(&[Value::Null]).unwrap(), Value::long(0));
//! ```
//!
//! # Configuration
//!
//! The process-wide [`Linker`] uses [`LinkerOptions::default`] unless
//! [`Linker::configure`] is called before its first use:
//!
//! ```ignore
//! use linkage::{Linker, LinkerOptions};
//!
//! Linker::configure(LinkerOptions { max_arity: 100, ..Default::default() })?;
//! ```

// Re-export public API from linkage_core
pub use linkage_core::{Linker, LinkerOptions, options};

// Re-export commonly used types and values
pub use linkage_core::types::{self, KIND_COUNT, Kind, Signature, Type};
pub use linkage_core::values::{self, Array, ArrayRef, Primitive, Value};
pub use linkage_core::{Adapter, adapter, collectors, conversions};

// Re-export errors
pub use linkage_core::errors::{InvokeError, SynthesisError};
