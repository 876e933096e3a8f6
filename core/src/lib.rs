//! Linkage core: value conversions and variadic argument collectors for a
//! dynamic call-linking runtime.
//!
//! The crate synthesizes small composed callables ([`Adapter`]s) on request
//! and memoizes them for the lifetime of their [`Linker`]:
//!
//! - per-kind boxing, unboxing, casting and numeric conversion
//!   ([`conversions::ConversionCatalog`]),
//! - "collect N arguments into an array" collectors built from a fixed ladder
//!   of base shapes ([`collectors::ArityLadder`]),
//! - typed-array and list collectors layered on top of the ladder,
//! - whole-array element conversions ([`conversions::ElementConversion`]).
//!
//! ```
//! use linkage_core::{Linker, Value};
//!
//! let linker = Linker::global();
//! let collect3 = linker.varargs_array(3).unwrap();
//! let array = collect3
//!     .invoke(&[Value::boxed_int(1), Value::str("two"), Value::Null])
//!     .unwrap();
//! assert_eq!(array.as_array().unwrap().len(), 3);
//! ```

pub mod adapter;
pub mod collectors;
pub mod conversions;
pub mod errors;
pub mod linker;
mod memo;
pub mod options;
pub mod types;
pub mod values;

pub use adapter::Adapter;
pub use errors::{InvokeError, SynthesisError};
pub use linker::Linker;
pub use options::LinkerOptions;
pub use types::{Kind, Signature, Type};
pub use values::{Array, ArrayRef, Primitive, Value};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_fill_ladder() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
