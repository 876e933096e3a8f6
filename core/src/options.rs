//! Configuration options for a [`Linker`](crate::Linker).

use static_assertions::const_assert;

use crate::errors::SynthesisError;

/// Platform cap on the number of arguments a collector may take.
pub const DEFAULT_MAX_ARITY: usize = 255;

/// Largest arity with a hand-built base collector or fill shape.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Largest accepted `max_arity`. Every collector table is dense in arity,
/// and fill offsets must fit an `int` argument.
pub const MAX_ARITY_CEILING: usize = u16::MAX as usize;

const_assert!(MAX_ARITY_CEILING <= i32::MAX as usize);
const_assert!(DEFAULT_CHUNK_SIZE <= DEFAULT_MAX_ARITY);

/// Configuration options for collector synthesis.
///
/// # Example
///
/// ```
/// use linkage_core::LinkerOptions;
///
/// let options = LinkerOptions {
///     max_arity: 100,
///     ..LinkerOptions::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkerOptions {
    /// Maximum arity of any collector. At most [`MAX_ARITY_CEILING`].
    ///
    /// Default: 255
    pub max_arity: usize,

    /// Chunk size of the collector ladder. Larger arities are assembled from
    /// pieces of at most this many arguments. Not observable through the
    /// collectors' behavior.
    ///
    /// Default: 10
    pub chunk_size: usize,
}

impl Default for LinkerOptions {
    fn default() -> Self {
        Self {
            max_arity: DEFAULT_MAX_ARITY,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl LinkerOptions {
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if self.max_arity > MAX_ARITY_CEILING {
            return Err(SynthesisError::InvalidOptions(format!(
                "max_arity {} exceeds the ceiling {}",
                self.max_arity, MAX_ARITY_CEILING
            )));
        }
        if self.chunk_size == 0 {
            return Err(SynthesisError::InvalidOptions(
                "chunk_size must be at least 1".into(),
            ));
        }
        if self.chunk_size > self.max_arity {
            return Err(SynthesisError::InvalidOptions(format!(
                "chunk_size {} exceeds max_arity {}",
                self.chunk_size, self.max_arity
            )));
        }
        Ok(())
    }
}
