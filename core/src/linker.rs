//! The entry point: options, conversion catalog and collector caches.

use once_cell::sync::OnceCell;

use crate::{
    adapter::Adapter,
    collectors::{ArityLadder, CacheStats, CollectorCache},
    conversions::ConversionCatalog,
    errors::SynthesisError,
    options::LinkerOptions,
    types::{Kind, Type},
};

static GLOBAL: OnceCell<Linker> = OnceCell::new();

/// Synthesizes and memoizes conversions and collectors.
///
/// Everything a linker builds is kept for as long as the linker lives.
/// Most callers share the process-wide instance from [`Linker::global`];
/// separate instances are independent and share nothing.
///
/// # Example
///
/// ```
/// use linkage_core::{Linker, LinkerOptions, Type, Value};
///
/// let linker = Linker::new(LinkerOptions::default()).unwrap();
/// let collect = linker.varargs_typed_array(&Type::array(Type::INT), 2).unwrap();
/// let array = collect.invoke(&[Value::int(4), Value::int(2)]).unwrap();
/// assert_eq!(array.as_array().unwrap().component(), &Type::INT);
/// ```
pub struct Linker {
    options: LinkerOptions,
    catalog: ConversionCatalog,
    collectors: CollectorCache,
}

impl Linker {
    pub fn new(options: LinkerOptions) -> Result<Self, SynthesisError> {
        options.validate()?;
        Ok(Self::with_valid_options(options))
    }

    fn with_valid_options(options: LinkerOptions) -> Self {
        tracing::debug!(
            max_arity = options.max_arity,
            chunk_size = options.chunk_size,
            "creating linker"
        );
        Linker {
            collectors: CollectorCache::new(options.chunk_size, options.max_arity),
            catalog: ConversionCatalog::new(),
            options,
        }
    }

    /// Installs the process-wide linker. Only the first call, made before
    /// any call to [`Linker::global`], succeeds.
    pub fn configure(options: LinkerOptions) -> Result<&'static Linker, SynthesisError> {
        options.validate()?;
        GLOBAL
            .try_insert(Self::with_valid_options(options))
            .map_err(|_| SynthesisError::AlreadyConfigured)
    }

    /// The process-wide linker, created with default options unless
    /// [`Linker::configure`] ran first.
    pub fn global() -> &'static Linker {
        GLOBAL.get_or_init(|| Self::with_valid_options(LinkerOptions::default()))
    }

    pub fn options(&self) -> &LinkerOptions {
        &self.options
    }

    pub fn catalog(&self) -> &ConversionCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &CollectorCache {
        &self.collectors
    }

    pub fn stats(&self) -> CacheStats {
        self.collectors.stats()
    }

    pub fn ladder(&self) -> ArityLadder<'_> {
        ArityLadder::new(&self.catalog, &self.collectors, &self.options)
    }

    pub fn varargs_array(&self, arity: usize) -> Result<Adapter, SynthesisError> {
        self.ladder().varargs_array(arity)
    }

    pub fn varargs_list(&self, arity: usize) -> Result<Adapter, SynthesisError> {
        self.ladder().varargs_list(arity)
    }

    pub fn varargs_typed_array(
        &self,
        array_type: &Type,
        arity: usize,
    ) -> Result<Adapter, SynthesisError> {
        self.ladder().varargs_typed_array(array_type, arity)
    }

    pub fn unbox(&self, kind: Kind, cast_allowed: bool) -> Adapter {
        self.catalog.unbox(kind, cast_allowed)
    }

    pub fn boxing(&self, kind: Kind, exact: bool) -> Adapter {
        self.catalog.boxing(kind, exact)
    }

    pub fn cast(&self, target: &Type) -> Result<Adapter, SynthesisError> {
        self.catalog.cast(target)
    }

    pub fn identity(&self, kind: Kind) -> Adapter {
        self.catalog.identity(kind)
    }

    pub fn zero(&self, kind: Kind) -> Adapter {
        self.catalog.zero(kind)
    }

    pub fn primitive_conversion(&self, source: Kind, destination: Kind) -> Adapter {
        self.catalog.primitive_conversion(source, destination)
    }

    pub fn element_conversion(
        &self,
        source: &Type,
        target: &Type,
    ) -> Result<Adapter, SynthesisError> {
        self.catalog.element_conversion(source, target)
    }
}

impl Default for Linker {
    fn default() -> Self {
        Self::with_valid_options(LinkerOptions::default())
    }
}
