//! Adapters: immutable callables with a fixed signature.
//!
//! Collectors and conversions are synthesized as trees of adapters. The
//! runtime calling into them doesn't know about kinds or shapes: it hands
//! over a slice of [`Value`]s and gets one back. Adapters are compared by
//! identity ([`Adapter::same`]), so a memoized adapter can be recognized
//! when requested again.

mod combinators;

use core::fmt;
use std::sync::Arc;

use crate::{
    errors::InvokeError,
    types::{Signature, Type},
    values::Value,
};

/// The function an adapter runs once its arguments have been checked.
pub type Body = dyn Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync;

#[derive(Clone)]
pub struct Adapter {
    inner: Arc<AdapterData>,
}

struct AdapterData {
    name: String,
    signature: Signature,
    body: Arc<Body>,
}

impl Adapter {
    pub fn new<F>(name: impl Into<String>, signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        Adapter {
            inner: Arc::new(AdapterData {
                name: name.into(),
                signature,
                body: Arc::new(body),
            }),
        }
    }

    /// Same behavior and signature under a different name. The result is a
    /// distinct adapter.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Adapter {
            inner: Arc::new(AdapterData {
                name: name.into(),
                signature: self.inner.signature.clone(),
                body: Arc::clone(&self.inner.body),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn signature(&self) -> &Signature {
        &self.inner.signature
    }

    pub fn arity(&self) -> usize {
        self.inner.signature.arity()
    }

    pub fn return_type(&self) -> &Type {
        self.inner.signature.ret()
    }

    /// Whether two handles refer to the same synthesized adapter.
    pub fn same(a: &Adapter, b: &Adapter) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Invoke with argument checking: the count must match the arity and each
    /// argument must conform to its parameter type.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, InvokeError> {
        let params = self.inner.signature.params();
        if args.len() != params.len() {
            return Err(InvokeError::ArgumentCount {
                expected: params.len(),
                found: args.len(),
            });
        }
        for (index, (param, arg)) in params.iter().zip(args).enumerate() {
            if !param.accepts(arg) {
                return Err(InvokeError::ArgumentType {
                    index,
                    expected: param.clone(),
                    found: arg.type_name(),
                });
            }
        }
        self.call(args)
    }

    /// Invoke without checking. Composed adapters call their parts this way;
    /// shapes were checked when they were composed.
    #[inline]
    pub(crate) fn call(&self, args: &[Value]) -> Result<Value, InvokeError> {
        debug_assert_eq!(args.len(), self.arity(), "{}", self);
        (self.inner.body)(args)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adapter({} {})", self.inner.name, self.inner.signature)
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.inner.name, self.inner.signature)
    }
}
