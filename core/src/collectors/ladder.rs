//! The collector ladder.
//!
//! Only arities up to the chunk size `L` have a hand-built collector. A
//! larger collector allocates its array from the first `L` arguments and
//! passes it through a chain of fills, each writing at most `L` further
//! arguments at a fixed offset:
//!
//! ```text
//! array23(x0..x22) = fill3@20(fill10@10(fillNew(23, x0..x9), x10..x19), x20..x22)
//! ```
//!
//! The fill chains (`fill_to_right`) are memoized by the total arity they
//! reach, so every collector above `2L` reuses the chains of the shorter
//! ones.

use crate::{
    adapter::Adapter,
    collectors::CollectorCache,
    conversions::ConversionCatalog,
    errors::{InvokeError, SynthesisError},
    memo::memoized,
    options::LinkerOptions,
    types::{Signature, Type},
    values::{Array, ArrayRef, Value},
};

pub struct ArityLadder<'a> {
    pub(crate) catalog: &'a ConversionCatalog,
    pub(crate) cache: &'a CollectorCache,
    pub(crate) chunk: usize,
    pub(crate) max_arity: usize,
}

impl<'a> ArityLadder<'a> {
    pub fn new(
        catalog: &'a ConversionCatalog,
        cache: &'a CollectorCache,
        options: &LinkerOptions,
    ) -> Self {
        ArityLadder {
            catalog,
            cache,
            chunk: options.chunk_size,
            max_arity: options.max_arity,
        }
    }

    pub fn check_arity(&self, arity: usize) -> Result<(), SynthesisError> {
        if arity > self.max_arity {
            return Err(SynthesisError::InvalidArity {
                arity,
                max: self.max_arity,
            });
        }
        Ok(())
    }

    /// `(Object × arity) -> Object[]`, returning its arguments in order.
    pub fn varargs_array(&self, arity: usize) -> Result<Adapter, SynthesisError> {
        self.check_arity(arity)?;
        self.cache.arrays.get_or_build(arity, || {
            if arity <= self.chunk {
                return Ok(self.base_array(arity));
            }
            tracing::debug!(arity, chunk = self.chunk, "building array collector");
            let collector = self.build_varargs_array(&self.fill_new_array(), None, arity)?;
            Ok(collector.renamed(format!("array{}", arity)))
        })
    }

    /// Allocates through `new_array` (`(int len, Object[] prefix) -> array`)
    /// and fills the rest through the memoized fill chain, then applies
    /// `finisher` to the full array.
    pub(crate) fn build_varargs_array(
        &self,
        new_array: &Adapter,
        finisher: Option<&Adapter>,
        arity: usize,
    ) -> Result<Adapter, SynthesisError> {
        let left_len = arity.min(self.chunk);
        let right_len = arity - left_len;
        let left = new_array
            .bind_leading(offset(arity)?)?
            .as_collector(Type::Object, left_len)?;

        let mut outer = finisher.cloned();
        if right_len > 0 {
            let right = self.fill_to_right(left_len + right_len)?;
            outer = Some(match outer {
                Some(finisher) => finisher.collect_arguments(0, &right)?,
                None => right,
            });
        }
        match outer {
            Some(outer) => outer.collect_arguments(0, &left),
            None => Ok(left),
        }
    }

    /// `(Object[] a, Object × (arity - L)) -> Object[]`: stores its trailing
    /// arguments into `a[L..arity]` and returns `a`.
    pub(crate) fn fill_to_right(&self, arity: usize) -> Result<Adapter, SynthesisError> {
        self.cache
            .fill_to_right
            .get_or_build(arity, || self.build_filler(arity))
    }

    fn build_filler(&self, arity: usize) -> Result<Adapter, SynthesisError> {
        let chunk = self.chunk;
        if arity <= chunk {
            return Ok(self.array_identity());
        }

        let mut right_len = arity % chunk;
        let mut mid_len = arity - right_len;
        if right_len == 0 {
            right_len = chunk;
            mid_len = arity - chunk;
            if !self.cache.fill_to_right.contains(mid_len) {
                // Build the shorter chains first so each step below only
                // recurses one level.
                for precursor in (2 * chunk..mid_len).step_by(chunk) {
                    self.fill_to_right(precursor)?;
                }
            }
        }
        if mid_len < chunk {
            mid_len = chunk;
            right_len = arity - mid_len;
        }
        tracing::debug!(arity, mid_len, right_len, "building fill chain");

        let right_fill = self.base_fill(right_len).bind_leading(offset(mid_len)?)?;
        if mid_len == chunk {
            return Ok(right_fill);
        }
        let mid_fill = self.fill_to_right(mid_len)?;
        right_fill.collect_arguments(0, &mid_fill)
    }

    // ============================================================================
    // Base shapes
    // ============================================================================

    /// `(Object × arity) -> Object[]` for `arity <= L`.
    pub(crate) fn base_array(&self, arity: usize) -> Adapter {
        debug_assert!(arity <= self.chunk);
        self.cache.base_arrays.get_or_init(arity, || {
            Adapter::new(
                format!("array{}", arity),
                Signature::generic(arity, Type::object_array()),
                |args| Ok(Value::Array(Array::from_values(Type::Object, args.iter().cloned())?)),
            )
        })
    }

    /// `(int pos, Object[] a, Object × count) -> Object[]` for
    /// `1 <= count <= L`.
    pub(crate) fn base_fill(&self, count: usize) -> Adapter {
        debug_assert!((1..=self.chunk).contains(&count));
        self.cache.base_fills.get_or_init(count, || {
            let mut params = Vec::with_capacity(count + 2);
            params.push(Type::INT);
            params.push(Type::object_array());
            params.extend(std::iter::repeat_n(Type::Object, count));
            Adapter::new(
                format!("fillArray{}", count),
                Signature::new(params, Type::object_array()),
                |args| {
                    let pos = int_arg(args, 0)?;
                    array_arg(args, 1)?.fill(pos, &args[2..])?;
                    Ok(args[1].clone())
                },
            )
        })
    }

    /// `(int len, Object[] prefix) -> Object[]`.
    pub(crate) fn fill_new_array(&self) -> Adapter {
        memoized(&self.cache.fill_new_array, || {
            Adapter::new(
                "fillNewArray",
                Signature::new(vec![Type::INT, Type::object_array()], Type::object_array()),
                |args| {
                    let len = int_arg(args, 0)?;
                    let array = Array::new(Type::Object, len);
                    array.fill(0, &array_arg(args, 1)?.to_vec())?;
                    Ok(Value::Array(array))
                },
            )
        })
    }

    /// `(Object[] prototype, int len, Object[] prefix) -> Object[]`: the new
    /// array has the prototype's runtime component type.
    pub(crate) fn fill_new_typed_array(&self) -> Adapter {
        memoized(&self.cache.fill_new_typed_array, || {
            let object_array = Type::object_array();
            Adapter::new(
                "fillNewTypedArray",
                Signature::new(
                    vec![object_array.clone(), Type::INT, object_array.clone()],
                    object_array,
                ),
                |args| {
                    let len = int_arg(args, 1)?;
                    let array = array_arg(args, 0)?.copy_of(len);
                    array.fill(0, &array_arg(args, 2)?.to_vec())?;
                    Ok(Value::Array(array))
                },
            )
        })
    }

    /// `(Object[]) -> Object[]`.
    pub(crate) fn array_identity(&self) -> Adapter {
        memoized(&self.cache.array_identity, || {
            Adapter::new(
                "arrayIdentity",
                Signature::new(vec![Type::object_array()], Type::object_array()),
                |args| Ok(args[0].clone()),
            )
        })
    }
}

/// An array length or offset as an `int` argument.
fn offset(n: usize) -> Result<Value, SynthesisError> {
    i32::try_from(n)
        .map(Value::int)
        .map_err(|_| SynthesisError::InvalidArity {
            arity: n,
            max: i32::MAX as usize,
        })
}

/// A non-negative `int` argument as an index or length.
fn int_arg(args: &[Value], index: usize) -> Result<usize, InvokeError> {
    args[index]
        .as_int()
        .and_then(|raw| usize::try_from(raw).ok())
        .ok_or_else(|| InvokeError::ArgumentType {
            index,
            expected: Type::INT,
            found: args[index].to_string(),
        })
}

fn array_arg(args: &[Value], index: usize) -> Result<&ArrayRef, InvokeError> {
    args[index]
        .as_array()
        .ok_or_else(|| InvokeError::ArgumentType {
            index,
            expected: Type::object_array(),
            found: args[index].type_name(),
        })
}
