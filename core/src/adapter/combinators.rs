//! The fixed set of composition operations collectors are built from.
//!
//! Each operation checks shapes when it is applied and returns a new
//! adapter; none of them look at argument values until invoked.

use smallvec::SmallVec;

use super::Adapter;
use crate::{
    conversions::ConversionCatalog,
    errors::SynthesisError,
    types::{Signature, Type},
    values::{Array, Value},
};

/// Argument buffer for composed calls. Most fills take at most a chunk of
/// arguments plus the array and offset.
type Args = SmallVec<[Value; 12]>;

fn mismatch(operation: &'static str, signature: &Signature, reason: String) -> SynthesisError {
    SynthesisError::SignatureMismatch {
        operation,
        signature: signature.clone(),
        reason,
    }
}

impl Adapter {
    /// Fixes the first parameter to `value`.
    pub fn bind_leading(&self, value: Value) -> Result<Adapter, SynthesisError> {
        let signature = self.signature();
        let Some(first) = signature.param(0) else {
            return Err(mismatch("bind", signature, "no parameter to bind".into()));
        };
        if !first.accepts(&value) {
            return Err(mismatch(
                "bind",
                signature,
                format!("{} does not accept {}", first, value.type_name()),
            ));
        }

        let target = self.clone();
        let bound = signature.splice_params(0..1, &[]);
        Ok(Adapter::new(
            format!("{}.bind", self.name()),
            bound,
            move |args| {
                let mut full = Args::with_capacity(args.len() + 1);
                full.push(value.clone());
                full.extend(args.iter().cloned());
                target.call(&full)
            },
        ))
    }

    /// Feeds the result of `filter` into parameter `position`.
    ///
    /// The new adapter takes this adapter's parameters with `filter`'s
    /// parameters spliced in at `position`. A void `filter` is run for its
    /// effect and contributes no argument.
    pub fn collect_arguments(
        &self,
        position: usize,
        filter: &Adapter,
    ) -> Result<Adapter, SynthesisError> {
        let signature = self.signature();
        let produces = !filter.return_type().is_void();
        let replaced = if produces {
            let Some(param) = signature.param(position) else {
                return Err(mismatch(
                    "collect arguments into",
                    signature,
                    format!("no parameter at position {}", position),
                ));
            };
            if !param.is_assignable_from(filter.return_type()) {
                return Err(mismatch(
                    "collect arguments into",
                    signature,
                    format!(
                        "parameter {} is {}, filter returns {}",
                        position,
                        param,
                        filter.return_type()
                    ),
                ));
            }
            position..position + 1
        } else {
            if position > signature.arity() {
                return Err(mismatch(
                    "collect arguments into",
                    signature,
                    format!("no position {}", position),
                ));
            }
            position..position
        };

        let combined = signature.splice_params(replaced, filter.signature().params());
        let target = self.clone();
        let inner = filter.clone();
        let taken = filter.arity();
        Ok(Adapter::new(
            format!("{}<-{}", self.name(), filter.name()),
            combined,
            move |args| {
                let result = inner.call(&args[position..position + taken])?;
                let mut outer = Args::with_capacity(args.len() + 1 - taken);
                outer.extend(args[..position].iter().cloned());
                if produces {
                    outer.push(result);
                }
                outer.extend(args[position + taken..].iter().cloned());
                target.call(&outer)
            },
        ))
    }

    /// Replaces the trailing array parameter by `count` parameters of
    /// `component`, gathered into a fresh array on each call.
    pub fn as_collector(&self, component: Type, count: usize) -> Result<Adapter, SynthesisError> {
        let signature = self.signature();
        let Some(last) = signature.arity().checked_sub(1) else {
            return Err(mismatch("collect into", signature, "no trailing parameter".into()));
        };
        if !component.is_valid_component() {
            return Err(SynthesisError::InvalidComponent(component));
        }
        let array_type = Type::array(component.clone());
        if !signature.params()[last].is_assignable_from(&array_type) {
            return Err(mismatch(
                "collect into",
                signature,
                format!("trailing parameter does not accept {}", array_type),
            ));
        }

        let collected = signature.splice_params(last..last + 1, &vec![component.clone(); count]);
        let target = self.clone();
        Ok(Adapter::new(
            format!("{}.collect{}", self.name(), count),
            collected,
            move |args| {
                let array = Array::from_values(component.clone(), args[last..].iter().cloned())?;
                let mut outer = Args::with_capacity(last + 1);
                outer.extend(args[..last].iter().cloned());
                outer.push(Value::Array(array));
                target.call(&outer)
            },
        ))
    }

    /// Passes this adapter's result through `filter`.
    pub fn filter_return_value(&self, filter: &Adapter) -> Result<Adapter, SynthesisError> {
        let ret = self.return_type();
        let fits = match filter.signature().params() {
            [] => ret.is_void(),
            [param] => !ret.is_void() && param.is_assignable_from(ret),
            _ => false,
        };
        if !fits {
            return Err(mismatch(
                "filter the result of",
                self.signature(),
                format!("filter {} does not take {}", filter, ret),
            ));
        }

        let target = self.clone();
        let inner = filter.clone();
        Ok(Adapter::new(
            format!("{}->{}", filter.name(), self.name()),
            self.signature().with_return(filter.return_type().clone()),
            move |args| {
                let result = target.call(args)?;
                if inner.arity() == 0 {
                    inner.call(&[])
                } else {
                    inner.call(&[result])
                }
            },
        ))
    }

    /// Accepts and ignores leading arguments of the given types.
    pub fn drop_leading(&self, types: &[Type]) -> Adapter {
        let dropped = types.len();
        let target = self.clone();
        Adapter::new(
            format!("{}.drop{}", self.name(), dropped),
            self.signature().splice_params(0..0, types),
            move |args| target.call(&args[dropped..]),
        )
    }

    /// Views this adapter under `signature`, converting each argument from
    /// the new parameter type to the old one and the result back.
    ///
    /// Conversions follow explicit-cast rules: references unbox with `null`
    /// becoming zero, primitives narrow or widen, and references are
    /// checked against the expected type when invoked.
    pub fn as_type(
        &self,
        catalog: &ConversionCatalog,
        signature: Signature,
    ) -> Result<Adapter, SynthesisError> {
        let old = self.signature();
        if *old == signature {
            return Ok(self.clone());
        }
        if old.arity() != signature.arity() {
            return Err(mismatch(
                "cast",
                old,
                format!("arity differs from {}", signature),
            ));
        }

        let mut arg_conversions = Vec::with_capacity(old.arity());
        for (new_param, old_param) in signature.params().iter().zip(old.params()) {
            let conversion = if new_param == old_param || old_param.is_assignable_from(new_param) {
                None
            } else {
                Some(catalog.conversion(new_param, old_param)?)
            };
            arg_conversions.push(conversion);
        }
        let ret_conversion = if old.ret() == signature.ret()
            || signature.ret().is_assignable_from(old.ret())
        {
            None
        } else {
            Some(catalog.conversion(old.ret(), signature.ret())?)
        };

        let target = self.clone();
        Ok(Adapter::new(
            format!("{}.asType", self.name()),
            signature,
            move |args| {
                let mut converted = Args::with_capacity(args.len());
                for (arg, conversion) in args.iter().zip(&arg_conversions) {
                    converted.push(match conversion {
                        Some(conversion) => conversion.call(core::slice::from_ref(arg))?,
                        None => arg.clone(),
                    });
                }
                let result = target.call(&converted)?;
                match &ret_conversion {
                    Some(conversion) if conversion.arity() == 0 => conversion.call(&[]),
                    Some(conversion) => conversion.call(&[result]),
                    None => Ok(result),
                }
            },
        ))
    }
}
