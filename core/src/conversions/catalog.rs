//! Per-kind conversion adapters.
//!
//! Every adapter the catalog hands out is built once and memoized in a
//! table indexed by kind ordinals; the primitive conversion matrix is a
//! `KIND_COUNT × KIND_COUNT` table of lazily filled slots.

use crate::{
    adapter::Adapter,
    conversions::{ElementConversion, convert_primitive, unbox_value},
    errors::{InvokeError, SynthesisError},
    memo::{Slot, memoized},
    types::{KIND_COUNT, Kind, Signature, Type},
    values::Value,
};

fn kind_table() -> [Slot; KIND_COUNT] {
    core::array::from_fn(|_| Slot::new())
}

pub struct ConversionCatalog {
    /// Indexed by `[cast_allowed][kind]`.
    unbox: [[Slot; KIND_COUNT]; 2],
    /// Indexed by `[exact][kind]`.
    boxing: [[Slot; KIND_COUNT]; 2],
    identity: [Slot; KIND_COUNT],
    zero: [Slot; KIND_COUNT],
    /// Checked casts to each wrapper type.
    wrapper_casts: [Slot; KIND_COUNT],
    /// Discards one argument of each kind.
    ignore: [Slot; KIND_COUNT],
    /// Indexed by `[source][destination]`.
    conversions: [[Slot; KIND_COUNT]; KIND_COUNT],
}

impl Default for ConversionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionCatalog {
    pub fn new() -> Self {
        ConversionCatalog {
            unbox: [kind_table(), kind_table()],
            boxing: [kind_table(), kind_table()],
            identity: kind_table(),
            zero: kind_table(),
            wrapper_casts: kind_table(),
            ignore: kind_table(),
            conversions: core::array::from_fn(|_| kind_table()),
        }
    }

    /// `(Object) -> kind`: extracts a primitive from its box.
    ///
    /// `reference` is the identity and `void` discards the argument.
    /// Failures happen when the adapter runs: `null` fails unless
    /// `cast_allowed`, in which case it becomes zero.
    pub fn unbox(&self, kind: Kind, cast_allowed: bool) -> Adapter {
        match kind {
            Kind::Reference => self.identity(kind),
            Kind::Void => self.ignore(Kind::Reference),
            _ => memoized(&self.unbox[usize::from(cast_allowed)][kind.ordinal()], || {
                let name = if cast_allowed {
                    format!("unbox{}Cast", kind.wrapper_name())
                } else {
                    format!("unbox{}", kind.wrapper_name())
                };
                Adapter::new(
                    name,
                    Signature::new(vec![Type::Object], Type::Basic(kind)),
                    move |args| unbox_value(&args[0], kind, cast_allowed).map(Value::Prim),
                )
            }),
        }
    }

    /// `(kind) -> Wrapper(kind)`, or `(kind) -> Object` when not `exact`.
    ///
    /// `exact` only changes the declared return type. `reference` is the
    /// identity and `void` produces `null`.
    pub fn boxing(&self, kind: Kind, exact: bool) -> Adapter {
        match kind {
            Kind::Reference => self.identity(kind),
            Kind::Void => self.zero(Kind::Reference),
            _ => memoized(&self.boxing[usize::from(exact)][kind.ordinal()], || {
                let ret = if exact {
                    Type::Wrapper(kind)
                } else {
                    Type::Object
                };
                Adapter::new(
                    format!("box{}", kind.wrapper_name()),
                    Signature::new(vec![Type::Basic(kind)], ret),
                    move |args| match &args[0] {
                        Value::Prim(p) => Ok(Value::Boxed(*p)),
                        other => Err(InvokeError::ArgumentType {
                            index: 0,
                            expected: Type::Basic(kind),
                            found: other.type_name(),
                        }),
                    },
                )
            }),
        }
    }

    /// `(Object) -> target`: lets `null` and instances of `target` through.
    ///
    /// Casts to wrapper types are memoized; casts to other reference types
    /// are built on every request.
    pub fn cast(&self, target: &Type) -> Result<Adapter, SynthesisError> {
        match target {
            Type::Object => Ok(self.identity(Kind::Reference)),
            Type::Basic(_) => Err(SynthesisError::UnsupportedConversion {
                from: Type::Object,
                to: target.clone(),
            }),
            Type::Wrapper(kind) => Ok(memoized(&self.wrapper_casts[kind.ordinal()], || {
                checked_cast(target.clone())
            })),
            _ => Ok(checked_cast(target.clone())),
        }
    }

    /// `(kind) -> kind`. For void, a nullary adapter producing nothing.
    pub fn identity(&self, kind: Kind) -> Adapter {
        memoized(&self.identity[kind.ordinal()], || {
            if kind == Kind::Void {
                return Adapter::new("identityVoid", Signature::new(vec![], Type::VOID), |_| {
                    Ok(Value::Void)
                });
            }
            let ty = Type::of(kind);
            Adapter::new(
                format!("identity{}", kind.basic_char()),
                Signature::new(vec![ty.clone()], ty),
                |args| Ok(args[0].clone()),
            )
        })
    }

    /// `() -> kind`, producing the kind's zero value.
    pub fn zero(&self, kind: Kind) -> Adapter {
        memoized(&self.zero[kind.ordinal()], || {
            let zero = kind.zero();
            Adapter::new(
                format!("zero{}", kind.basic_char()),
                Signature::new(vec![], Type::of(kind)),
                move |_| Ok(zero.clone()),
            )
        })
    }

    /// `(kind) -> void`. For void, the nullary no-op.
    pub fn ignore(&self, kind: Kind) -> Adapter {
        if kind == Kind::Void {
            return self.identity(kind);
        }
        memoized(&self.ignore[kind.ordinal()], || {
            Adapter::new(
                format!("ignore{}", kind.basic_char()),
                Signature::new(vec![Type::of(kind)], Type::VOID),
                |_| Ok(Value::Void),
            )
        })
    }

    /// `(source) -> destination`, for any pair of kinds.
    pub fn primitive_conversion(&self, source: Kind, destination: Kind) -> Adapter {
        let slot = &self.conversions[source.ordinal()][destination.ordinal()];
        memoized(slot, || {
            if source == destination {
                return self.identity(source);
            }
            if source == Kind::Void {
                return self.zero(destination);
            }
            if destination == Kind::Void {
                return self.ignore(source);
            }
            if source == Kind::Reference {
                return self.unbox(destination, true);
            }
            if destination == Kind::Reference {
                return self.boxing(source, false);
            }
            Adapter::new(
                format!("{}2{}", source, destination),
                Signature::new(vec![Type::Basic(source)], Type::Basic(destination)),
                move |args| {
                    args[0]
                        .as_primitive()
                        .and_then(|p| convert_primitive(p, destination))
                        .map(Value::Prim)
                        .ok_or_else(|| InvokeError::ArgumentType {
                            index: 0,
                            expected: Type::Basic(source),
                            found: args[0].type_name(),
                        })
                },
            )
        })
    }

    /// Converts a value of type `from` to type `to` the way an explicit
    /// signature cast does.
    ///
    /// Conversions that no runtime value could satisfy, such as a primitive
    /// to text or to another kind's wrapper, fail here naming both types.
    pub fn conversion(&self, from: &Type, to: &Type) -> Result<Adapter, SynthesisError> {
        let unsupported = || SynthesisError::UnsupportedConversion {
            from: from.clone(),
            to: to.clone(),
        };
        if from == to {
            return Ok(self.identity(from.kind()));
        }
        match (from.kind(), to.kind()) {
            (Kind::Void, destination) => Ok(self.zero(destination)),
            (source, Kind::Void) => Ok(self.ignore(source)),
            (Kind::Reference, Kind::Reference) => self.cast(to),
            (Kind::Reference, destination) => match from {
                Type::Object | Type::Wrapper(_) => Ok(self.unbox(destination, true)),
                _ => Err(unsupported()),
            },
            (source, Kind::Reference) => match to {
                Type::Object => Ok(self.boxing(source, false)),
                Type::Wrapper(kind) if *kind == source => Ok(self.boxing(source, true)),
                _ => Err(unsupported()),
            },
            (source, destination) => Ok(self.primitive_conversion(source, destination)),
        }
    }

    /// `(source) -> target` for two array types, converting every element.
    pub fn element_conversion(&self, source: &Type, target: &Type) -> Result<Adapter, SynthesisError> {
        let conversion = ElementConversion::between(source, target)?;
        let target_type = target.clone();
        Ok(Adapter::new(
            format!("convert{}", target),
            Signature::new(vec![source.clone()], target.clone()),
            move |args| match &args[0] {
                Value::Null => Ok(Value::Null),
                Value::Array(array) => conversion.apply(array).map(Value::Array),
                other => Err(InvokeError::ClassCast {
                    expected: target_type.clone(),
                    found: other.type_name(),
                }),
            },
        ))
    }
}

fn checked_cast(target: Type) -> Adapter {
    Adapter::new(
        format!("cast{}", target),
        Signature::new(vec![Type::Object], target.clone()),
        move |args| {
            let value = &args[0];
            if value.is_null() || target.is_instance(value) {
                Ok(value.clone())
            } else {
                Err(InvokeError::ClassCast {
                    expected: target.clone(),
                    found: value.type_name(),
                })
            }
        },
    )
}
