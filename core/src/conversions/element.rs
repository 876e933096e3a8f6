//! Whole-array conversions between component types.

use crate::{
    conversions::unbox_value,
    errors::{InvokeError, SynthesisError},
    types::{Kind, Type},
    values::{Array, ArrayRef, Value},
};

/// How to convert an array into an array of another component type.
///
/// The choice is made from the two array types alone; failures that depend
/// on the elements happen in [`apply`](ElementConversion::apply) and name
/// the offending index.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementConversion {
    /// Reference to reference: copy with a store check per element.
    Checked(Type),
    /// Reference to primitive: unbox every element.
    Unboxing(Kind),
    /// Primitive to reference: box every element.
    Boxing(Type),
}

impl ElementConversion {
    pub fn between(source: &Type, target: &Type) -> Result<Self, SynthesisError> {
        let from = source
            .component()
            .ok_or_else(|| SynthesisError::NotAnArray(source.clone()))?;
        let to = target
            .component()
            .ok_or_else(|| SynthesisError::NotAnArray(target.clone()))?;
        if !from.is_valid_component() {
            return Err(SynthesisError::InvalidComponent(from.clone()));
        }
        if !to.is_valid_component() {
            return Err(SynthesisError::InvalidComponent(to.clone()));
        }

        match (from.is_primitive(), to.is_primitive()) {
            (false, false) => Ok(ElementConversion::Checked(to.clone())),
            (false, true) => Ok(ElementConversion::Unboxing(to.kind())),
            (true, false) if *to == Type::Object || *to == Type::Wrapper(from.kind()) => {
                Ok(ElementConversion::Boxing(to.clone()))
            }
            // Primitive arrays are converted element-wise by the caller.
            _ => Err(SynthesisError::UnsupportedConversion {
                from: source.clone(),
                to: target.clone(),
            }),
        }
    }

    pub fn target_component(&self) -> Type {
        match self {
            ElementConversion::Checked(component) | ElementConversion::Boxing(component) => {
                component.clone()
            }
            ElementConversion::Unboxing(kind) => Type::Basic(*kind),
        }
    }

    /// A new array of the target component holding the converted elements.
    pub fn apply(&self, array: &Array) -> Result<ArrayRef, InvokeError> {
        let elements = array.to_vec();
        match self {
            ElementConversion::Checked(component) => Array::from_values(component.clone(), elements),
            ElementConversion::Unboxing(kind) => {
                let unboxed = elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| {
                        unbox_value(element, *kind, false)
                            .map(Value::Prim)
                            .map_err(|cause| InvokeError::Element {
                                index,
                                cause: Box::new(cause),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Array::from_values(Type::Basic(*kind), unboxed)
            }
            ElementConversion::Boxing(component) => Array::from_values(
                component.clone(),
                elements.into_iter().map(|element| match element {
                    Value::Prim(p) => Value::Boxed(p),
                    other => other,
                }),
            ),
        }
    }
}
