//! List and typed-array collectors, layered over the array ladder.

use crate::{
    adapter::Adapter,
    collectors::ArityLadder,
    errors::{InvokeError, SynthesisError},
    memo::memoized,
    types::{Signature, Type},
    values::{Array, Value},
};

impl ArityLadder<'_> {
    /// `(Object × arity) -> List`: a read-only list of the arguments.
    pub fn varargs_list(&self, arity: usize) -> Result<Adapter, SynthesisError> {
        self.check_arity(arity)?;
        self.cache.lists.get_or_build(arity, || {
            let list = self
                .varargs_array(arity)?
                .filter_return_value(&self.as_list())?;
            Ok(list.renamed(format!("list{}", arity)))
        })
    }

    /// `(component × arity) -> array_type`, where the result's runtime
    /// component type is exactly `array_type`'s.
    ///
    /// Wide components take two argument slots each, and the slots, not
    /// the arguments, are limited to the maximum arity.
    pub fn varargs_typed_array(
        &self,
        array_type: &Type,
        arity: usize,
    ) -> Result<Adapter, SynthesisError> {
        let component = array_type
            .component()
            .ok_or_else(|| SynthesisError::NotAnArray(array_type.clone()))?;
        if !component.is_valid_component() {
            return Err(SynthesisError::InvalidComponent(component.clone()));
        }
        self.check_arity(arity)?;
        let slots = arity * component.kind().slot_width();
        if slots > self.max_arity {
            return Err(SynthesisError::TooManySlots {
                array_type: array_type.clone(),
                arity,
                slots,
                max: self.max_arity,
            });
        }
        if *component == Type::Object {
            return self.varargs_array(arity);
        }

        self.cache
            .typed_table(component)
            .get_or_build(arity, || self.build_typed(array_type, component, arity))
    }

    fn build_typed(
        &self,
        array_type: &Type,
        component: &Type,
        arity: usize,
    ) -> Result<Adapter, SynthesisError> {
        tracing::debug!(%array_type, arity, "building typed collector");
        let collector = if component.is_primitive() {
            let unboxer = self
                .catalog
                .element_conversion(&Type::object_array(), array_type)?;
            self.build_varargs_array(&self.fill_new_array(), Some(&unboxer), arity)?
        } else {
            let prototype = Array::new(component.clone(), 0);
            let new_array = self
                .fill_new_typed_array()
                .bind_leading(Value::Array(prototype))?;
            self.build_varargs_array(&new_array, None, arity)?
        };
        let signature = Signature::uniform(component.clone(), arity, array_type.clone());
        Ok(collector
            .as_type(self.catalog, signature)?
            .renamed(format!("{}{}", array_type, arity)))
    }

    /// `(Object[]) -> List`, viewing the array as a list.
    pub(crate) fn as_list(&self) -> Adapter {
        memoized(&self.cache.as_list, || {
            Adapter::new(
                "asList",
                Signature::new(vec![Type::object_array()], Type::List),
                |args| match &args[0] {
                    Value::Array(array) => Ok(Value::List(array.clone())),
                    Value::Null => Ok(Value::Null),
                    other => Err(InvokeError::ArgumentType {
                        index: 0,
                        expected: Type::object_array(),
                        found: other.type_name(),
                    }),
                },
            )
        })
    }
}
