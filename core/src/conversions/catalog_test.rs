use pretty_assertions::assert_eq;

use crate::{
    adapter::Adapter,
    conversions::ConversionCatalog,
    errors::{InvokeError, SynthesisError},
    types::{Kind, Signature, Type},
    values::{Array, Primitive, Value},
};

#[test]
fn test_requests_are_memoized() {
    let catalog = ConversionCatalog::new();
    assert!(Adapter::same(&catalog.unbox(Kind::Int, false), &catalog.unbox(Kind::Int, false)));
    assert!(!Adapter::same(&catalog.unbox(Kind::Int, false), &catalog.unbox(Kind::Int, true)));
    assert!(Adapter::same(&catalog.boxing(Kind::Long, true), &catalog.boxing(Kind::Long, true)));
    assert!(Adapter::same(&catalog.zero(Kind::Float), &catalog.zero(Kind::Float)));
    for source in Kind::ALL {
        for destination in Kind::ALL {
            assert!(Adapter::same(
                &catalog.primitive_conversion(source, destination),
                &catalog.primitive_conversion(source, destination),
            ));
        }
    }
    let wrapper = Type::Wrapper(Kind::Int);
    assert!(Adapter::same(&catalog.cast(&wrapper).unwrap(), &catalog.cast(&wrapper).unwrap()));
    // Casts to other reference types are built on every request.
    assert!(!Adapter::same(
        &catalog.cast(&Type::Str).unwrap(),
        &catalog.cast(&Type::Str).unwrap()
    ));
}

#[test]
fn test_unbox() {
    let catalog = ConversionCatalog::new();
    let strict = catalog.unbox(Kind::Int, false);
    assert_eq!(strict.signature(), &Signature::new(vec![Type::Object], Type::INT));
    assert_eq!(strict.invoke(&[Value::boxed_int(5)]), Ok(Value::int(5)));
    assert_eq!(
        strict.invoke(&[Value::Null]),
        Err(InvokeError::NullPointer { expected: Kind::Int })
    );

    let lenient = catalog.unbox(Kind::Int, true);
    assert_eq!(lenient.invoke(&[Value::Null]), Ok(Value::int(0)));
    assert_eq!(
        lenient.invoke(&[Value::Boxed(Primitive::Double(2.9))]),
        Ok(Value::int(2))
    );
}

#[test]
fn test_unbox_reference_and_void() {
    let catalog = ConversionCatalog::new();
    assert!(Adapter::same(
        &catalog.unbox(Kind::Reference, false),
        &catalog.identity(Kind::Reference)
    ));
    let void = catalog.unbox(Kind::Void, false);
    assert_eq!(void.signature(), &Signature::new(vec![Type::Object], Type::VOID));
    assert_eq!(void.invoke(&[Value::str("ignored")]), Ok(Value::Void));
}

#[test]
fn test_boxing() {
    let catalog = ConversionCatalog::new();
    let exact = catalog.boxing(Kind::Int, true);
    let loose = catalog.boxing(Kind::Int, false);
    assert_eq!(exact.return_type(), &Type::Wrapper(Kind::Int));
    assert_eq!(loose.return_type(), &Type::Object);
    assert_eq!(exact.invoke(&[Value::int(3)]), Ok(Value::boxed_int(3)));
    assert_eq!(loose.invoke(&[Value::int(3)]), Ok(Value::boxed_int(3)));

    let void = catalog.boxing(Kind::Void, false);
    assert_eq!(void.arity(), 0);
    assert_eq!(void.invoke(&[]), Ok(Value::Null));
}

#[test]
fn test_cast() {
    let catalog = ConversionCatalog::new();
    let to_str = catalog.cast(&Type::Str).unwrap();
    assert_eq!(to_str.invoke(&[Value::str("s")]), Ok(Value::str("s")));
    assert_eq!(to_str.invoke(&[Value::Null]), Ok(Value::Null));
    assert_eq!(
        to_str.invoke(&[Value::boxed_int(1)]),
        Err(InvokeError::ClassCast {
            expected: Type::Str,
            found: "Integer".to_string(),
        })
    );

    assert!(Adapter::same(
        &catalog.cast(&Type::Object).unwrap(),
        &catalog.identity(Kind::Reference)
    ));
    assert_eq!(
        catalog.cast(&Type::INT).unwrap_err(),
        SynthesisError::UnsupportedConversion {
            from: Type::Object,
            to: Type::INT,
        }
    );
}

#[test]
fn test_cast_to_array_types() {
    let catalog = ConversionCatalog::new();
    let to_objects = catalog.cast(&Type::object_array()).unwrap();
    let strings = Value::Array(Array::new(Type::Str, 1));
    let ints = Value::Array(Array::new(Type::INT, 1));
    assert_eq!(to_objects.invoke(&[strings.clone()]), Ok(strings));
    assert!(to_objects.invoke(&[ints]).is_err());
}

#[test]
fn test_identity_zero_ignore() {
    let catalog = ConversionCatalog::new();
    assert_eq!(catalog.identity(Kind::Long).invoke(&[Value::long(9)]), Ok(Value::long(9)));
    assert_eq!(catalog.identity(Kind::Void).arity(), 0);
    assert_eq!(catalog.identity(Kind::Void).invoke(&[]), Ok(Value::Void));
    assert_eq!(catalog.zero(Kind::Char).invoke(&[]), Ok(Value::char(0)));
    assert_eq!(catalog.zero(Kind::Reference).invoke(&[]), Ok(Value::Null));
    assert_eq!(catalog.zero(Kind::Void).invoke(&[]), Ok(Value::Void));
    assert_eq!(catalog.ignore(Kind::Int).invoke(&[Value::int(1)]), Ok(Value::Void));
}

#[test]
fn test_primitive_conversion_rules() {
    let catalog = ConversionCatalog::new();
    assert!(Adapter::same(
        &catalog.primitive_conversion(Kind::Int, Kind::Int),
        &catalog.identity(Kind::Int)
    ));
    assert!(Adapter::same(
        &catalog.primitive_conversion(Kind::Void, Kind::Double),
        &catalog.zero(Kind::Double)
    ));
    assert!(Adapter::same(
        &catalog.primitive_conversion(Kind::Short, Kind::Void),
        &catalog.ignore(Kind::Short)
    ));
    assert!(Adapter::same(
        &catalog.primitive_conversion(Kind::Reference, Kind::Byte),
        &catalog.unbox(Kind::Byte, true)
    ));
    assert!(Adapter::same(
        &catalog.primitive_conversion(Kind::Float, Kind::Reference),
        &catalog.boxing(Kind::Float, false)
    ));

    let i2b = catalog.primitive_conversion(Kind::Int, Kind::Byte);
    assert_eq!(i2b.name(), "int2byte");
    assert_eq!(i2b.invoke(&[Value::int(200)]), Ok(Value::byte(-56)));
    let i2z = catalog.primitive_conversion(Kind::Int, Kind::Boolean);
    assert_eq!(i2z.invoke(&[Value::int(1)]), Ok(Value::boolean(true)));
    assert_eq!(i2z.invoke(&[Value::int(2)]), Ok(Value::boolean(false)));
    let z2b = catalog.primitive_conversion(Kind::Boolean, Kind::Byte);
    assert_eq!(z2b.invoke(&[Value::boolean(true)]), Ok(Value::byte(1)));
    assert_eq!(z2b.invoke(&[Value::boolean(false)]), Ok(Value::byte(0)));
}

#[test]
fn test_primitive_conversion_signatures() {
    let catalog = ConversionCatalog::new();
    for source in Kind::PRIMITIVES {
        for destination in Kind::PRIMITIVES {
            let conversion = catalog.primitive_conversion(source, destination);
            assert_eq!(
                conversion.signature(),
                &Signature::new(vec![Type::Basic(source)], Type::Basic(destination)),
            );
            let zero = source.zero();
            assert_eq!(conversion.invoke(&[zero]), Ok(destination.zero()));
        }
    }
}

#[test]
fn test_type_level_conversion() {
    let catalog = ConversionCatalog::new();
    let to_wrapper = catalog
        .conversion(&Type::INT, &Type::Wrapper(Kind::Int))
        .unwrap();
    assert_eq!(
        to_wrapper.invoke(&[Value::int(4)]).unwrap().as_boxed(),
        Some(Primitive::Int(4))
    );

    let from_wrapper = catalog
        .conversion(&Type::Wrapper(Kind::Long), &Type::INT)
        .unwrap();
    assert_eq!(
        from_wrapper.invoke(&[Value::Boxed(Primitive::Long(1 << 33))]),
        Ok(Value::int(0))
    );

    for target in [Type::Wrapper(Kind::Long), Type::Str, Type::List, Type::object_array()] {
        assert_eq!(
            catalog.conversion(&Type::INT, &target).unwrap_err(),
            SynthesisError::UnsupportedConversion {
                from: Type::INT,
                to: target.clone(),
            }
        );
    }
    assert!(catalog.conversion(&Type::Str, &Type::INT).is_err());
}
