use pretty_assertions::assert_eq;

use crate::{
    types::{KIND_COUNT, Kind, Signature, Type},
    values::{Array, Value},
};

#[test]
fn test_kind_ordinals_are_dense() {
    for (i, kind) in Kind::ALL.iter().enumerate() {
        assert_eq!(kind.ordinal(), i);
    }
    assert_eq!(Kind::ALL.len(), KIND_COUNT);
}

#[test]
fn test_kind_basic_chars_round_trip() {
    let chars: String = Kind::ALL.iter().map(|k| k.basic_char()).collect();
    assert_eq!(chars, "ZBSCIJFDLV");
    for kind in Kind::ALL {
        assert_eq!(Kind::from_basic_char(kind.basic_char()), Some(kind));
    }
    assert_eq!(Kind::from_basic_char('Q'), None);
}

#[test]
fn test_slot_widths() {
    assert_eq!(Kind::Void.slot_width(), 0);
    assert_eq!(Kind::Long.slot_width(), 2);
    assert_eq!(Kind::Double.slot_width(), 2);
    assert_eq!(Kind::Int.slot_width(), 1);
    assert_eq!(Kind::Reference.slot_width(), 1);
    assert!(Kind::Long.is_wide());
    assert!(!Kind::Float.is_wide());
}

#[test]
fn test_widening_relation() {
    assert!(Kind::Int.is_convertible_from(Kind::Char));
    assert!(Kind::Double.is_convertible_from(Kind::Long));
    assert!(Kind::Short.is_convertible_from(Kind::Byte));
    assert!(!Kind::Char.is_convertible_from(Kind::Byte));
    assert!(!Kind::Short.is_convertible_from(Kind::Char));
    assert!(!Kind::Int.is_convertible_from(Kind::Long));
    assert!(!Kind::Boolean.is_convertible_from(Kind::Int));
    assert!(!Kind::Int.is_convertible_from(Kind::Boolean));
    for kind in Kind::ALL {
        assert!(kind.is_convertible_from(kind));
    }
}

#[test]
fn test_kind_zero_values() {
    assert_eq!(Kind::Int.zero(), Value::int(0));
    assert_eq!(Kind::Boolean.zero(), Value::boolean(false));
    assert_eq!(Kind::Double.zero(), Value::double(0.0));
    assert_eq!(Kind::Reference.zero(), Value::Null);
    assert_eq!(Kind::Void.zero(), Value::Void);
}

#[test]
fn test_type_kinds() {
    assert_eq!(Type::INT.kind(), Kind::Int);
    assert_eq!(Type::Str.kind(), Kind::Reference);
    assert_eq!(Type::Wrapper(Kind::Int).kind(), Kind::Reference);
    assert_eq!(Type::object_array().kind(), Kind::Reference);
    assert_eq!(Type::of(Kind::Reference), Type::Object);
    assert_eq!(Type::wrapper(Kind::Void), Type::Object);
    assert!(Type::VOID.is_void());
}

#[test]
fn test_valid_components() {
    assert!(Type::INT.is_valid_component());
    assert!(Type::Object.is_valid_component());
    assert!(Type::of(Kind::Reference).is_valid_component());
    assert!(!Type::VOID.is_valid_component());
    assert!(!Type::Basic(Kind::Reference).is_valid_component());
}

#[test]
fn test_assignability() {
    let str_array = Type::array(Type::Str);
    let int_array = Type::array(Type::INT);

    assert!(Type::Object.is_assignable_from(&Type::Str));
    assert!(Type::Object.is_assignable_from(&int_array));
    assert!(!Type::Object.is_assignable_from(&Type::INT));
    assert!(!Type::Str.is_assignable_from(&Type::Object));

    // Reference arrays are covariant, primitive arrays are not.
    assert!(Type::object_array().is_assignable_from(&str_array));
    assert!(!str_array.is_assignable_from(&Type::object_array()));
    assert!(!Type::object_array().is_assignable_from(&int_array));
    assert!(!Type::array(Type::LONG).is_assignable_from(&int_array));
}

#[test]
fn test_instances() {
    let strings = Array::from_values(Type::Str, [Value::str("a")]).unwrap();

    assert!(Type::Object.is_instance(&Value::str("a")));
    assert!(!Type::Object.is_instance(&Value::Null));
    assert!(!Type::Object.is_instance(&Value::int(1)));
    assert!(Type::Wrapper(Kind::Int).is_instance(&Value::boxed_int(1)));
    assert!(!Type::Wrapper(Kind::Long).is_instance(&Value::boxed_int(1)));
    assert!(Type::object_array().is_instance(&Value::Array(strings.clone())));
    assert!(Type::array(Type::Str).is_instance(&Value::Array(strings)));
}

#[test]
fn test_accepts() {
    assert!(Type::INT.accepts(&Value::int(3)));
    assert!(!Type::INT.accepts(&Value::boxed_int(3)));
    assert!(!Type::INT.accepts(&Value::long(3)));
    assert!(Type::Str.accepts(&Value::Null));
    assert!(!Type::Str.accepts(&Value::boxed_int(3)));
    assert!(!Type::VOID.accepts(&Value::Void));
}

#[test]
fn test_type_display() {
    assert_eq!(Type::INT.to_string(), "int");
    assert_eq!(Type::Wrapper(Kind::Char).to_string(), "Character");
    assert_eq!(Type::array(Type::array(Type::Str)).to_string(), "String[][]");
    assert_eq!(Type::List.to_string(), "List");
}

#[test]
fn test_signature_shapes() {
    let sig = Signature::new(vec![Type::INT, Type::LONG, Type::Object], Type::VOID);
    assert_eq!(sig.arity(), 3);
    assert_eq!(sig.slot_count(), 4);
    assert_eq!(sig.to_string(), "(int,long,Object)void");

    let spliced = sig.splice_params(1..2, &[Type::Str, Type::Str]);
    assert_eq!(spliced.params(), &[Type::INT, Type::Str, Type::Str, Type::Object]);
    assert_eq!(spliced.ret(), &Type::VOID);

    let dropped = sig.splice_params(0..1, &[]);
    assert_eq!(dropped.arity(), 2);

    assert_eq!(
        Signature::generic(2, Type::object_array()).to_string(),
        "(Object,Object)Object[]"
    );
    assert_eq!(sig.with_return(Type::INT).ret(), &Type::INT);
}
