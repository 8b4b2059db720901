use crate::types::GraphQLType;
use crate::types::OpaqueIdCodec;
use crate::types::ScalarType;
use crate::value::FieldValue;
use crate::value::OutputValue;
use crate::value::ScalarValue;

#[test]
fn builtin_names() {
    assert_eq!(GraphQLType::Bool.name(), "Boolean");
    assert_eq!(GraphQLType::Float.name(), "Float");
    assert_eq!(GraphQLType::ID.name(), "ID");
    assert_eq!(GraphQLType::Int.name(), "Int");
    assert_eq!(GraphQLType::String.name(), "String");
    assert!(GraphQLType::Int.is_builtin());
    assert!(!GraphQLType::Scalar(ScalarType::new("Opaque", OpaqueIdCodec)).is_builtin());
}

#[test]
fn int_output_must_fit_32_bits() {
    assert_eq!(
        GraphQLType::Int.serialize_leaf(&FieldValue::Int(42)),
        Ok(OutputValue::Int(42)),
    );
    assert!(GraphQLType::Int.serialize_leaf(&FieldValue::Int(i64::from(i32::MAX) + 1)).is_err());
    assert!(GraphQLType::Int.serialize_leaf(&FieldValue::Float(1.0)).is_err());
}

#[test]
fn float_output_accepts_ints() {
    assert_eq!(
        GraphQLType::Float.serialize_leaf(&FieldValue::Int(3)),
        Ok(OutputValue::Float(3.0)),
    );
    assert_eq!(
        GraphQLType::Float.serialize_leaf(&FieldValue::Float(3.95)),
        Ok(OutputValue::Float(3.95)),
    );
    assert!(GraphQLType::Float.serialize_leaf(&FieldValue::Float(f64::NAN)).is_err());
}

#[test]
fn id_output_accepts_strings_ints_and_scalars() {
    let expected = |s: &str| Ok(OutputValue::String(s.to_string()));
    assert_eq!(GraphQLType::ID.serialize_leaf(&FieldValue::from("a")), expected("a"));
    assert_eq!(GraphQLType::ID.serialize_leaf(&FieldValue::Int(9)), expected("9"));
    assert_eq!(
        GraphQLType::ID.serialize_leaf(&FieldValue::Scalar(ScalarValue::new("z"))),
        expected("z"),
    );
    assert!(GraphQLType::ID.serialize_leaf(&FieldValue::Boolean(true)).is_err());
}

#[test]
fn string_and_boolean_are_strict() {
    assert!(GraphQLType::String.serialize_leaf(&FieldValue::Int(1)).is_err());
    assert!(GraphQLType::Bool.serialize_leaf(&FieldValue::from("true")).is_err());
    assert_eq!(
        GraphQLType::Bool.serialize_leaf(&FieldValue::Boolean(false)),
        Ok(OutputValue::Boolean(false)),
    );
}

#[test]
fn custom_scalars_delegate_to_their_codec() {
    let scalar = GraphQLType::Scalar(ScalarType::new("Opaque", OpaqueIdCodec));
    assert_eq!(
        scalar.serialize_leaf(&FieldValue::Scalar(ScalarValue::new("q"))),
        Ok(OutputValue::String("q".to_string())),
    );
    assert!(scalar.serialize_leaf(&FieldValue::from("q")).is_err());
}
