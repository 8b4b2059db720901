use crate::types::ScalarCodecError;
use crate::types::TypeAnnotation;
use thiserror::Error;

/// Why an input value does not fit its declared type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("integer `{value}` overflows a 32-bit signed integer")]
    IntOutOfRange {
        value: i64,
    },

    #[error("{found} literals are not valid `{type_name}` values")]
    InvalidScalarLiteral {
        found: &'static str,
        type_name: String,
    },

    #[error("variable `${name}` of non-null type `{type_annotation}` was not provided")]
    MissingVariable {
        name: String,
        type_annotation: TypeAnnotation,
    },

    #[error("`{type_name}` is an object type and cannot be used as input")]
    NotAnInputType {
        type_name: String,
    },

    #[error("expected a non-null `{expected}`, found null")]
    NullForNonNull {
        expected: TypeAnnotation,
    },

    #[error("invalid `{type_name}` value: {source}")]
    ScalarParse {
        type_name: String,
        source: ScalarCodecError,
    },

    #[error("variable `${name}` is not defined by the operation")]
    UndefinedVariable {
        name: String,
    },

    #[error("unknown type `{type_name}`")]
    UnknownType {
        type_name: String,
    },

    #[error("expected a value of type `{expected}`, found {found}")]
    WrongKind {
        expected: String,
        found: &'static str,
    },
}
