use crate::parser::ast::OperationKind;
use crate::schema::TypeValidationError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field defines the `{param_name}` \
        parameter more than once"
    )]
    DuplicateParameterDefinition {
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Multiple types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        type_name: String,
    },

    #[error(
        "Parameter names must not start with `__`: \
        `{type_name}.{field_name}({param_name}:)`"
    )]
    InvalidDunderPrefixedParamName {
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation} root operation type is `{type_name}`, which is not an \
        object type"
    )]
    NonObjectOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "The query and mutation root operations are both defined with the \
        `{reused_type_name}` type. Root operations must use different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
    },

    #[error("Found {} type validation error(s)", errors.len())]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
