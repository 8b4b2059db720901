use thiserror::Error;

/// A problem found while checking the finished set of types against each
/// other.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Parameter default values must be valid for the parameter's type: The \
        default for `{type_name}.{field_name}({parameter_name}:)` is invalid: \
        {reason}"
    )]
    InvalidParameterDefaultValue {
        field_name: String,
        parameter_name: String,
        reason: String,
        type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{type_name}.{field_name}({parameter_name}:)` parameter was declared \
        with the `{outputonly_type_name}` type, which is an object type."
    )]
    InvalidParameterWithOutputOnlyType {
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error("`{location}` refers to the `{undefined_type_name}` type, which is not defined")]
    UndefinedTypeReference {
        location: String,
        undefined_type_name: String,
    },
}
