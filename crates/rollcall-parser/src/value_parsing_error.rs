use crate::GraphQLStringParsingError;

/// Error converting the raw text of a literal token into a value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    #[error("Invalid string literal: {0}")]
    String(#[from] GraphQLStringParsingError),

    /// Integer literals must fit in a signed 32-bit integer.
    #[error("Invalid integer literal: {0}")]
    Int(String),

    /// Float literals must be finite.
    #[error("Invalid float literal: {0}")]
    Float(String),
}
