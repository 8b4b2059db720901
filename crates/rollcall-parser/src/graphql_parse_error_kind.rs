use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Variants carry only what a caller needs to branch on. The human-readable
/// explanation lives in [`GraphQLParseError::message()`](crate::GraphQLParseError::message)
/// and its notes.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// The parser expected one of `expected` but found something else.
    ///
    /// ```text
    /// { student(id 1) { name } }
    ///              ^ expected `:`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended in the middle of a construct.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer could not form a token (bad character, unterminated string,
    /// malformed number).
    #[error("lexer error")]
    LexerError,

    /// A `{`, `(` or `[` was never closed. The opening location is attached
    /// as a note.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A literal could not be converted to a value (integer overflow,
    /// non-finite float, bad escape).
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// `{}`, `()` and the like, which must contain at least one item.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Valid GraphQL that this engine deliberately does not run: fragments,
    /// directives, subscriptions, object literals.
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature {
        feature: String,
    },

    /// Anything without a more specific category. See the error message.
    #[error("invalid syntax")]
    InvalidSyntax,
}
