/// Error produced while unescaping a string literal.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An escape sequence the language does not define (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// A `\u` escape that is malformed or names an invalid code point.
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,
}
