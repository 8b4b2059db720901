use crate::parser::ast;
use crate::value::FieldValue;
use crate::value::InputValue;
use crate::value::OutputValue;
use crate::value::ScalarValue;

/// Converts a custom scalar between its wire form and [`ScalarValue`].
///
/// All three operations are pure.
pub trait ScalarCodec: std::fmt::Debug + Send + Sync {
    /// Converts a resolver's value for output. Fails if the value is not the
    /// kind this scalar wraps.
    fn serialize(&self, value: &FieldValue) -> Result<OutputValue, ScalarCodecError>;

    /// Parses a value supplied through a request variable.
    fn parse_variable(&self, value: &InputValue) -> Result<ScalarValue, ScalarCodecError>;

    /// Parses an inline literal from a query document. `None` means the
    /// literal is not valid for this scalar.
    fn parse_literal(&self, value: &ast::Value) -> Option<ScalarValue>;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScalarCodecError {
    #[error("cannot serialize a {found} value as {expected}")]
    Serialize {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected {expected}, found {found}")]
    Parse {
        expected: &'static str,
        found: &'static str,
    },
}
