use crate::parser::ast;
use crate::types::ScalarCodec;
use crate::types::ScalarCodecError;
use crate::value::FieldValue;
use crate::value::InputValue;
use crate::value::OutputValue;
use crate::value::ScalarValue;

/// Codec for opaque string identifiers.
///
/// The wire form is always a plain string:
/// - output accepts only [`FieldValue::Scalar`] and writes its payload
/// - variables accept only strings
/// - literals accept only string literals
#[derive(Clone, Copy, Debug, Default)]
pub struct OpaqueIdCodec;

impl ScalarCodec for OpaqueIdCodec {
    fn serialize(&self, value: &FieldValue) -> Result<OutputValue, ScalarCodecError> {
        match value {
            FieldValue::Scalar(id) => Ok(OutputValue::String(id.as_str().to_string())),
            other => Err(ScalarCodecError::Serialize {
                expected: "an opaque identifier",
                found: other.kind_name(),
            }),
        }
    }

    fn parse_variable(&self, value: &InputValue) -> Result<ScalarValue, ScalarCodecError> {
        match value {
            InputValue::String(s) => Ok(ScalarValue::new(s.as_str())),
            InputValue::Scalar(id) => Ok(id.clone()),
            other => Err(ScalarCodecError::Parse {
                expected: "a string",
                found: other.kind_name(),
            }),
        }
    }

    fn parse_literal(&self, value: &ast::Value) -> Option<ScalarValue> {
        match value {
            ast::Value::String { value, .. } => Some(ScalarValue::new(value.as_str())),
            _ => None,
        }
    }
}
