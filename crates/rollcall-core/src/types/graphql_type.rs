use crate::types::ObjectType;
use crate::types::ScalarCodecError;
use crate::types::ScalarType;
use crate::value::FieldValue;
use crate::value::OutputValue;
use std::sync::Arc;

/// A named type in the registry.
///
/// The set of type kinds is closed: built-in scalars, custom scalars (with a
/// codec) and object types. Wrapping in lists and non-null happens in
/// [`TypeAnnotation`](crate::types::TypeAnnotation), not here.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Bool,
    Float,
    ID,
    Int,
    Object(Arc<ObjectType>),
    Scalar(ScalarType),
    String,
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    /// Leaf types serialize to a single value and cannot have sub-selections.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Object(_))
    }

    /// Only leaf types may be used for parameters and variables.
    pub fn is_input_type(&self) -> bool {
        self.is_leaf()
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    /// Converts a resolved value into its output form. Object types are not
    /// leaves and always fail here.
    pub(crate) fn serialize_leaf(
        &self,
        value: &FieldValue,
    ) -> Result<OutputValue, ScalarCodecError> {
        let mismatch = |expected: &'static str| ScalarCodecError::Serialize {
            expected,
            found: value.kind_name(),
        };
        match (self, value) {
            (Self::Bool, FieldValue::Boolean(b)) => Ok(OutputValue::Boolean(*b)),
            (Self::Bool, _) => Err(mismatch("Boolean")),

            (Self::Float, FieldValue::Float(f)) if f.is_finite() => Ok(OutputValue::Float(*f)),
            (Self::Float, FieldValue::Int(i)) => Ok(OutputValue::Float(*i as f64)),
            (Self::Float, _) => Err(mismatch("Float")),

            (Self::ID, FieldValue::String(s)) => Ok(OutputValue::String(s.clone())),
            (Self::ID, FieldValue::Int(i)) => Ok(OutputValue::String(i.to_string())),
            (Self::ID, FieldValue::Scalar(id)) => {
                Ok(OutputValue::String(id.as_str().to_string()))
            },
            (Self::ID, _) => Err(mismatch("ID")),

            (Self::Int, FieldValue::Int(i)) => i32::try_from(*i)
                .map(OutputValue::Int)
                .map_err(|_| mismatch("a 32-bit Int")),
            (Self::Int, _) => Err(mismatch("Int")),

            (Self::String, FieldValue::String(s)) => Ok(OutputValue::String(s.clone())),
            (Self::String, _) => Err(mismatch("String")),

            (Self::Scalar(scalar), value) => scalar.codec().serialize(value),
            (Self::Object(_), _) => Err(mismatch("a leaf value")),
        }
    }
}
