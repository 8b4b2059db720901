use crate::value::GraphQLObject;
use crate::value::ScalarValue;
use std::sync::Arc;

/// What a resolver hands back to the executor.
///
/// The executor checks the value against the field's declared type:
/// leaves are serialized by their scalar, objects are walked with the
/// field's sub-selection, lists are completed element by element.
#[derive(Clone)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Scalar(ScalarValue),
    List(Vec<FieldValue>),
    Object(Arc<dyn GraphQLObject>),
}

impl FieldValue {
    /// Wraps an owned object.
    pub fn object<T: GraphQLObject + 'static>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    /// Wraps a borrowed object by cloning it, so resolvers holding only a
    /// reference can return it just like an owned value.
    pub fn object_ref<T: GraphQLObject + Clone + 'static>(value: &T) -> Self {
        Self::Object(Arc::new(value.clone()))
    }

    /// Collects `items` into a list value.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short description of the value's kind for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl std::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Object(obj) => write!(f, "Object({})", obj.type_name()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}
