use crate::error::FieldError;
use crate::value::InputValue;
use crate::value::ScalarValue;
use indexmap::IndexMap;

/// The coerced arguments passed to a resolver.
///
/// An argument that was omitted (and has no default) is absent; an argument
/// given as `null` is present with [`InputValue::Null`]. The typed getters
/// treat both as `None` and fail only when the value has the wrong kind, which
/// coercion normally rules out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    values: IndexMap<String, InputValue>,
}
impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: InputValue) {
        self.values.insert(name.into(), value);
    }

    /// `true` if the argument was supplied, even as `null`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.values.get(name)
    }

    pub fn get_f64(&self, name: &str) -> Result<Option<f64>, FieldError> {
        self.typed(name, "Float", InputValue::as_f64)
    }

    pub fn get_i64(&self, name: &str) -> Result<Option<i64>, FieldError> {
        self.typed(name, "Int", InputValue::as_i64)
    }

    pub fn get_scalar(&self, name: &str) -> Result<Option<ScalarValue>, FieldError> {
        self.typed(name, "a custom scalar", |v| v.as_scalar().cloned())
    }

    pub fn get_str(&self, name: &str) -> Result<Option<&str>, FieldError> {
        self.typed(name, "String", InputValue::as_str)
    }

    /// Like [`get_i64()`](Self::get_i64), for arguments declared non-null.
    pub fn require_i64(&self, name: &str) -> Result<i64, FieldError> {
        self.get_i64(name)?.ok_or_else(|| {
            FieldError::internal(format!("required argument `{name}` is missing"))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    fn typed<'a, T>(
        &'a self,
        name: &str,
        expected: &str,
        extract: impl FnOnce(&'a InputValue) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        match self.values.get(name) {
            None | Some(InputValue::Null) => Ok(None),
            Some(value) => extract(value).map(Some).ok_or_else(|| {
                FieldError::internal(format!(
                    "argument `{name}` is a {}, not {expected}",
                    value.kind_name(),
                ))
            }),
        }
    }
}

impl FromIterator<(String, InputValue)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, InputValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
