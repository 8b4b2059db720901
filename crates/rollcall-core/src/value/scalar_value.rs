/// An opaque identifier wrapping a single string payload.
///
/// Immutable once constructed; two values are equal when their payloads are.
/// On the wire it is always a plain string.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ScalarValue(String);

impl ScalarValue {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScalarValue {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

impl From<String> for ScalarValue {
    fn from(payload: String) -> Self {
        Self(payload)
    }
}
