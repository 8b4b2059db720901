use indexmap::IndexMap;

/// A response object: result keys in selection order.
pub type OutputObject = IndexMap<String, OutputValue>;

/// A node of the response data tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Null,
    Boolean(bool),
    Int(i32),
    Float(f64),
    String(String),
    List(Vec<OutputValue>),
    Object(OutputObject),
}

impl OutputValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_object(&self) -> Option<&OutputObject> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[OutputValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&OutputValue> {
        self.as_object().and_then(|map| map.get(key))
    }
}
