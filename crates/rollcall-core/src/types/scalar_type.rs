use crate::types::ScalarCodec;
use std::sync::Arc;

/// A custom scalar type and the codec that gives it meaning.
#[derive(Clone, Debug)]
pub struct ScalarType {
    name: String,
    description: Option<String>,
    codec: Arc<dyn ScalarCodec>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>, codec: impl ScalarCodec + 'static) -> Self {
        Self {
            name: name.into(),
            description: None,
            codec: Arc::new(codec),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn codec(&self) -> &dyn ScalarCodec {
        self.codec.as_ref()
    }
}
