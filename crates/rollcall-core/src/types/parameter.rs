use crate::types::TypeAnnotation;
use crate::value::InputValue;

/// A named, typed argument accepted by a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    default_value: Option<InputValue>,
    description: Option<String>,
    name: String,
    type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            description: None,
            name: name.into(),
            type_annotation,
        }
    }

    /// The value used when a request omits this argument. Checked against
    /// the parameter's type when the schema is built.
    pub fn default_value(mut self, value: impl Into<InputValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn get_default_value(&self) -> Option<&InputValue> {
        self.default_value.as_ref()
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A parameter is required when its type is non-null and it has no
    /// default value.
    pub fn is_required(&self) -> bool {
        self.type_annotation.is_non_null() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
