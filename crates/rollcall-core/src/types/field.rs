use crate::error::FieldError;
use crate::execution::ResolveContext;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::value::FieldValue;
use std::sync::Arc;

/// A field resolver. Receives the parent object (if any) and the coerced
/// arguments, and returns the field's value.
pub type Resolver =
    Arc<dyn Fn(&ResolveContext<'_>) -> Result<FieldValue, FieldError> + Send + Sync>;

/// A field on an [`ObjectType`](crate::types::ObjectType).
///
/// Fields without a resolver read their value from the parent object via
/// [`GraphQLObject::field_value()`](crate::value::GraphQLObject::field_value).
#[derive(Clone)]
pub struct Field {
    description: Option<String>,
    name: String,
    parameters: Vec<Parameter>,
    resolver: Option<Resolver>,
    type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            description: None,
            name: name.into(),
            parameters: vec![],
            resolver: None,
            type_annotation,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&ResolveContext<'_>) -> Result<FieldValue, FieldError> + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter_named(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|param| param.name() == name)
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_annotation", &self.type_annotation)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}
