use crate::parser::ast::OperationKind;
use crate::value::InputValue;
use crate::value::Variables;
use serde::Deserialize;

/// A query string plus everything needed to pick and run one of its
/// operations.
///
/// Deserializes from the conventional JSON request body:
/// `{"query": "...", "operationName": "...", "variables": {...}}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub query: String,

    #[serde(default)]
    pub operation_name: Option<String>,

    /// When set, the selected operation must be of this kind.
    #[serde(default)]
    pub operation_kind: Option<OperationKind>,

    #[serde(default)]
    pub variables: Variables,
}
impl ExecutionRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_operation_kind(mut self, kind: OperationKind) -> Self {
        self.operation_kind = Some(kind);
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}
