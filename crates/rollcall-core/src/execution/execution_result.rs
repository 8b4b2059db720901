use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::value::OutputObject;
use serde::Serialize;

/// The response envelope for one request.
///
/// `data` is `None` only when the request was aborted before any field ran;
/// otherwise it holds every top-level response key, with `null` in the slots
/// of fields that failed. Both keys are always serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: Option<OutputObject>,
    pub errors: Vec<GraphQLError>,
}
impl ExecutionResult {
    pub(crate) fn aborted(error: GraphQLError) -> Self {
        Self {
            data: None,
            errors: vec![error],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &GraphQLError> {
        self.errors.iter().filter(move |err| err.kind() == kind)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|err| {
            log::error!("failed to serialize execution result: {err}");
            serde_json::Value::Null
        })
    }
}
