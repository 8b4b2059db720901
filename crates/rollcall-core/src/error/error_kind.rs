use serde::Deserialize;
use serde::Serialize;

/// The category of a response error, serialized as `extensions.code`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ErrorKind {
    /// The query text could not be parsed. Aborts the request.
    #[serde(rename = "GRAPHQL_SYNTAX_ERROR")]
    Syntax,

    /// No operation could be selected, or the schema has no root type for
    /// it. Aborts the request.
    #[serde(rename = "OPERATION_RESOLUTION_ERROR")]
    OperationResolution,

    /// A selection does not match the schema.
    #[serde(rename = "SCHEMA_BINDING_ERROR")]
    SchemaBinding,

    #[serde(rename = "ARGUMENT_COERCION_ERROR")]
    ArgumentCoercion,

    /// A resolver reported a domain failure.
    #[serde(rename = "RESOLVER_ERROR")]
    Resolver,

    /// A resolver panicked or returned something the schema cannot
    /// represent. The message never carries details.
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}
impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Syntax => "GRAPHQL_SYNTAX_ERROR",
            Self::OperationResolution => "OPERATION_RESOLUTION_ERROR",
            Self::SchemaBinding => "SCHEMA_BINDING_ERROR",
            Self::ArgumentCoercion => "ARGUMENT_COERCION_ERROR",
            Self::Resolver => "RESOLVER_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Whether errors of this kind stop execution before any field resolves.
    pub fn aborts_request(&self) -> bool {
        matches!(self, Self::Syntax | Self::OperationResolution)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
