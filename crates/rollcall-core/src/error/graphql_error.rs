use crate::error::ErrorKind;
use crate::error::ResponsePath;
use crate::parser::GraphQLErrorNoteKind;
use crate::parser::GraphQLParseError;
use crate::parser::GraphQLSourceSpan;
use serde::Deserialize;
use serde::Serialize;

/// A 1-based line/column position in the query text.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

impl From<&GraphQLSourceSpan> for ErrorLocation {
    fn from(span: &GraphQLSourceSpan) -> Self {
        Self {
            line: span.start_inclusive.line_number(),
            column: span.start_inclusive.column_number(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorExtensions {
    pub code: ErrorKind,
}

/// An entry in a response's `errors` list.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,

    /// The field (or list element) the error belongs to. Absent for errors
    /// that abort the whole request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<ResponsePath>,

    pub extensions: ErrorExtensions,
}
impl GraphQLError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            extensions: ErrorExtensions { code: kind },
        }
    }

    pub fn at(mut self, span: &GraphQLSourceSpan) -> Self {
        self.locations.push(span.into());
        self
    }

    pub fn with_path(mut self, path: ResponsePath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.extensions.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// The parse error's notes are appended to the message so the response names
/// the argument or selection that failed.
impl From<&GraphQLParseError> for GraphQLError {
    fn from(err: &GraphQLParseError) -> Self {
        let mut message = err.message().to_string();
        for note in err.notes() {
            match note.kind {
                GraphQLErrorNoteKind::General => message.push_str("; "),
                GraphQLErrorNoteKind::Help => message.push_str("; help: "),
            }
            message.push_str(&note.message);
        }
        Self::new(ErrorKind::Syntax, message).at(err.span())
    }
}
