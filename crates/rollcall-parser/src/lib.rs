//! Parser for rollcall query documents.
//!
//! The accepted language is the executable subset of GraphQL that the
//! rollcall engine runs: `query` and `mutation` operations (or the `{ ... }`
//! shorthand), variable definitions, aliased fields with arguments, nested
//! selection sets, and scalar/list literal values. Fragments, directives,
//! subscriptions and object literals are rejected with a diagnostic that names
//! the unsupported construct.
//!
//! ```
//! use rollcall_parser::ast::OperationKind;
//!
//! let result = rollcall_parser::parse_executable("{ student(id: 1) { name } }");
//! let doc = result.valid_ast().expect("document parses");
//! assert_eq!(doc.operations[0].kind, OperationKind::Query);
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod parse_result;
mod source_position;
pub mod token;
pub mod token_source;
mod value_parsing_error;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parse_result::ParseResult;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;

/// Parses `source` as an executable document.
///
/// Shorthand for `GraphQLParser::new(source).parse_executable_document()`.
pub fn parse_executable(source: &str) -> ParseResult<ast::Document> {
    GraphQLParser::new(source).parse_executable_document()
}

#[cfg(test)]
mod tests;
