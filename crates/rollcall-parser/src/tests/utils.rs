//! Shared helpers for parser tests.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::ParseResult;
use crate::SourcePosition;

/// A token with a zero-width span at the start of the document.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    GraphQLToken::new(
        kind,
        GraphQLSourceSpan::point(SourcePosition::start_of_document()),
    )
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

/// Produces tokens from a `Vec` so parser tests can bypass the lexer.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

pub(super) fn parse_executable(source: &str) -> ParseResult<ast::Document> {
    crate::parse_executable(source)
}

/// Parses `source` and returns its only operation.
///
/// # Panics
/// Panics if parsing fails or the document holds more than one operation.
pub(super) fn single_operation(source: &str) -> ast::OperationDefinition {
    let result = parse_executable(source);
    assert!(result.errors.is_empty(), "unexpected errors: {:?}", result.errors);
    let mut doc = result.into_valid_ast().unwrap();
    assert_eq!(doc.operations.len(), 1);
    doc.operations.remove(0)
}

/// Parses `source` and returns the first top-level field of its only
/// operation.
pub(super) fn first_field(source: &str) -> ast::Field {
    single_operation(source).selection_set.fields.remove(0)
}

/// Parses `{ f(v: <value>) }` and returns the argument value.
pub(super) fn parse_argument_value(value: &str) -> ast::Value {
    let field = first_field(&format!("{{ f(v: {value}) }}"));
    field.arguments.into_iter().next().unwrap().value
}

/// Parses `source`, asserts that it failed, and returns the errors.
pub(super) fn parse_errors(source: &str) -> Vec<GraphQLParseError> {
    let result = parse_executable(source);
    assert!(result.has_errors(), "expected errors for {source:?}");
    result.errors
}
