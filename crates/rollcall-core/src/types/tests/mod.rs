mod graphql_type_tests;
mod object_type_builder_tests;
mod type_annotation_tests;

use crate::parser;
use crate::parser::ast;

/// Parses `literal` as the value of a single argument.
pub(super) fn parse_literal(literal: &str) -> ast::Value {
    let source = format!("{{ f(x: {literal}) }}");
    let result = parser::parse_executable(&source);
    let doc = result.into_valid_ast().expect("literal parses");
    doc.operations[0].selection_set.fields[0].arguments[0]
        .value
        .clone()
}
