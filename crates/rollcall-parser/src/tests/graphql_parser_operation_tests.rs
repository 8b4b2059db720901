//! Tests for operation definitions and variable definitions.

use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::tests::utils::parse_executable;
use crate::tests::utils::single_operation;

// =============================================================================
// Operation kinds
// =============================================================================

/// A bare `{ ... }` is an anonymous query.
#[test]
fn shorthand_query() {
    let op = single_operation("{ list { name } }");
    assert_eq!(op.kind, OperationKind::Query);
    assert!(op.shorthand);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
}

#[test]
fn named_query() {
    let op = single_operation("query Roster { list { id } }");
    assert_eq!(op.kind, OperationKind::Query);
    assert!(!op.shorthand);
    assert_eq!(op.name_str(), Some("Roster"));
}

#[test]
fn anonymous_mutation() {
    let op = single_operation(r#"mutation { enroll(name: "Ada") { id } }"#);
    assert_eq!(op.kind, OperationKind::Mutation);
    assert!(op.name.is_none());
    assert_eq!(op.selection_set.fields[0].name, "enroll");
}

/// Several operations may share a document; they keep source order.
#[test]
fn multiple_operations() {
    let result = parse_executable(
        "query A { list { id } }
         mutation B { leave(id: 1) { id } }
         { student(id: 2) { name } }",
    );
    let doc = result.valid_ast().unwrap();
    let names: Vec<_> = doc.operations.iter().map(|op| op.name_str()).collect();
    assert_eq!(names, vec![Some("A"), Some("B"), None]);
    assert_eq!(doc.operations_of_kind(OperationKind::Query).count(), 2);
    assert_eq!(doc.operation_named("B").unwrap().kind, OperationKind::Mutation);
}

/// Operation spans run from the keyword to the closing brace.
#[test]
fn operation_span_covers_keyword_through_brace() {
    let source = "  query Q { list { id } }  ";
    let op = single_operation(source);
    assert_eq!(op.span.slice(source), Some("query Q { list { id } }"));
}

/// `true`, `false` and `null` are valid names outside of value position.
#[test]
fn keyword_like_operation_name() {
    let op = single_operation("query null { list { id } }");
    assert_eq!(op.name_str(), Some("null"));
}

// =============================================================================
// Variable definitions
// =============================================================================

#[test]
fn variable_definitions_with_types() {
    let op = single_operation(
        "query Q($id: Int!, $names: [String!], $score: Float) { student(id: $id) { name } }",
    );
    let defs = &op.variable_definitions;
    assert_eq!(defs.len(), 3);

    assert_eq!(defs[0].name, "id");
    assert_eq!(defs[0].type_annotation.to_string(), "Int!");
    assert!(defs[0].type_annotation.is_non_null());

    assert_eq!(defs[1].type_annotation.to_string(), "[String!]");
    assert_eq!(defs[1].type_annotation.innermost_name(), "String");
    assert!(matches!(defs[1].type_annotation, TypeAnnotation::List { .. }));

    assert_eq!(defs[2].type_annotation.to_string(), "Float");
    assert!(defs[2].default_value.is_none());
}

#[test]
fn variable_default_values() {
    let op = single_operation(
        r#"query Q($id: Int = 3, $name: String = "Ada", $tags: [Int] = [1, 2]) { list { id } }"#,
    );
    let defaults: Vec<_> = op
        .variable_definitions
        .iter()
        .map(|def| def.default_value.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(defaults, vec!["3", "\"Ada\"", "[1, 2]"]);
    assert!(op.variable_definition("name").is_some());
    assert!(op.variable_definition("missing").is_none());
}

/// Default values must be constant.
#[test]
fn variable_in_default_value_is_error() {
    let result = parse_executable("query Q($a: Int = $b) { list { id } }");
    assert!(result.has_errors());
    assert!(
        result.errors[0]
            .message()
            .contains("variables are not allowed in variable default values"),
    );
}

#[test]
fn variable_used_as_argument() {
    let op = single_operation("query Q($id: Int!) { student(id: $id) { name } }");
    let arg = &op.selection_set.fields[0].arguments[0];
    match &arg.value {
        Value::Variable(var) => assert_eq!(var.name, "id"),
        other => panic!("expected variable, got {other:?}"),
    }
}

#[test]
fn empty_variable_definitions_is_error() {
    let result = parse_executable("query Q() { list { id } }");
    assert!(result.has_errors());
    assert!(result.errors[0].message().contains("variable definitions cannot be empty"));
}
