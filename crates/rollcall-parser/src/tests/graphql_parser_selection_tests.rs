//! Tests for selection sets, fields, aliases and arguments.

use crate::ast::Value;
use crate::tests::utils::first_field;
use crate::tests::utils::parse_errors;
use crate::tests::utils::single_operation;

#[test]
fn fields_keep_source_order() {
    let op = single_operation("{ list { id name des score nationalid } }");
    let list = &op.selection_set.fields[0];
    let names: Vec<_> = list
        .selection_set
        .as_ref()
        .unwrap()
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "name", "des", "score", "nationalid"]);
}

#[test]
fn leaf_field_has_no_selection_set() {
    let op = single_operation("{ list { id } }");
    let id = &op.selection_set.fields[0].selection_set.as_ref().unwrap().fields[0];
    assert!(id.selection_set.is_none());
    assert!(id.arguments.is_empty());
}

/// An alias changes the response key but not the field name.
#[test]
fn aliased_field() {
    let field = first_field("{ first: student(id: 1) { name } }");
    assert_eq!(field.alias.as_ref().unwrap(), "first");
    assert_eq!(field.name, "student");
    assert_eq!(field.response_key(), "first");
}

#[test]
fn unaliased_response_key_is_name() {
    let field = first_field("{ student(id: 1) { name } }");
    assert_eq!(field.response_key(), "student");
}

#[test]
fn arguments_keep_source_order() {
    let field = first_field(r#"{ update(id: 1, name: "Bo", score: 2.5) { id } }"#);
    let names: Vec<_> = field.arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "score"]);
    assert!(matches!(
        field.argument("score").unwrap().value,
        Value::Float { value, .. } if value == 2.5
    ));
}

/// Commas are insignificant.
#[test]
fn commas_are_ignored() {
    let field = first_field("{ update(id: 1,,, score: 2) { id, name, } }");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.selection_set.unwrap().fields.len(), 2);
}

#[test]
fn nested_selection_sets() {
    let field = first_field("{ a { b { c { d } } } }");
    let b = &field.selection_set.as_ref().unwrap().fields[0];
    let c = &b.selection_set.as_ref().unwrap().fields[0];
    let d = &c.selection_set.as_ref().unwrap().fields[0];
    assert_eq!(d.name, "d");
}

#[test]
fn field_span_covers_alias_through_selection() {
    let source = "{ s: student(id: 1) { name } }";
    let field = first_field(source);
    assert_eq!(field.span.slice(source), Some("s: student(id: 1) { name }"));
}

#[test]
fn empty_selection_set_is_error() {
    let errors = parse_errors("{ list { } }");
    assert!(errors[0].message().contains("selection set cannot be empty"));
}

#[test]
fn empty_argument_list_is_error() {
    let errors = parse_errors("{ list() { id } }");
    assert!(errors[0].message().contains("argument list cannot be empty"));
}

/// Nesting deeper than the recursion limit is rejected instead of
/// overflowing the stack.
#[test]
fn excessive_nesting_is_rejected() {
    let depth = 200;
    let source = format!("{}x{}", "{ a ".repeat(depth), " }".repeat(depth));
    let errors = parse_errors(&source);
    assert!(
        errors
            .iter()
            .any(|e| e.message().contains("maximum nesting depth exceeded")),
    );
}
