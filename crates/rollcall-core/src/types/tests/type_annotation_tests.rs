use crate::parser;
use crate::types::TypeAnnotation;

#[test]
fn display_matches_sdl_syntax() {
    assert_eq!(TypeAnnotation::named("Int").to_string(), "Int");
    assert_eq!(TypeAnnotation::named("Int").non_null().to_string(), "Int!");
    assert_eq!(
        TypeAnnotation::list(TypeAnnotation::named("Student").non_null()).to_string(),
        "[Student!]",
    );
}

#[test]
fn non_null_is_idempotent() {
    let once = TypeAnnotation::named("Int").non_null();
    let twice = once.clone().non_null();
    assert_eq!(once, twice);
}

#[test]
fn nullable_strips_one_marker() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("Int")).non_null();
    assert_eq!(annot.nullable(), &TypeAnnotation::list(TypeAnnotation::named("Int")));
    assert!(!annot.nullable().is_non_null());
}

#[test]
fn innermost_name_looks_through_wrappers() {
    let annot = TypeAnnotation::list(TypeAnnotation::list(TypeAnnotation::named("Float").non_null()));
    assert_eq!(annot.innermost_name(), "Float");
}

#[test]
fn from_ast_preserves_structure() {
    let result = parser::parse_executable("query Q($ids: [Int!]!) { a }");
    let doc = result.into_valid_ast().unwrap();
    let var_def = &doc.operations[0].variable_definitions[0];
    let annot = TypeAnnotation::from_ast(&var_def.type_annotation);
    assert_eq!(
        annot,
        TypeAnnotation::list(TypeAnnotation::named("Int").non_null()).non_null(),
    );
}
