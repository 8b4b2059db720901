use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::ObjectTypeBuilder;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn int() -> TypeAnnotation {
    TypeAnnotation::named("Int")
}

#[test]
fn fields_keep_declaration_order_and_gain_typename() -> Result<()> {
    let obj_type = ObjectTypeBuilder::new("Student")
        .description("A student")
        .field(Field::new("name", TypeAnnotation::named("String")))
        .field(Field::new("id", int()))
        .build()?;

    let names: Vec<_> = obj_type.fields().keys().map(String::as_str).collect();
    assert_eq!(names, ["name", "id", "__typename"]);
    assert_eq!(obj_type.get_description(), Some("A student"));

    let typename = obj_type.field("__typename").unwrap();
    assert_eq!(typename.type_annotation().to_string(), "String!");
    assert!(typename.get_resolver().is_some());

    Ok(())
}

#[test]
fn duplicate_field_names_are_rejected() {
    let result = ObjectTypeBuilder::new("Student")
        .field(Field::new("id", int()))
        .field(Field::new("id", TypeAnnotation::named("String")))
        .build();

    assert_eq!(
        result.unwrap_err(),
        SchemaBuildError::DuplicateFieldNameDefinition {
            field_name: "id".to_string(),
            type_name: "Student".to_string(),
        },
    );
}

#[test]
fn dunder_names_are_reserved() {
    let type_err = ObjectTypeBuilder::new("__Student").build().unwrap_err();
    assert!(matches!(type_err, SchemaBuildError::InvalidDunderPrefixedTypeName { .. }));

    let field_err = ObjectTypeBuilder::new("Student")
        .field(Field::new("__secret", int()))
        .build()
        .unwrap_err();
    assert!(matches!(field_err, SchemaBuildError::InvalidDunderPrefixedFieldName { .. }));

    let param_err = ObjectTypeBuilder::new("Student")
        .field(Field::new("grade", int()).parameter(Parameter::new("__term", int())))
        .build()
        .unwrap_err();
    assert_eq!(
        param_err,
        SchemaBuildError::InvalidDunderPrefixedParamName {
            field_name: "grade".to_string(),
            param_name: "__term".to_string(),
            type_name: "Student".to_string(),
        },
    );
}

#[test]
fn duplicate_parameters_are_rejected() {
    let err = ObjectTypeBuilder::new("Query")
        .field(
            Field::new("student", TypeAnnotation::named("Student"))
                .parameter(Parameter::new("id", int()))
                .parameter(Parameter::new("id", int())),
        )
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::DuplicateParameterDefinition { ref param_name, .. } if param_name == "id"
    ));
}

#[test]
fn required_parameters() {
    assert!(Parameter::new("id", int().non_null()).is_required());
    assert!(!Parameter::new("id", int()).is_required());
    assert!(!Parameter::new("limit", int().non_null()).default_value(10).is_required());
}
