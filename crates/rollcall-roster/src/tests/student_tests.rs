use crate::NewStudent;
use crate::Student;
use crate::StudentPatch;
use rollcall_core::value::FieldValue;
use rollcall_core::value::GraphQLObject;
use rollcall_core::value::ScalarValue;
use serde_json::json;

fn alice() -> Student {
    NewStudent::new("Alice", 4.0)
        .with_description("second year")
        .with_national_id(ScalarValue::new("NID-1"))
        .into_student(1)
}

#[test]
fn serializes_with_wire_field_names() {
    assert_eq!(
        serde_json::to_value(alice()).unwrap(),
        json!({
            "id": 1,
            "name": "Alice",
            "des": "second year",
            "score": 4.0,
            "nationalid": "NID-1",
        }),
    );
}

#[test]
fn deserializes_without_optional_fields() {
    let student: Student =
        serde_json::from_value(json!({"id": 7, "name": "Bob", "score": 3.0})).unwrap();
    assert_eq!(student, NewStudent::new("Bob", 3.0).into_student(7));
}

#[test]
fn exposes_fields_under_wire_names() {
    let student = alice();
    assert_eq!(student.type_name(), "Student");
    assert!(matches!(student.field_value("id"), Some(FieldValue::Int(1))));
    assert!(matches!(
        student.field_value("des"),
        Some(FieldValue::String(des)) if des == "second year",
    ));
    assert!(matches!(
        student.field_value("nationalid"),
        Some(FieldValue::Scalar(id)) if id.as_str() == "NID-1",
    ));
    assert!(student.field_value("description").is_none());
}

#[test]
fn missing_description_reads_as_null() {
    let student = NewStudent::new("Bob", 3.0).into_student(2);
    assert!(matches!(student.field_value("des"), Some(FieldValue::Null)));
}

mod patches {
    use super::*;

    #[test]
    fn empty_patch_changes_nothing() {
        let patch = StudentPatch::default();
        assert!(patch.is_empty());

        let mut student = alice();
        patch.apply_to(&mut student);
        assert_eq!(student, alice());
    }

    #[test]
    fn applies_only_present_fields() {
        let mut student = alice();
        StudentPatch {
            score: Some(3.95),
            ..StudentPatch::default()
        }
        .apply_to(&mut student);

        assert_eq!(student.score, 3.95);
        assert_eq!(student.name, "Alice");
        assert_eq!(student.description.as_deref(), Some("second year"));
    }

    #[test]
    fn clears_description() {
        let mut student = alice();
        StudentPatch {
            description: Some(None),
            ..StudentPatch::default()
        }
        .apply_to(&mut student);
        assert_eq!(student.description, None);
    }
}
