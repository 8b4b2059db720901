use crate::NATIONAL_ID_SCALAR_NAME;
use crate::StudentStore;
use crate::tests::execute;
use crate::tests::execute_ok;
use crate::tests::roster;
use rollcall_core::error::ErrorKind;
use rollcall_core::execution::ExecutionRequest;
use rollcall_core::parser::ast::OperationKind;
use serde_json::json;

const ENROLL_ALICE_AND_BOB: &str = r#"
    mutation {
        alice: enroll(name: "Alice", score: 4.0) { id }
        bob: enroll(name: "Bob", score: 3.0) { id }
    }
"#;

mod queries {
    use super::*;

    #[test]
    fn list_returns_students_in_insertion_order() {
        let (_store, schema) = roster();
        execute_ok(&schema, ENROLL_ALICE_AND_BOB);

        let data = execute_ok(&schema, "{ list { id name score } }");
        assert_eq!(
            data,
            json!({
                "list": [
                    {"id": 1, "name": "Alice", "score": 4.0},
                    {"id": 2, "name": "Bob", "score": 3.0},
                ],
            }),
        );
    }

    #[test]
    fn list_is_empty_for_an_empty_store() {
        let (_store, schema) = roster();
        assert_eq!(execute_ok(&schema, "{ list { id } }"), json!({"list": []}));
    }

    #[test]
    fn get_after_enroll_returns_the_same_record() {
        let (_store, schema) = roster();
        let enrolled = execute_ok(
            &schema,
            r#"mutation {
                enroll(name: "Alice", des: "second year", score: 4.0, nationalid: "NID-1") {
                    id name des score nationalid
                }
            }"#,
        );

        let fetched = execute_ok(
            &schema,
            "{ student(id: 1) { id name des score nationalid } }",
        );
        assert_eq!(fetched["student"], enrolled["enroll"]);
        assert_eq!(fetched["student"]["nationalid"], "NID-1");
    }

    #[test]
    fn repeated_gets_are_identical() {
        let (_store, schema) = roster();
        execute_ok(&schema, ENROLL_ALICE_AND_BOB);

        let first = execute(&schema, "{ student(id: 2) { id name score } }");
        let second = execute(&schema, "{ student(id: 2) { id name score } }");
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_student_is_a_resolver_error() {
        let (_store, schema) = roster();
        let result = execute(&schema, "{ student(id: 9999) { id } }");

        assert_eq!(result.to_json()["data"], json!({"student": null}));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind(), ErrorKind::Resolver);
        assert_eq!(result.errors[0].message(), "student 9999 not found");
    }

    #[test]
    fn wrongly_typed_id_is_an_argument_error() {
        let (_store, schema) = roster();
        let result = execute(&schema, r#"{ student(id: "one") { id } }"#);
        assert_eq!(result.errors_of_kind(ErrorKind::ArgumentCoercion).count(), 1);
    }

    #[test]
    fn missing_id_is_an_argument_error() {
        let (_store, schema) = roster();
        let result = execute(&schema, "{ student { id } }");

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind(), ErrorKind::ArgumentCoercion);
        assert_eq!(
            result.errors[0].message(),
            r#"missing required argument "id" of type "Int!" on field "Query.student""#,
        );
        assert_eq!(result.to_json()["data"], json!({"student": null}));
    }

    #[test]
    fn list_length_matches_the_store() {
        let (store, schema) = roster();
        execute_ok(&schema, ENROLL_ALICE_AND_BOB);
        execute_ok(&schema, "mutation { leave(id: 1) { id } }");
        execute_ok(&schema, r#"mutation { enroll(name: "Carol") { id } }"#);

        let data = execute_ok(&schema, "{ list { id } }");
        assert_eq!(data["list"].as_array().map(Vec::len), store.len().ok());
    }
}

mod mutations {
    use super::*;

    #[test]
    fn enroll_defaults_score_to_zero() {
        let (_store, schema) = roster();
        let data = execute_ok(&schema, r#"mutation { enroll(name: "Alice") { score des } }"#);
        assert_eq!(data, json!({"enroll": {"score": 0.0, "des": null}}));
    }

    #[test]
    fn enroll_accepts_variables() {
        let (store, schema) = roster();
        let request = ExecutionRequest::new(
            "mutation Enroll($name: String!, $nid: CustomScalarType) {
                enroll(name: $name, nationalid: $nid) { id nationalid }
            }",
        )
        .with_variable("name", "Carol")
        .with_variable("nid", "NID-9");

        let result = schema.execute(&request);
        assert!(result.is_ok(), "{:#?}", result.errors);
        assert_eq!(
            result.to_json()["data"],
            json!({"enroll": {"id": 1, "nationalid": "NID-9"}}),
        );
        assert_eq!(store.len(), Ok(1));
    }

    #[test]
    fn enroll_rejects_a_blank_name() {
        let (store, schema) = roster();
        let result = execute(&schema, r#"mutation { enroll(name: "  ") { id } }"#);

        assert_eq!(result.errors_of_kind(ErrorKind::Resolver).count(), 1);
        assert_eq!(result.to_json()["data"], json!({"enroll": null}));
        assert_eq!(store.len(), Ok(0));
    }

    #[test]
    fn update_changes_only_the_given_fields() {
        let (_store, schema) = roster();
        execute_ok(
            &schema,
            r#"mutation { enroll(name: "Alice", des: "second year", score: 4.0) { id } }"#,
        );

        let data = execute_ok(
            &schema,
            "mutation { update(id: 1, score: 3.95) { id name des score } }",
        );
        assert_eq!(
            data,
            json!({
                "update": {"id": 1, "name": "Alice", "des": "second year", "score": 3.95},
            }),
        );
    }

    #[test]
    fn update_with_null_des_clears_it() {
        let (store, schema) = roster();
        execute_ok(&schema, r#"mutation { enroll(name: "Alice", des: "x") { id } }"#);

        execute_ok(&schema, "mutation { update(id: 1, des: null) { id } }");
        assert_eq!(store.get(1).map(|s| s.description), Ok(None));
    }

    #[test]
    fn update_rejects_a_null_name() {
        let (store, schema) = roster();
        execute_ok(&schema, r#"mutation { enroll(name: "Alice") { id } }"#);

        let result = execute(&schema, "mutation { update(id: 1, name: null) { id } }");
        assert_eq!(result.errors_of_kind(ErrorKind::Resolver).count(), 1);
        assert_eq!(
            result.errors[0].message(),
            "invalid argument: name cannot be set to null",
        );
        assert_eq!(store.get(1).map(|s| s.name), Ok("Alice".to_string()));
    }

    #[test]
    fn update_of_unknown_student_mutates_nothing() {
        let (store, schema) = roster();
        execute_ok(&schema, ENROLL_ALICE_AND_BOB);
        let before = store.list();

        let result = execute(&schema, "mutation { update(id: 9999, score: 1.0) { id } }");
        assert_eq!(result.errors_of_kind(ErrorKind::Resolver).count(), 1);
        assert_eq!(result.errors[0].message(), "student 9999 not found");
        assert_eq!(store.list(), before);
    }

    #[test]
    fn leave_returns_the_removed_student() {
        let (_store, schema) = roster();
        execute_ok(&schema, ENROLL_ALICE_AND_BOB);

        let data = execute_ok(&schema, "mutation { leave(id: 1) { id name } }");
        assert_eq!(data, json!({"leave": {"id": 1, "name": "Alice"}}));

        let result = execute(&schema, "{ student(id: 1) { id } }");
        assert_eq!(result.errors_of_kind(ErrorKind::Resolver).count(), 1);

        let data = execute_ok(&schema, "{ list { name } }");
        assert_eq!(data, json!({"list": [{"name": "Bob"}]}));
    }

    #[test]
    fn mutations_run_in_document_order() {
        let (_store, schema) = roster();
        let data = execute_ok(
            &schema,
            r#"mutation {
                first: enroll(name: "Alice", score: 1.0) { id }
                bumped: update(id: 1, score: 2.0) { score }
                gone: leave(id: 1) { score }
            }"#,
        );
        assert_eq!(
            data,
            json!({
                "first": {"id": 1},
                "bumped": {"score": 2.0},
                "gone": {"score": 2.0},
            }),
        );
    }

    #[test]
    fn mutations_require_a_mutation_operation() {
        let (store, schema) = roster();
        let request = ExecutionRequest::new(r#"{ list { id } }"#)
            .with_operation_kind(OperationKind::Mutation);

        let result = schema.execute(&request);
        assert_eq!(result.data, None);
        assert_eq!(result.errors_of_kind(ErrorKind::OperationResolution).count(), 1);
        assert_eq!(store.len(), Ok(0));
    }
}

#[test]
fn sdl_describes_the_roster() {
    let (_store, schema) = roster();
    let sdl = schema.to_sdl();

    assert!(sdl.contains(&format!("scalar {NATIONAL_ID_SCALAR_NAME}")));
    assert!(sdl.contains("type Student {"));
    assert!(sdl.contains("student(id: Int!): Student"));
    assert!(sdl.contains("list: [Student]"));
    assert!(sdl.contains("leave(id: Int!): Student"));
    assert!(!sdl.contains("__typename"));
}
