use crate::error::ErrorKind;
use crate::error::GraphQLError;
use crate::execution::tests::library_schema;
use crate::parser;

fn validate(query: &str) -> Vec<GraphQLError> {
    let document = parser::parse_executable(query)
        .into_valid_ast()
        .expect("query parses");
    library_schema().validate(&document)
}

#[test]
fn valid_documents_have_no_errors() {
    let errors = validate(
        "query Q($id: Int!, $tags: [String]) {
            book(id: $id) { title author { name } }
            books { id isbn }
            echoInts(values: [1, 2])
        }
        mutation { bump(by: 2) }",
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn reports_problems_across_all_operations() {
    let errors = validate(
        r#"query A { nope book { title } }
        query B { greeting(name: 5) books { title { x } } }"#,
    );
    let messages: Vec<_> = errors.iter().map(|err| err.message()).collect();
    assert_eq!(
        messages,
        [
            r#"Cannot query field "nope" on type "Query""#,
            r#"missing required argument "id" of type "Int!" on field "Query.book""#,
            r#"invalid value for argument "name" of field "Query.greeting": expected a value of type `String`, found integer"#,
            r#"field "Book.title" of type "String!" is a leaf and cannot have a selection set"#,
        ],
    );
    assert_eq!(
        errors.iter().map(|err| err.kind()).collect::<Vec<_>>(),
        [
            ErrorKind::SchemaBinding,
            ErrorKind::ArgumentCoercion,
            ErrorKind::ArgumentCoercion,
            ErrorKind::SchemaBinding,
        ],
    );
}

#[test]
fn variables_must_be_declared_with_input_types() {
    let errors = validate("query Q($b: Book, $u: Unknown, $ok: Int) { echoInt(value: $ok) }");
    let messages: Vec<_> = errors.iter().map(|err| err.message()).collect();
    assert_eq!(
        messages,
        [
            "variable `$b` is declared with the object type `Book`, which cannot be used as input",
            "variable `$u` is declared with the unknown type `Unknown`",
        ],
    );
}

#[test]
fn undefined_variables_are_reported() {
    let errors = validate("{ echoInt(value: $missing) }");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message().ends_with("variable `$missing` is not defined by the operation"));
}

#[test]
fn mutations_need_a_mutation_root() {
    let schema = crate::schema::SchemaBuilder::new()
        .add_object_type(
            crate::types::ObjectTypeBuilder::new("Query")
                .field(crate::types::Field::new("a", crate::types::TypeAnnotation::named("Int"))),
        )
        .build()
        .unwrap();
    let document = parser::parse_executable("mutation { a }").into_valid_ast().unwrap();
    let errors = schema.validate(&document);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::OperationResolution);
}
