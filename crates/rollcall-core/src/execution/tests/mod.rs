mod concurrency_tests;
mod document_validator_tests;

use crate::error::FieldError;
use crate::execution::ExecutionRequest;
use crate::execution::ExecutionResult;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::ObjectTypeBuilder;
use crate::types::OpaqueIdCodec;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::value::FieldValue;
use crate::value::GraphQLObject;
use crate::value::ScalarValue;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

#[derive(Clone, Debug)]
pub(super) struct Book {
    pub id: i64,
    pub title: String,
    pub rating: Option<f64>,
    pub isbn: Option<ScalarValue>,
    pub tags: Vec<String>,
}

impl GraphQLObject for Book {
    fn type_name(&self) -> &str {
        "Book"
    }

    fn field_value(&self, field_name: &str) -> Option<FieldValue> {
        match field_name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.as_str().into()),
            "rating" => Some(self.rating.into()),
            "isbn" => Some(self.isbn.clone().into()),
            "tags" => Some(FieldValue::list(self.tags.iter().map(String::as_str))),
            "author" => Some(FieldValue::object(Author {
                name: format!("Author of {}", self.title),
            })),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub(super) struct Author {
    pub name: String,
}

impl GraphQLObject for Author {
    fn type_name(&self) -> &str {
        "Author"
    }

    fn field_value(&self, field_name: &str) -> Option<FieldValue> {
        match field_name {
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

pub(super) fn shelf() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "Dune".to_string(),
            rating: Some(4.5),
            isbn: Some(ScalarValue::new("978-0441013593")),
            tags: vec!["scifi".to_string(), "classic".to_string()],
        },
        Book {
            id: 2,
            title: "Emma".to_string(),
            rating: None,
            isbn: None,
            tags: vec![],
        },
    ]
}

fn int() -> TypeAnnotation {
    TypeAnnotation::named("Int")
}

fn string() -> TypeAnnotation {
    TypeAnnotation::named("String")
}

/// A small library schema exercising every completion and coercion path.
pub(super) fn library_schema() -> Schema {
    let books = Arc::new(shelf());
    let counter = Arc::new(AtomicI64::new(0));

    let book_lookup = books.clone();
    let list_books = books.clone();
    let bump_counter = counter.clone();

    SchemaBuilder::new()
        .add_scalar_type(ScalarType::new("Isbn", OpaqueIdCodec).description("An ISBN"))
        .add_object_type(
            ObjectTypeBuilder::new("Author")
                .field(Field::new("name", string().non_null())),
        )
        .add_object_type(
            ObjectTypeBuilder::new("Book")
                .description("A book on the shelf")
                .field(Field::new("id", int().non_null()))
                .field(Field::new("title", string().non_null()))
                .field(Field::new("rating", TypeAnnotation::named("Float")))
                .field(Field::new("isbn", TypeAnnotation::named("Isbn")))
                .field(Field::new("tags", TypeAnnotation::list(string())))
                .field(Field::new("author", TypeAnnotation::named("Author")))
                .field(Field::new("missing", string())),
        )
        .add_object_type(
            ObjectTypeBuilder::new("Query")
                .field(
                    Field::new("book", TypeAnnotation::named("Book"))
                        .parameter(Parameter::new("id", int().non_null()))
                        .resolver(move |ctx| {
                            let id = ctx.arguments().require_i64("id")?;
                            book_lookup
                                .iter()
                                .find(|book| book.id == id)
                                .map(FieldValue::object_ref)
                                .ok_or_else(|| FieldError::resolver(format!("book {id} not found")))
                        }),
                )
                .field(
                    Field::new("books", TypeAnnotation::list(TypeAnnotation::named("Book")))
                        .resolver(move |_ctx| {
                            Ok(FieldValue::list(list_books.iter().cloned().map(FieldValue::object)))
                        }),
                )
                .field(
                    Field::new(
                        "strictBooks",
                        TypeAnnotation::list(TypeAnnotation::named("Book").non_null()),
                    )
                    .resolver(|_ctx| {
                        Ok(FieldValue::List(vec![
                            FieldValue::object(shelf().remove(0)),
                            FieldValue::Null,
                            FieldValue::object(Author { name: "x".to_string() }),
                        ]))
                    }),
                )
                .field(
                    Field::new("echoInt", int())
                        .parameter(Parameter::new("value", int()))
                        .resolver(|ctx| Ok(ctx.arguments().get_i64("value")?.into())),
                )
                .field(
                    Field::new("echoFloat", TypeAnnotation::named("Float"))
                        .parameter(Parameter::new("value", TypeAnnotation::named("Float")))
                        .resolver(|ctx| Ok(ctx.arguments().get_f64("value")?.into())),
                )
                .field(
                    Field::new("echoInts", TypeAnnotation::list(int()))
                        .parameter(Parameter::new("values", TypeAnnotation::list(int().non_null())))
                        .resolver(|ctx| {
                            Ok(match ctx.arguments().get("values").and_then(|v| v.as_list()) {
                                Some(values) => {
                                    FieldValue::list(values.iter().filter_map(|v| v.as_i64()))
                                },
                                None => FieldValue::Null,
                            })
                        }),
                )
                .field(
                    Field::new("echoId", TypeAnnotation::named("ID"))
                        .parameter(Parameter::new("value", TypeAnnotation::named("ID")))
                        .resolver(|ctx| Ok(ctx.arguments().get_str("value")?.into())),
                )
                .field(
                    Field::new("echoIsbn", TypeAnnotation::named("Isbn"))
                        .parameter(Parameter::new("value", TypeAnnotation::named("Isbn").non_null()))
                        .resolver(|ctx| Ok(ctx.arguments().get_scalar("value")?.into())),
                )
                .field(
                    Field::new("greeting", string().non_null())
                        .parameter(Parameter::new("name", string()).default_value("world"))
                        .resolver(|ctx| {
                            let name = ctx.arguments().get_str("name")?.unwrap_or("nobody");
                            Ok(format!("hello, {name}").into())
                        }),
                )
                .field(
                    Field::new("argumentCount", int().non_null())
                        .parameter(Parameter::new("a", int()))
                        .parameter(Parameter::new("b", string()))
                        .resolver(|ctx| Ok((ctx.arguments().len() as i64).into())),
                )
                .field(
                    Field::new("fail", string())
                        .resolver(|_ctx| Err(FieldError::resolver("the shelf is empty"))),
                )
                .field(
                    Field::new("internal", string())
                        .resolver(|_ctx| Err(FieldError::internal("db password is hunter2"))),
                )
                .field(
                    Field::new("panics", string())
                        .resolver(|_ctx| panic!("resolver exploded")),
                )
                .field(
                    Field::new("wrongObject", TypeAnnotation::named("Book"))
                        .resolver(|_ctx| Ok(FieldValue::object(Author { name: "x".to_string() }))),
                )
                .field(
                    Field::new("wrongLeaf", int())
                        .resolver(|_ctx| Ok(FieldValue::from("not a number"))),
                )
                .field(
                    Field::new("nonNullNull", string().non_null())
                        .resolver(|_ctx| Ok(FieldValue::Null)),
                )
                .field(
                    Field::new("counter", int().non_null())
                        .resolver({
                            let counter = counter.clone();
                            move |_ctx| Ok(counter.load(Ordering::SeqCst).into())
                        }),
                )
                .field(Field::new("unresolved", string())),
        )
        .add_object_type(
            ObjectTypeBuilder::new("Mutation").field(
                Field::new("bump", int().non_null())
                    .parameter(Parameter::new("by", int().non_null()).default_value(1))
                    .resolver(move |ctx| {
                        let by = ctx.arguments().require_i64("by")?;
                        Ok((bump_counter.fetch_add(by, Ordering::SeqCst) + by).into())
                    }),
            ),
        )
        .build()
        .expect("library schema builds")
}

pub(super) fn execute(schema: &Schema, query: &str) -> ExecutionResult {
    schema.execute(&ExecutionRequest::new(query))
}

/// Executes `query` and returns the whole response as JSON.
pub(super) fn execute_json(schema: &Schema, query: &str) -> serde_json::Value {
    execute(schema, query).to_json()
}
