//! The rollcall execution engine.
//!
//! A [`Schema`](schema::Schema) is assembled once from scalar and object
//! type definitions, each object field carrying its own resolver, and is then
//! shared read-only by any number of concurrent requests:
//!
//! ```
//! use rollcall_core::execution::ExecutionRequest;
//! use rollcall_core::schema::SchemaBuilder;
//! use rollcall_core::types::Field;
//! use rollcall_core::types::ObjectTypeBuilder;
//! use rollcall_core::types::TypeAnnotation;
//! use rollcall_core::value::FieldValue;
//!
//! let schema = SchemaBuilder::new()
//!     .add_object_type(
//!         ObjectTypeBuilder::new("Query").field(
//!             Field::new("greeting", TypeAnnotation::named("String").non_null())
//!                 .resolver(|_ctx| Ok(FieldValue::from("hello"))),
//!         ),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let result = schema.execute(&ExecutionRequest::new("{ greeting }"));
//! assert_eq!(
//!     serde_json::to_string(&result).unwrap(),
//!     r#"{"data":{"greeting":"hello"},"errors":[]}"#,
//! );
//! ```

pub mod error;
pub mod execution;
pub mod schema;
pub mod types;
pub mod value;

pub use rollcall_parser as parser;
