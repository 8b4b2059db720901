//! Syntax tree for executable documents.
//!
//! Nodes own their text and carry the [`GraphQLSourceSpan`](crate::GraphQLSourceSpan)
//! they were parsed from, so a document can outlive its source string.

mod argument;
mod document;
mod field;
mod name;
mod operation_definition;
mod operation_kind;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use document::Document;
pub use field::Field;
pub use name::Name;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use value::VariableValue;
pub use variable_definition::VariableDefinition;
