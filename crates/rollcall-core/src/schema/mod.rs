mod schema;
mod schema_build_error;
mod schema_builder;
mod sdl_printer;
mod type_validation_error;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;

pub(crate) const DEFAULT_QUERY_TYPE_NAME: &str = "Query";
pub(crate) const DEFAULT_MUTATION_TYPE_NAME: &str = "Mutation";

#[cfg(test)]
mod tests;
