use crate::error::GraphQLError;
use crate::execution::DocumentValidator;
use crate::execution::ExecutionRequest;
use crate::execution::ExecutionResult;
use crate::execution::Executor;
use crate::parser::ast;
use crate::parser::ast::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::sdl_printer;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypesMap;
use crate::value::Variables;
use std::sync::Arc;

/// A fully validated and immutable schema.
///
/// Built once with [`SchemaBuilder`] and then shared (typically behind an
/// [`Arc`]) by any number of threads executing requests.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) mutation_type: Option<Arc<ObjectType>>,
    pub(crate) query_type: Arc<ObjectType>,
    pub(crate) types: TypesMap,
}
impl Schema {
    /// Every type in the schema, built-in scalars included, in registration
    /// order.
    pub fn all_types(&self) -> &TypesMap {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Parses and runs a request. Never fails: problems are reported in the
    /// result's `errors` list.
    pub fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        Executor::new(self).execute_request(request)
    }

    /// Runs an already-parsed document.
    ///
    /// `operation_name` selects among several operations; `operation_kind`,
    /// when given, must match the selected operation.
    pub fn execute_document(
        &self,
        document: &ast::Document,
        operation_name: Option<&str>,
        operation_kind: Option<OperationKind>,
        variables: &Variables,
    ) -> ExecutionResult {
        Executor::new(self).execute_document(document, operation_name, operation_kind, variables)
    }

    pub fn mutation_type(&self) -> Option<&Arc<ObjectType>> {
        self.mutation_type.as_ref()
    }

    pub fn query_type(&self) -> &Arc<ObjectType> {
        &self.query_type
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<&Arc<ObjectType>> {
        match kind {
            OperationKind::Query => Some(&self.query_type),
            OperationKind::Mutation => self.mutation_type.as_ref(),
        }
    }

    /// Prints the schema's custom types in SDL.
    pub fn to_sdl(&self) -> String {
        sdl_printer::print_schema(self)
    }

    pub fn type_named(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Checks every operation in `document` against the schema without
    /// running any resolvers.
    pub fn validate(&self, document: &ast::Document) -> Vec<GraphQLError> {
        DocumentValidator::new(self).validate(document)
    }
}
