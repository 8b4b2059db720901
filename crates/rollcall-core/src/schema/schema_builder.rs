use crate::parser::ast::OperationKind;
use crate::schema::DEFAULT_MUTATION_TYPE_NAME;
use crate::schema::DEFAULT_QUERY_TYPE_NAME;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarType;
use crate::types::TypesMap;
use crate::types::TypesMapBuilder;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Assembles a [`Schema`] from scalar and object type declarations.
///
/// Declaration errors are held until [`build()`](Self::build) so that the
/// builder can be used as a single chained expression. The root operation
/// types default to the object types named `Query` and `Mutation`; a schema
/// without a `Mutation` type simply offers no mutations.
#[derive(Debug)]
pub struct SchemaBuilder {
    errors: Vec<SchemaBuildError>,
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    types: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            errors: vec![],
            mutation_type_name: None,
            query_type_name: None,
            types: TypesMapBuilder::new(),
        }
    }

    pub fn add_object_type(mut self, builder: ObjectTypeBuilder) -> Self {
        let result = builder
            .build()
            .and_then(|obj_type| self.types.add_new_type(GraphQLType::Object(Arc::new(obj_type))));
        if let Err(err) = result {
            self.errors.push(err);
        }
        self
    }

    pub fn add_scalar_type(mut self, scalar_type: ScalarType) -> Self {
        if let Err(err) = self.types.add_new_type(GraphQLType::Scalar(scalar_type)) {
            self.errors.push(err);
        }
        self
    }

    /// Uses the object type named `type_name` as the Mutation root instead of
    /// the default `Mutation`.
    pub fn mutation_type(mut self, type_name: impl Into<String>) -> Self {
        self.mutation_type_name = Some(type_name.into());
        self
    }

    /// Uses the object type named `type_name` as the Query root instead of the
    /// default `Query`.
    pub fn query_type(mut self, type_name: impl Into<String>) -> Self {
        self.query_type_name = Some(type_name.into());
        self
    }

    pub fn build(self) -> Result<Schema> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        let types = self.types.into_types_map()?;

        let query_type = match lookup_root_type(
            &types,
            OperationKind::Query,
            self.query_type_name.as_deref(),
            DEFAULT_QUERY_TYPE_NAME,
        )? {
            Some(query_type) => query_type,
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };

        let mutation_type = lookup_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type_name.as_deref(),
            DEFAULT_MUTATION_TYPE_NAME,
        )?;

        if let Some(mutation_type) = &mutation_type
            && Arc::ptr_eq(mutation_type, &query_type)
        {
            return Err(SchemaBuildError::NonUniqueOperationTypes {
                reused_type_name: query_type.name().to_string(),
            });
        }

        log::debug!(
            "built schema with {} types (query root: `{}`, mutation root: {})",
            types.len(),
            query_type.name(),
            mutation_type
                .as_ref()
                .map(|t| format!("`{}`", t.name()))
                .unwrap_or_else(|| "none".to_string()),
        );

        Ok(Schema {
            mutation_type,
            query_type,
            types,
        })
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An explicitly named root type must exist; the default name is optional.
fn lookup_root_type(
    types: &TypesMap,
    operation: OperationKind,
    explicit_name: Option<&str>,
    default_name: &str,
) -> Result<Option<Arc<ObjectType>>> {
    let type_name = explicit_name.unwrap_or(default_name);
    match types.get(type_name) {
        Some(GraphQLType::Object(obj_type)) => Ok(Some(obj_type.clone())),
        Some(_) => Err(SchemaBuildError::NonObjectOperationType {
            operation,
            type_name: type_name.to_string(),
        }),
        None if explicit_name.is_some() => Err(SchemaBuildError::UndefinedOperationType {
            operation,
            type_name: type_name.to_string(),
        }),
        None => Ok(None),
    }
}
