use crate::execution::InputCoercer;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Every named type in a schema, keyed by name.
pub type TypesMap = IndexMap<String, GraphQLType>;

/// Collects named types, seeded with the built-in scalars, and validates the
/// references between them once everything has been added.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: TypesMap,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name });
        }
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
        }

        self.types.insert(type_name, type_);
        Ok(())
    }

    pub fn into_types_map(self) -> Result<TypesMap> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            if let GraphQLType::Object(obj_type) = type_ {
                validate_object_type(obj_type, &self.types, &mut errors);
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }
}

fn validate_object_type(
    obj_type: &ObjectType,
    types: &TypesMap,
    errors: &mut Vec<TypeValidationError>,
) {
    let coercer = InputCoercer::new(types);
    for field in obj_type.fields().values() {
        let field_type_name = field.type_annotation().innermost_name();
        if !types.contains_key(field_type_name) {
            errors.push(TypeValidationError::UndefinedTypeReference {
                location: format!("{}.{}", obj_type.name(), field.name()),
                undefined_type_name: field_type_name.to_string(),
            });
        }

        for param in field.parameters() {
            let param_type_name = param.type_annotation().innermost_name();
            match types.get(param_type_name) {
                None => {
                    errors.push(TypeValidationError::UndefinedTypeReference {
                        location: format!(
                            "{}.{}({}:)",
                            obj_type.name(),
                            field.name(),
                            param.name(),
                        ),
                        undefined_type_name: param_type_name.to_string(),
                    });
                    continue;
                },

                Some(param_type) if !param_type.is_input_type() => {
                    errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                        field_name: field.name().to_string(),
                        outputonly_type_name: param_type_name.to_string(),
                        parameter_name: param.name().to_string(),
                        type_name: obj_type.name().to_string(),
                    });
                    continue;
                },

                Some(_) => (),
            }

            if let Some(default_value) = param.get_default_value()
                && let Err(err) = coercer.coerce_value(param.type_annotation(), default_value)
            {
                errors.push(TypeValidationError::InvalidParameterDefaultValue {
                    field_name: field.name().to_string(),
                    parameter_name: param.name().to_string(),
                    reason: err.to_string(),
                    type_name: obj_type.name().to_string(),
                });
            }
        }
    }
}
