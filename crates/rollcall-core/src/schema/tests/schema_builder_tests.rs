use crate::parser::ast::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectTypeBuilder;
use crate::types::OpaqueIdCodec;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn query_type() -> ObjectTypeBuilder {
    ObjectTypeBuilder::new("Query").field(Field::new("a", TypeAnnotation::named("Int")))
}

mod basics {
    use super::*;

    #[test]
    fn builtins_are_always_present() -> Result<()> {
        let schema = SchemaBuilder::new().add_object_type(query_type()).build()?;
        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            assert!(schema.type_named(name).unwrap().is_builtin());
        }
        assert!(matches!(schema.type_named("Query"), Some(GraphQLType::Object(_))));
        assert_eq!(schema.all_types().len(), 6);
        Ok(())
    }

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = Schema::builder()
            .add_object_type(query_type())
            .add_object_type(
                ObjectTypeBuilder::new("Mutation")
                    .field(Field::new("b", TypeAnnotation::named("Int"))),
            )
            .build()?;
        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(schema.root_type(OperationKind::Mutation).unwrap().name(), "Mutation");
        Ok(())
    }

    #[test]
    fn mutation_root_is_optional() -> Result<()> {
        let schema = SchemaBuilder::new().add_object_type(query_type()).build()?;
        assert!(schema.mutation_type().is_none());
        assert!(schema.root_type(OperationKind::Mutation).is_none());
        Ok(())
    }

    #[test]
    fn explicit_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .add_object_type(
                ObjectTypeBuilder::new("Reads").field(Field::new("a", TypeAnnotation::named("Int"))),
            )
            .add_object_type(
                ObjectTypeBuilder::new("Writes").field(Field::new("b", TypeAnnotation::named("Int"))),
            )
            .query_type("Reads")
            .mutation_type("Writes")
            .build()?;
        assert_eq!(schema.query_type().name(), "Reads");
        assert_eq!(schema.mutation_type().unwrap().name(), "Writes");
        Ok(())
    }
}

mod root_type_errors {
    use super::*;

    #[test]
    fn no_query_type() {
        let err = SchemaBuilder::new().build().unwrap_err();
        assert_eq!(err, SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn undefined_explicit_root() {
        let err = SchemaBuilder::new()
            .add_object_type(query_type())
            .mutation_type("Writes")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaBuildError::UndefinedOperationType {
                operation: OperationKind::Mutation,
                type_name: "Writes".to_string(),
            },
        );
    }

    #[test]
    fn non_object_root() {
        let err = SchemaBuilder::new()
            .add_scalar_type(ScalarType::new("Query", OpaqueIdCodec))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaBuildError::NonObjectOperationType { operation: OperationKind::Query, .. }
        ));
    }

    #[test]
    fn shared_root_type() {
        let err = SchemaBuilder::new()
            .add_object_type(query_type())
            .mutation_type("Query")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaBuildError::NonUniqueOperationTypes {
                reused_type_name: "Query".to_string(),
            },
        );
    }
}

mod type_errors {
    use super::*;

    #[test]
    fn duplicate_type_names() {
        let err = SchemaBuilder::new()
            .add_object_type(query_type())
            .add_object_type(query_type())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaBuildError::DuplicateTypeDefinition {
                type_name: "Query".to_string(),
            },
        );
    }

    #[test]
    fn builtin_names_cannot_be_redefined() {
        let err = SchemaBuilder::new()
            .add_object_type(query_type())
            .add_scalar_type(ScalarType::new("Int", OpaqueIdCodec))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaBuildError::DuplicateTypeDefinition { .. }));
    }

    #[test]
    fn dunder_scalar_names() {
        let err = SchemaBuilder::new()
            .add_object_type(query_type())
            .add_scalar_type(ScalarType::new("__Id", OpaqueIdCodec))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaBuildError::InvalidDunderPrefixedTypeName { .. }));
    }

    /// Every reference problem is reported in one error.
    #[test]
    fn validation_errors_are_collected() {
        let err = SchemaBuilder::new()
            .add_object_type(
                ObjectTypeBuilder::new("Query")
                    .field(Field::new("a", TypeAnnotation::named("Missing")))
                    .field(
                        Field::new("b", TypeAnnotation::named("Int"))
                            .parameter(Parameter::new("q", TypeAnnotation::named("Query")))
                            .parameter(Parameter::new("c", TypeAnnotation::named("Nowhere")))
                            .parameter(
                                Parameter::new("d", TypeAnnotation::named("Int").non_null())
                                    .default_value("seven"),
                            ),
                    ),
            )
            .build()
            .unwrap_err();

        let errors = match err {
            SchemaBuildError::TypeValidationErrors { errors } => errors,
            other => panic!("expected type validation errors, got {other:?}"),
        };
        assert_eq!(
            errors,
            vec![
                TypeValidationError::UndefinedTypeReference {
                    location: "Query.a".to_string(),
                    undefined_type_name: "Missing".to_string(),
                },
                TypeValidationError::InvalidParameterWithOutputOnlyType {
                    field_name: "b".to_string(),
                    outputonly_type_name: "Query".to_string(),
                    parameter_name: "q".to_string(),
                    type_name: "Query".to_string(),
                },
                TypeValidationError::UndefinedTypeReference {
                    location: "Query.b(c:)".to_string(),
                    undefined_type_name: "Nowhere".to_string(),
                },
                TypeValidationError::InvalidParameterDefaultValue {
                    field_name: "b".to_string(),
                    parameter_name: "d".to_string(),
                    reason: "expected a value of type `Int`, found string".to_string(),
                    type_name: "Query".to_string(),
                },
            ],
        );
    }

    #[test]
    fn valid_defaults_are_accepted() -> Result<()> {
        SchemaBuilder::new()
            .add_object_type(
                ObjectTypeBuilder::new("Query").field(
                    Field::new("a", TypeAnnotation::named("Int"))
                        .parameter(Parameter::new("f", TypeAnnotation::named("Float")).default_value(1))
                        .parameter(
                            Parameter::new("l", TypeAnnotation::list(TypeAnnotation::named("Int")))
                                .default_value(vec![1, 2]),
                        ),
                ),
            )
            .build()?;
        Ok(())
    }
}
