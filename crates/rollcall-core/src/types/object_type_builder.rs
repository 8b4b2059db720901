use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::value::FieldValue;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares an object type's fields before it is added to a
/// [`SchemaBuilder`](crate::schema::SchemaBuilder).
///
/// ```
/// use rollcall_core::types::Field;
/// use rollcall_core::types::ObjectTypeBuilder;
/// use rollcall_core::types::TypeAnnotation;
///
/// let builder = ObjectTypeBuilder::new("Student")
///     .description("A student on the roster")
///     .field(Field::new("id", TypeAnnotation::named("Int").non_null()))
///     .field(Field::new("name", TypeAnnotation::named("String")));
/// assert_eq!(builder.name(), "Student");
/// ```
#[derive(Clone, Debug)]
pub struct ObjectTypeBuilder {
    description: Option<String>,
    fields: Vec<Field>,
    name: String,
}
impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: vec![],
            name: name.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Checks names and produces the finished [`ObjectType`], with the
    /// implicit `__typename` field appended.
    pub(crate) fn build(self) -> Result<ObjectType> {
        if self.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                type_name: self.name,
            });
        }

        let mut fields = IndexMap::with_capacity(self.fields.len() + 1);
        for field in self.fields {
            if field.name().starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    field_name: field.name().to_string(),
                    type_name: self.name,
                });
            }

            let mut param_names = HashSet::new();
            for param in field.parameters() {
                if param.name().starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        field_name: field.name().to_string(),
                        param_name: param.name().to_string(),
                        type_name: self.name,
                    });
                }
                if !param_names.insert(param.name()) {
                    return Err(SchemaBuildError::DuplicateParameterDefinition {
                        field_name: field.name().to_string(),
                        param_name: param.name().to_string(),
                        type_name: self.name,
                    });
                }
            }

            if fields.contains_key(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    field_name: field.name().to_string(),
                    type_name: self.name,
                });
            }
            fields.insert(field.name().to_string(), field);
        }

        let type_name = self.name.clone();
        fields.insert(
            "__typename".to_string(),
            Field::new("__typename", TypeAnnotation::named("String").non_null())
                .resolver(move |_ctx| Ok(FieldValue::String(type_name.clone()))),
        );

        Ok(ObjectType {
            description: self.description,
            fields,
            name: self.name,
        })
    }
}
