use crate::types::Field;
use indexmap::IndexMap;

/// A named set of fields. Built with
/// [`ObjectTypeBuilder`](crate::types::ObjectTypeBuilder) and immutable once
/// the schema is built.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) name: String,
}
impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in declaration order, including the implicit `__typename`.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
