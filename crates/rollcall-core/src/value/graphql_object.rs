use crate::value::FieldValue;

/// A value that can be returned for an object-typed field.
///
/// Fields declared without a resolver read their value from the parent object
/// through [`field_value()`](Self::field_value), so a domain record only
/// needs to map its properties to their schema field names.
pub trait GraphQLObject: Send + Sync {
    /// The name of the object type this value belongs to. Must match the
    /// type the field declares.
    fn type_name(&self) -> &str;

    /// The value of the property backing `field_name`, or `None` if this
    /// object has no such property.
    fn field_value(&self, field_name: &str) -> Option<FieldValue>;
}
