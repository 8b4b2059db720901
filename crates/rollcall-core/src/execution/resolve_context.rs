use crate::error::ResponsePath;
use crate::execution::Arguments;
use crate::value::GraphQLObject;

/// What a [`Resolver`](crate::types::Resolver) gets to work with.
pub struct ResolveContext<'a> {
    pub(crate) arguments: &'a Arguments,
    pub(crate) field_name: &'a str,
    pub(crate) parent: Option<&'a dyn GraphQLObject>,
    pub(crate) parent_type_name: &'a str,
    pub(crate) path: &'a ResponsePath,
}
impl<'a> ResolveContext<'a> {
    pub fn arguments(&self) -> &'a Arguments {
        self.arguments
    }

    pub fn field_name(&self) -> &'a str {
        self.field_name
    }

    /// The object this field is being resolved on. `None` for root fields.
    pub fn parent(&self) -> Option<&'a dyn GraphQLObject> {
        self.parent
    }

    pub fn parent_type_name(&self) -> &'a str {
        self.parent_type_name
    }

    pub fn path(&self) -> &'a ResponsePath {
        self.path
    }
}
