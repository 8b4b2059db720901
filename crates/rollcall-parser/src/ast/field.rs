use crate::ast::Argument;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;

/// A field selection: `alias: name(arg: value) { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,

    /// In the order written.
    pub arguments: Vec<Argument>,

    /// Present for fields that select into an object.
    pub selection_set: Option<SelectionSet>,

    pub span: GraphQLSourceSpan,
}

impl Field {
    /// The key this field's result is stored under: the alias if there is one,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
