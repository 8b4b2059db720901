use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::GraphQLSourceSpan;

/// `query Name($var: Type) { ... }`, `mutation { ... }`, or the `{ ... }`
/// shorthand for an anonymous query.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_set: SelectionSet,

    /// `true` when written as a bare selection set without a keyword.
    pub shorthand: bool,

    pub span: GraphQLSourceSpan,
}

impl OperationDefinition {
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.as_str())
    }

    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|def| def.name == name)
    }
}
