use crate::ast::OperationDefinition;
use crate::ast::OperationKind;

/// A parsed query document: one or more operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub operations: Vec<OperationDefinition>,
}

impl Document {
    /// Finds the operation named `name`.
    pub fn operation_named(&self, name: &str) -> Option<&OperationDefinition> {
        self.operations
            .iter()
            .find(|op| op.name.as_ref().is_some_and(|n| n.value == name))
    }

    /// Iterates over the operations of the given kind.
    pub fn operations_of_kind(
        &self,
        kind: OperationKind,
    ) -> impl Iterator<Item = &OperationDefinition> {
        self.operations.iter().filter(move |op| op.kind == kind)
    }
}
