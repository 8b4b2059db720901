use crate::ast::Field;
use crate::GraphQLSourceSpan;

/// `{ field field ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub fields: Vec<Field>,
    pub span: GraphQLSourceSpan,
}
