use crate::ast::Name;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

/// `name: value`
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: GraphQLSourceSpan,
}
