use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

/// `$name: Type = default`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: Name,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub span: GraphQLSourceSpan,
}
