use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// A literal value or variable reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(VariableValue),
    Int { value: i32, span: GraphQLSourceSpan },
    Float { value: f64, span: GraphQLSourceSpan },
    String { value: String, is_block: bool, span: GraphQLSourceSpan },
    Boolean { value: bool, span: GraphQLSourceSpan },
    Null { span: GraphQLSourceSpan },
    List { values: Vec<Value>, span: GraphQLSourceSpan },
}

/// `$name`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableValue {
    pub name: Name,
    pub span: GraphQLSourceSpan,
}

impl Value {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Self::Variable(var) => &var.span,
            Self::Int { span, .. }
            | Self::Float { span, .. }
            | Self::String { span, .. }
            | Self::Boolean { span, .. }
            | Self::Null { span }
            | Self::List { span, .. } => span,
        }
    }

    /// A short description of the value's kind for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Int { .. } => "integer",
            Self::Float { .. } => "float",
            Self::String { .. } => "string",
            Self::Boolean { .. } => "boolean",
            Self::Null { .. } => "null",
            Self::List { .. } => "list",
        }
    }

    /// `true` if no variable appears anywhere in this value.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List { values, .. } => values.iter().all(Value::is_const),
            _ => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }
}

impl std::fmt::Display for Value {
    /// Prints the value as it would be written in a document.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(var) => write!(f, "${}", var.name.as_str()),
            Self::Int { value, .. } => write!(f, "{value}"),
            Self::Float { value, .. } => write!(f, "{value:?}"),
            Self::String { value, .. } => write!(f, "{value:?}"),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Null { .. } => f.write_str("null"),
            Self::List { values, .. } => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
        }
    }
}
