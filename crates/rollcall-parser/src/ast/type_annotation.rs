use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// A type reference in a variable definition: `Int`, `[Int]`, `Int!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(Name),
    List {
        inner: Box<TypeAnnotation>,
        span: GraphQLSourceSpan,
    },
    NonNull {
        inner: Box<TypeAnnotation>,
        span: GraphQLSourceSpan,
    },
}

impl TypeAnnotation {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Self::Named(name) => &name.span,
            Self::List { span, .. } | Self::NonNull { span, .. } => span,
        }
    }

    /// The innermost named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List { inner, .. } | Self::NonNull { inner, .. } => {
                inner.innermost_name()
            },
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull { .. })
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name.as_str()),
            Self::List { inner, .. } => write!(f, "[{inner}]"),
            Self::NonNull { inner, .. } => write!(f, "{inner}!"),
        }
    }
}
