use crate::parser::ast;

/// The declared type of a field or parameter: a named type, optionally wrapped
/// in lists and non-null markers.
///
/// ```
/// use rollcall_core::types::TypeAnnotation;
///
/// let students = TypeAnnotation::list(TypeAnnotation::named("Student")).non_null();
/// assert_eq!(students.to_string(), "[Student]!");
/// assert_eq!(students.innermost_name(), "Student");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    Named(String),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(type_name.into())
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps `self` in a non-null marker. Already non-null annotations are
    /// returned unchanged.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            _ => Self::NonNull(Box::new(self)),
        }
    }

    pub fn from_ast(annot: &ast::TypeAnnotation) -> Self {
        match annot {
            ast::TypeAnnotation::Named(name) => Self::named(name.as_str()),
            ast::TypeAnnotation::List { inner, .. } => Self::list(Self::from_ast(inner)),
            ast::TypeAnnotation::NonNull { inner, .. } => {
                Self::NonNull(Box::new(Self::from_ast(inner)))
            },
        }
    }

    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The annotation with any outer non-null marker removed.
    pub fn nullable(&self) -> &TypeAnnotation {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
