use crate::GraphQLSourceSpan;

/// A name token as it appeared in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub span: GraphQLSourceSpan,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
