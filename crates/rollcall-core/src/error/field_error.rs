/// The error a resolver returns.
///
/// `Resolver` messages are shown to the caller verbatim. `Internal` messages
/// are only logged; the caller sees a generic message naming the field.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{0}")]
    Resolver(String),

    #[error("internal error: {0}")]
    Internal(String),
}
impl FieldError {
    pub fn resolver(message: impl Into<String>) -> Self {
        Self::Resolver(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
