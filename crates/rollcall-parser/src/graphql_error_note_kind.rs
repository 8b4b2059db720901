/// How an error note is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphQLErrorNoteKind {
    /// Context about the error. Rendered as `= note: ...`.
    General,

    /// An actionable suggestion. Rendered as `= help: ...`.
    Help,
}

impl GraphQLErrorNoteKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
        }
    }
}
