use crate::SourcePosition;
use std::path::PathBuf;

/// A half-open span of source text: `[start_inclusive, end_exclusive)`.
///
/// Optionally records the file the text was read from so diagnostics can name
/// it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    pub file_path: Option<PathBuf>,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// A zero-width span at `pos`.
    pub fn point(pos: SourcePosition) -> Self {
        Self::new(pos.clone(), pos)
    }

    /// The file name used in diagnostics (`<input>` when unknown).
    pub fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Returns the source text covered by this span, if `source` is the
    /// document this span was produced from.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(
            self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset(),
        )
    }
}
