/// A position within a source document.
///
/// **All values are 0-based.** Use [`SourcePosition::line_number()`] and
/// [`SourcePosition::column_number()`] for the 1-based values shown to users.
///
/// Two column representations are tracked:
/// - `col_utf8`: characters from the start of the line. Matches what most
///   editors display as "column" and is what error messages report.
/// - `col_utf16`: UTF-16 code units from the start of the line. Characters
///   outside the Basic Multilingual Plane advance this by 2.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the first character of a document.
    pub fn start_of_document() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit column within the line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the 1-based line number.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Returns the 1-based character column.
    pub fn column_number(&self) -> usize {
        self.col_utf8 + 1
    }
}
