use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A syntax error with its location and contextual notes.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    message: String,

    /// Where the error was detected. For "expected X" errors this is the
    /// token found instead of X; for unclosed delimiters it is the end of
    /// input.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Converts a lexer error token into a parse error, keeping the lexer's
    /// notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a multi-line diagnostic:
    ///
    /// ```text
    /// error: expected `:`, found `1`
    ///   --> query.graphql:1:14
    ///    |
    ///  1 | { student(id 1) { name } }
    ///    |              ^
    ///    = note: in argument `id` of field `student`
    /// ```
    ///
    /// The snippet is omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!("error: {}\n", self.message);
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.span.display_file_name(),
            self.span.start_inclusive.line_number(),
            self.span.start_inclusive.column_number(),
        ));

        if let Some(src) = source
            && let Some(snippet) = primary_snippet(src, &self.span)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.prefix(),
                note.message,
            ));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error on one line: `file:line:col: error: message`.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.span.display_file_name(),
            self.span.start_inclusive.line_number(),
            self.span.start_inclusive.column_number(),
            self.message,
        )
    }
}

fn source_line<'a>(source: &'a str, line: usize) -> Option<&'a str> {
    source.lines().nth(line)
}

fn primary_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line = span.start_inclusive.line();
    let content = source_line(source, line)?;
    let display_line = line + 1;
    let gutter = display_line.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    let col_end = if span.end_exclusive.line() == line {
        span.end_exclusive.col_utf8()
    } else {
        content.chars().count()
    };
    let carets = col_end.saturating_sub(col_start).max(1);

    Some(format!(
        "{blank:>gutter$} |\n{display_line:>gutter$} | {content}\n{blank:>gutter$} | {blank:>col_start$}{carets}\n",
        blank = "",
        carets = "^".repeat(carets),
    ))
}

fn note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line = span.start_inclusive.line();
    let content = source_line(source, line)?;
    let display_line = line + 1;
    let gutter = display_line.to_string().len().max(2);
    let col_start = span.start_inclusive.col_utf8();

    Some(format!(
        "     {display_line:>gutter$} | {content}\n     {blank:>gutter$} | {blank:>col_start$}-\n",
        blank = "",
    ))
}
