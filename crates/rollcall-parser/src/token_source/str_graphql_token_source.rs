//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) over a
//! `&str`.
//!
//! Names and literals borrow from the input. Positions track lines (`\n`,
//! `\r` and `\r\n` each count once) plus both character and UTF-16 columns.
//!
//! ```rust
//! use rollcall_parser::token::GraphQLTokenKind;
//! use rollcall_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ list }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::name_borrowed("list"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;
use std::path::Path;

pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The text left to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,
    curr_col_utf8: usize,
    curr_col_utf16: usize,

    /// Set after a `\r` so that a following `\n` does not start another
    /// line.
    last_char_was_cr: bool,

    finished: bool,
    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
            file_path: None,
        }
    }

    /// Like [`new()`](Self::new), recording `path` in every span.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character, updating line and column tracking.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `pred` holds.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        let Some(ch) = self.peek_char() else {
            return self.make_token(GraphQLTokenKind::Eof, start);
        };

        let punctuator = match ch {
            '!' => Some(GraphQLTokenKind::Bang),
            ':' => Some(GraphQLTokenKind::Colon),
            '}' => Some(GraphQLTokenKind::CurlyBraceClose),
            '{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            '$' => Some(GraphQLTokenKind::Dollar),
            '=' => Some(GraphQLTokenKind::Equals),
            ')' => Some(GraphQLTokenKind::ParenClose),
            '(' => Some(GraphQLTokenKind::ParenOpen),
            ']' => Some(GraphQLTokenKind::SquareBracketClose),
            '[' => Some(GraphQLTokenKind::SquareBracketOpen),
            _ => None,
        };
        if let Some(kind) = punctuator {
            self.consume();
            return self.make_token(kind, start);
        }

        match ch {
            '.' => self.lex_dots(start),
            '@' => self.lex_directive(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => self.lex_name(start),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            _ => self.lex_invalid_character(start),
        }
    }

    // =========================================================================
    // Ignored text
    // =========================================================================

    /// Skips whitespace, line terminators, the byte order mark, commas and
    /// `#` comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a comment up to (not including) the end of its line.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let comment = &rest[..len];
        self.curr_col_utf8 += comment.chars().count();
        self.curr_col_utf16 += comment.encode_utf16().count();
        self.curr_byte_offset += len;
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Unsupported syntax
    // =========================================================================

    /// Lexes a run of adjacent dots. `...` introduces a fragment, which is not
    /// part of this language.
    fn lex_dots(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let dots_start = self.curr_byte_offset;
        self.consume_while(|c| c == '.');
        let dots = &self.source[dots_start..self.curr_byte_offset];

        let kind = if dots == "..." {
            GraphQLTokenKind::error(
                "Fragments are not supported",
                smallvec![GraphQLErrorNote::help(
                    "Fragment spreads and inline fragments cannot be used; \
                    select the fields directly instead",
                )],
            )
        } else {
            GraphQLTokenKind::error(format!("Unexpected `{dots}`"), smallvec![])
        };
        self.make_token(kind, start)
    }

    /// Lexes `@name` as a single error token.
    fn lex_directive(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let directive_start = self.curr_byte_offset;
        self.consume();
        if self.peek_char().is_some_and(is_name_start) {
            self.consume_while(is_name_continue);
        }
        let directive = &self.source[directive_start..self.curr_byte_offset];

        let kind = GraphQLTokenKind::error(
            format!("Directives are not supported: `{directive}`"),
            smallvec![GraphQLErrorNote::help("Remove the directive annotation")],
        );
        self.make_token(kind, start)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. `true`, `false` and `null`
    /// get their own token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume_while(is_name_continue);
        let name = &self.source[name_start..self.curr_byte_offset];

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            },
            Some(c) if c.is_ascii_digit() => {
                self.consume_while(|c| c.is_ascii_digit());
            },
            _ => {
                let kind = GraphQLTokenKind::error("Unexpected `-`", smallvec![]);
                return self.make_token(kind, start);
            },
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.consume_while(|c| c.is_ascii_digit());
        }

        // `1abc` and `1.` are single malformed literals, not a number followed
        // by something else.
        if self.peek_char().is_some_and(|c| is_name_start(c) || c == '.') {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: unexpected character after numeric literal",
            );
        }

        let text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(Cow::Borrowed(text))
        } else {
            GraphQLTokenKind::IntValue(Cow::Borrowed(text))
        };
        self.make_token(kind, start)
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_')
        });
        let text = &self.source[num_start..self.curr_byte_offset];
        let kind = GraphQLTokenKind::error(format!("{message}: `{text}`"), smallvec![]);
        self.make_token(kind, start)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        let str_start = self.curr_byte_offset;
        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                self.make_span_at(start.clone()),
                            ),
                            GraphQLErrorNote::help("Add a closing `\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('\n' | '\r') => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Quoted strings cannot contain unescaped line breaks",
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (`\"\"\"`) or escape the line break as `\\n`",
                            ),
                        ],
                    );
                    let token = self.make_token(kind, start);
                    self.consume();
                    return token;
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|c| c != '\n' && c != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(text)), start)
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                let kind = GraphQLTokenKind::error(
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            self.make_span_at(start.clone()),
                        ),
                        GraphQLErrorNote::help("Add a closing `\"\"\"`"),
                    ],
                );
                return self.make_token(kind, start);
            } else if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            } else {
                self.consume();
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::StringValue(Cow::Borrowed(text)), start)
    }

    /// A one-character span at `start`, for notes pointing at an opening
    /// quote.
    fn make_span_at(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = SourcePosition::new(
            start.line(),
            start.col_utf8() + 1,
            start.col_utf16() + 1,
            start.byte_offset() + 1,
        );
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let message = match self.consume() {
            Some(ch) => format!("Unexpected character {}", describe_char(ch)),
            None => "Unexpected end of input".to_string(),
        };
        let kind = GraphQLTokenKind::error(message, smallvec![]);
        self.make_token(kind, start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Describes `ch` for an error message. Invisible characters also get their
/// code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || is_invisible_format(ch) {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}

fn is_invisible_format(ch: char) -> bool {
    matches!(ch, '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2064}')
}
