use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;
use std::iter::Peekable;
use std::num::ParseFloatError;
use std::num::ParseIntError;
use std::str::Chars;

/// The kind of a token.
///
/// Literal kinds hold the raw source text (borrowed from the input where
/// possible). Conversion to a value happens in the parser via the
/// `parse_*_value()` helpers, so the lexer never fails on an out-of-range
/// number.
///
/// Negative numbers are lexed as a single literal token (`IntValue("-3")`).
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    Name(Cow<'src, str>),

    /// Raw text of an integer literal, sign included.
    IntValue(Cow<'src, str>),

    /// Raw text of a float literal, sign included.
    FloatValue(Cow<'src, str>),

    /// Raw text of a string literal including its quotes. Block strings keep
    /// their `"""` delimiters.
    StringValue(Cow<'src, str>),

    True,
    False,
    Null,

    Eof,

    /// Text the lexer could not tokenize. Carrying the error as a token lets
    /// the parser report it in place and keep going.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        Self::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn name_owned(s: String) -> Self {
        Self::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        Self::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the punctuator's source text, or `None` for other kinds.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            Self::Bang => Some("!"),
            Self::Colon => Some(":"),
            Self::CurlyBraceClose => Some("}"),
            Self::CurlyBraceOpen => Some("{"),
            Self::Dollar => Some("$"),
            Self::Equals => Some("="),
            Self::ParenClose => Some(")"),
            Self::ParenOpen => Some("("),
            Self::SquareBracketClose => Some("]"),
            Self::SquareBracketOpen => Some("["),

            Self::Name(_)
            | Self::IntValue(_)
            | Self::FloatValue(_)
            | Self::StringValue(_)
            | Self::True
            | Self::False
            | Self::Null
            | Self::Eof
            | Self::Error { .. } => None,
        }
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// `true` for tokens that may serve as a name: `Name` plus the `true`,
    /// `false` and `null` keywords, which match the name grammar.
    pub fn is_name_like(&self) -> bool {
        matches!(self, Self::Name(_) | Self::True | Self::False | Self::Null)
    }

    /// Parses an `IntValue`'s raw text.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            Self::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parses a `FloatValue`'s raw text.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            Self::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Unescapes a `StringValue`'s raw text.
    ///
    /// Quoted strings process `\n \r \t \\ \" \/ \b \f`, `\uXXXX` and
    /// `\u{X...}`. Block strings strip common indentation and leading or
    /// trailing blank lines; their only escape is `\"""`.
    pub fn parse_string_value(
        &self,
    ) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            Self::StringValue(raw) => Some(if raw.starts_with("\"\"\"") {
                unescape_block_string(raw)
            } else {
                unescape_quoted_string(raw)
            }),
            _ => None,
        }
    }
}

fn unescape_quoted_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let unescaped = match chars.next() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('u') => unescape_unicode(&mut chars)?,
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        };
        result.push(unescaped);
    }

    Ok(result)
}

/// Decodes a `\u` escape (the `\u` is already consumed). A high surrogate
/// followed by a `\uXXXX` low surrogate combines into one character; a lone
/// surrogate is an error.
fn unescape_unicode(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<char, GraphQLStringParsingError> {
    let (code, shown) = read_unicode_escape(chars)?;

    if (0xD800..=0xDBFF).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\')
            && lookahead.next() == Some('u')
            && let Ok((low, _)) = read_unicode_escape(&mut lookahead)
            && (0xDC00..=0xDFFF).contains(&low)
        {
            *chars = lookahead;
            let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined)
                .ok_or(GraphQLStringParsingError::InvalidUnicodeEscape(shown));
        }
    }

    char::from_u32(code).ok_or(GraphQLStringParsingError::InvalidUnicodeEscape(shown))
}

/// Reads the hex digits of one `\u` escape, returning the code point and the
/// escape as written.
fn read_unicode_escape(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<(u32, String), GraphQLStringParsingError> {
    let braced = chars.next_if_eq(&'{').is_some();
    let mut hex = String::with_capacity(4);
    loop {
        if !braced && hex.len() == 4 {
            break;
        }
        match chars.next() {
            Some('}') if braced => break,
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                let shown = if braced { format!("\\u{{{hex}{c}") } else { format!("\\u{hex}{c}") };
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(shown));
            },
            None => {
                let shown = if braced { format!("\\u{{{hex}") } else { format!("\\u{hex}") };
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(shown));
            },
        }
    }

    let shown = if braced { format!("\\u{{{hex}}}") } else { format!("\\u{hex}") };
    if hex.is_empty() || hex.len() > 6 {
        return Err(GraphQLStringParsingError::InvalidUnicodeEscape(shown));
    }
    match u32::from_str_radix(&hex, 16) {
        Ok(code) => Ok((code, shown)),
        Err(_) => Err(GraphQLStringParsingError::InvalidUnicodeEscape(shown)),
    }
}

fn unescape_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix("\"\"\"")
        .and_then(|s| s.strip_suffix("\"\"\""))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?
        .replace("\\\"\"\"", "\"\"\"");

    let lines: Vec<&str> = content.lines().collect();
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                line.get(common_indent..).unwrap_or("")
            }
        })
        .collect();

    while stripped.first().is_some_and(|l| l.trim().is_empty()) {
        stripped.remove(0);
    }
    while stripped.last().is_some_and(|l| l.trim().is_empty()) {
        stripped.pop();
    }

    Ok(stripped.join("\n"))
}
