//! Recursive descent parser for rollcall query documents.
//!
//! Every grammar rule has a `parse_*` method returning `Result<Node, ()>`.
//! `Err(())` means an error has already been recorded and the caller should
//! either recover or propagate. Recovery happens at two levels:
//! - inside a selection set, by skipping to the next field or the closing `}`
//! - between definitions, by skipping to the next `{`, `query` or `mutation`
//!
//! so one pass can report several independent errors.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ParseResult;
use crate::SourcePosition;
use crate::ValueParsingError;
use smallvec::SmallVec;
use std::path::Path;
use std::path::PathBuf;

// =============================================================================
// Delimiter tracking
// =============================================================================

/// What an open delimiter belongs to, for "unclosed" diagnostics.
#[derive(Clone, Copy, Debug)]
enum DelimiterContext {
    SelectionSet,
    FieldArguments,
    VariableDefinitions,
    ListType,
    ListValue,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            Self::SelectionSet => "selection set",
            Self::FieldArguments => "field arguments",
            Self::VariableDefinitions => "variable definitions",
            Self::ListType => "list type annotation",
            Self::ListValue => "list value",
        }
    }
}

#[derive(Clone, Debug)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

/// Whether `$variable` references are allowed in the value being parsed.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    AllowVariables,
    VariableDefaultValue,
}

// =============================================================================
// Parser
// =============================================================================

/// A recursive descent parser over any [`GraphQLTokenSource`].
///
/// ```
/// use rollcall_parser::GraphQLParser;
///
/// let result = GraphQLParser::new("mutation { leave(id: 2) { name } }")
///     .parse_executable_document();
/// assert!(result.is_ok());
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
    errors: Vec<GraphQLParseError>,

    /// Most documents nest fewer than 8 delimiters deep.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared by values, selection sets and type annotations.
    recursion_depth: usize,

    /// End of the most recently consumed token. Anchors end-of-input errors
    /// and the end of node spans.
    last_end_position: Option<SourcePosition>,

    file_path: Option<PathBuf>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }

    /// Creates a parser whose spans and diagnostics name `path`.
    pub fn with_file_path<S: AsRef<str> + ?Sized>(
        source: &'src S,
        path: &'src Path,
    ) -> Self {
        let mut parser = Self::from_token_source(
            StrGraphQLTokenSource::with_file_path(source.as_ref(), path),
        );
        parser.file_path = Some(path.to_path_buf());
        parser
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Deeper nesting than this is rejected rather than risking the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            errors: Vec::new(),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
            file_path: None,
        }
    }

    // =========================================================================
    // Document parsing (public API)
    // =========================================================================

    /// Parses an executable document: one or more `query`/`mutation`
    /// operations.
    pub fn parse_executable_document(mut self) -> ParseResult<ast::Document> {
        let mut operations = Vec::new();

        while !self.token_stream.is_at_end() {
            match self.parse_definition() {
                Ok(op) => operations.push(op),
                Err(()) => self.recover_to_next_definition(),
            }
        }

        if operations.is_empty() && self.errors.is_empty() {
            let span = self.eof_span();
            self.record_error(GraphQLParseError::new(
                "document must contain at least one operation",
                span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "document".to_string(),
                },
            ));
        }

        let document = ast::Document { operations };
        if self.errors.is_empty() {
            ParseResult::ok(document)
        } else {
            ParseResult::recovered(document, self.errors)
        }
    }

    // =========================================================================
    // Error recording and recovery
    // =========================================================================

    fn record_error(&mut self, error: GraphQLParseError) {
        self.errors.push(error);
    }

    /// Attaches a note to every error recorded since `first_error`.
    fn note_errors_since(
        &mut self,
        first_error: usize,
        message: &str,
        span: &GraphQLSourceSpan,
    ) {
        for error in self.errors.iter_mut().skip(first_error) {
            error.add_note_with_span(message, span.clone());
        }
    }

    fn push_delimiter(&mut self, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Records an "unclosed" error for the innermost open delimiter.
    fn handle_unclosed_delimiter(&mut self, delimiter: &str) {
        let span = self.eof_span();
        let open_delim = self.pop_delimiter();
        let mut error = GraphQLParseError::new(
            format!("unclosed `{delimiter}`"),
            span,
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        if let Some(delim) = open_delim {
            error.add_note_with_span(
                format!(
                    "opening `{delimiter}` in {} here",
                    delim.context.description(),
                ),
                delim.span,
            );
        }
        self.record_error(error);
    }

    /// Skips tokens until something that can start a definition.
    fn recover_to_next_definition(&mut self) {
        self.delimiter_stack.clear();
        loop {
            let stop = match self.token_stream.peek() {
                None => true,
                Some(token) => match &token.kind {
                    GraphQLTokenKind::Eof | GraphQLTokenKind::CurlyBraceOpen => true,
                    GraphQLTokenKind::Name(name) => matches!(
                        name.as_ref(),
                        "query" | "mutation" | "subscription" | "fragment",
                    ),
                    _ => false,
                },
            };
            if stop {
                break;
            }
            self.consume_token();
        }
    }

    /// Skips tokens until the next field or the end of the selection set.
    /// Lexer errors passed over on the way are still reported.
    fn skip_to_selection_recovery_point(&mut self) {
        loop {
            let (stop, is_error) = match self.token_stream.peek() {
                None => (true, false),
                Some(token) => match &token.kind {
                    GraphQLTokenKind::CurlyBraceClose | GraphQLTokenKind::Eof => (true, false),
                    kind if kind.is_name_like() => (true, false),
                    kind => (false, kind.is_error()),
                },
            };
            if stop {
                break;
            }
            if let Some(token) = self.consume_token()
                && is_error
            {
                self.handle_lexer_error(&token);
            }
        }
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(t) = &token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| Self::token_kinds_match(&token.kind, kind))
    }

    /// `true` if the next token is the name `keyword`. The `true`, `false`
    /// and `null` literals never match.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.token_stream.peek().is_some_and(|token| {
            matches!(&token.kind, GraphQLTokenKind::Name(name) if name == keyword)
        })
    }

    fn peek_is_name_like(&mut self) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| token.kind.is_name_like())
    }

    fn peek_is_error(&mut self) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| token.kind.is_error())
    }

    /// Span of the next token, or the end-of-input span.
    fn peek_span(&mut self) -> GraphQLSourceSpan {
        self.token_stream
            .peek()
            .map(|token| token.span.clone())
            .unwrap_or_else(|| self.eof_span())
    }

    /// Compares variants only: any `Name` matches any `Name`.
    fn token_kinds_match(actual: &GraphQLTokenKind<'_>, expected: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(actual) == std::mem::discriminant(expected)
    }

    fn token_kind_display(kind: &GraphQLTokenKind<'_>) -> String {
        if let Some(punctuator) = kind.as_punctuator_str() {
            return punctuator.to_string();
        }
        match kind {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s) => s.to_string(),
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => format!("invalid token ({message})"),
            _ => String::new(),
        }
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        let pos = self
            .last_end_position
            .clone()
            .unwrap_or_else(SourcePosition::start_of_document);
        self.span_between(pos.clone(), pos)
    }

    /// A span from the start of `start` to the end of the last consumed token.
    fn make_span(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.start_inclusive.clone());
        self.span_between(start.start_inclusive, end)
    }

    fn span_between(&self, start: SourcePosition, end: SourcePosition) -> GraphQLSourceSpan {
        match &self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.clone()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn handle_lexer_error(&mut self, token: &GraphQLToken<'src>) {
        if let GraphQLTokenKind::Error { message, error_notes } = &token.kind {
            self.record_error(GraphQLParseError::from_lexer_error(
                message.clone(),
                token.span.clone(),
                error_notes.clone(),
            ));
        }
    }

    /// Records an error for an unexpected next token. A lexer error token is
    /// reported as itself and consumed.
    fn record_unexpected(&mut self, expected: &[&str]) {
        if self.peek_is_error() {
            if let Some(token) = self.consume_token() {
                self.handle_lexer_error(&token);
            }
            return;
        }

        let expected_display = match expected {
            [single] => (*single).to_string(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
            [] => "more input".to_string(),
        };
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();

        let found = self
            .token_stream
            .peek()
            .filter(|token| !matches!(token.kind, GraphQLTokenKind::Eof))
            .map(|token| (Self::token_kind_display(&token.kind), token.span.clone()));

        let error = match found {
            Some((found, span)) => GraphQLParseError::new(
                format!("expected {expected_display}, found `{found}`"),
                span,
                GraphQLParseErrorKind::UnexpectedToken { expected, found },
            ),
            None => GraphQLParseError::new(
                format!("expected {expected_display}, found end of input"),
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof { expected },
            ),
        };
        self.record_error(error);
    }

    /// Consumes the next token if it has the same kind as `expected`.
    fn expect(&mut self, expected: &GraphQLTokenKind<'_>) -> Result<GraphQLToken<'src>, ()> {
        if self.peek_is(expected) {
            return self.consume_token().ok_or(());
        }
        let display = format!("`{}`", Self::token_kind_display(expected));
        self.record_unexpected(&[display.as_str()]);
        Err(())
    }

    /// Consumes a name. `what` describes the expected name in diagnostics
    /// (e.g. "field name").
    fn expect_name(&mut self, what: &str) -> Result<ast::Name, ()> {
        if !self.peek_is_name_like() {
            self.record_unexpected(&[what]);
            return Err(());
        }
        let token = self.consume_token().ok_or(())?;
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name.into_owned(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            _ => return Err(()),
        };
        Ok(ast::Name {
            value,
            span: token.span,
        })
    }

    // =========================================================================
    // Recursion limit
    // =========================================================================

    /// Increments the nesting depth. Callers must pair a successful call
    /// with `exit_recursion()`.
    fn enter_recursion(&mut self) -> Result<(), ()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = self.peek_span();
            self.consume_token();
            self.record_error(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
            return Err(());
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let Some(kind) = self.token_stream.peek().map(|token| token.kind.clone()) else {
            self.record_unexpected(&["value"]);
            return Err(());
        };

        match kind {
            GraphQLTokenKind::Dollar => self.parse_variable_value(context),
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(context),

            GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_) => {
                let token = self.consume_token().ok_or(())?;
                self.convert_literal(token)
            },

            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                let token = self.consume_token().ok_or(())?;
                Ok(ast::Value::Boolean {
                    value: matches!(token.kind, GraphQLTokenKind::True),
                    span: token.span,
                })
            },

            GraphQLTokenKind::Null => {
                let token = self.consume_token().ok_or(())?;
                Ok(ast::Value::Null { span: token.span })
            },

            GraphQLTokenKind::CurlyBraceOpen => {
                let open = self.consume_token().ok_or(())?;
                self.skip_balanced_braces();
                let mut error = GraphQLParseError::new(
                    "object literals are not supported",
                    self.make_span(open.span),
                    GraphQLParseErrorKind::UnsupportedFeature {
                        feature: "object literals".to_string(),
                    },
                );
                error.add_help("Pass each field as a separate argument");
                self.record_error(error);
                Err(())
            },

            GraphQLTokenKind::Name(name) => {
                let token = self.consume_token().ok_or(())?;
                let mut error = GraphQLParseError::new(
                    format!("enum values are not supported, found `{name}`"),
                    token.span,
                    GraphQLParseErrorKind::UnsupportedFeature {
                        feature: "enum values".to_string(),
                    },
                );
                error.add_help(format!("Did you mean the string \"{name}\"?"));
                self.record_error(error);
                Err(())
            },

            GraphQLTokenKind::Error { .. } => {
                if let Some(token) = self.consume_token() {
                    self.handle_lexer_error(&token);
                }
                Err(())
            },

            GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::Eof => {
                self.record_unexpected(&["value"]);
                Err(())
            },
        }
    }

    /// Converts an int, float or string token into a value, checking ranges
    /// and escapes.
    fn convert_literal(&mut self, token: GraphQLToken<'src>) -> Result<ast::Value, ()> {
        let span = token.span.clone();
        let converted = match &token.kind {
            GraphQLTokenKind::IntValue(raw) => match token.kind.parse_int_value() {
                Some(Ok(value)) => i32::try_from(value)
                    .map(|value| ast::Value::Int { value, span: span.clone() })
                    .map_err(|_| {
                        (
                            format!("integer `{raw}` overflows a 32-bit signed integer"),
                            ValueParsingError::Int(raw.to_string()),
                        )
                    }),
                _ => Err((
                    format!("integer `{raw}` overflows a 32-bit signed integer"),
                    ValueParsingError::Int(raw.to_string()),
                )),
            },

            GraphQLTokenKind::FloatValue(raw) => match token.kind.parse_float_value() {
                Some(Ok(value)) if value.is_finite() => {
                    Ok(ast::Value::Float { value, span: span.clone() })
                },
                _ => Err((
                    format!("float `{raw}` is not a finite number"),
                    ValueParsingError::Float(raw.to_string()),
                )),
            },

            GraphQLTokenKind::StringValue(raw) => {
                let is_block = raw.starts_with("\"\"\"");
                match token.kind.parse_string_value() {
                    Some(Ok(value)) => Ok(ast::Value::String {
                        value,
                        is_block,
                        span: span.clone(),
                    }),
                    Some(Err(e)) => Err((format!("invalid string: {e}"), e.into())),
                    None => Err((
                        "invalid string".to_string(),
                        ValueParsingError::String(
                            crate::GraphQLStringParsingError::UnterminatedString,
                        ),
                    )),
                }
            },

            _ => {
                self.record_unexpected(&["value"]);
                return Err(());
            },
        };

        converted.map_err(|(message, error)| {
            self.record_error(GraphQLParseError::new(
                message,
                span,
                GraphQLParseErrorKind::InvalidValue(error),
            ));
        })
    }

    /// `$name`
    fn parse_variable_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name("variable name")?;
        let span = self.make_span(dollar.span);

        if let ConstContext::VariableDefaultValue = context {
            let mut error = GraphQLParseError::new(
                format!(
                    "variables are not allowed in variable default values, found `${}`",
                    name.value,
                ),
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            );
            error.add_help("Default values must be constants");
            self.record_error(error);
            return Err(());
        }

        Ok(ast::Value::Variable(ast::VariableValue { name, span }))
    }

    /// `[value, ...]`
    fn parse_list_value(&mut self, context: ConstContext) -> Result<ast::Value, ()> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open.span.clone(), DelimiterContext::ListValue);

        let mut values = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::SquareBracketClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.handle_unclosed_delimiter("[");
                return Err(());
            }
            values.push(self.parse_value(context)?);
        }

        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        self.pop_delimiter();

        Ok(ast::Value::List {
            values,
            span: self.make_span(open.span),
        })
    }

    /// Skips past the `}` matching an already-consumed `{`.
    fn skip_balanced_braces(&mut self) {
        let mut depth = 1usize;
        while depth > 0 {
            match self.token_stream.peek().map(|token| &token.kind) {
                None | Some(GraphQLTokenKind::Eof) => break,
                Some(GraphQLTokenKind::CurlyBraceOpen) => depth += 1,
                Some(GraphQLTokenKind::CurlyBraceClose) => depth -= 1,
                Some(_) => (),
            }
            self.consume_token();
        }
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    /// `Name`, `[Type]`, with an optional trailing `!`.
    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation, ()> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> Result<ast::TypeAnnotation, ()> {
        let base = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
            self.push_delimiter(open.span.clone(), DelimiterContext::ListType);
            let inner = self.parse_type_annotation()?;
            if self.token_stream.is_at_end() {
                self.handle_unclosed_delimiter("[");
                return Err(());
            }
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            self.pop_delimiter();
            ast::TypeAnnotation::List {
                inner: Box::new(inner),
                span: self.make_span(open.span),
            }
        } else {
            ast::TypeAnnotation::Named(self.expect_name("type name")?)
        };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            let start = base.span().clone();
            self.consume_token();
            Ok(ast::TypeAnnotation::NonNull {
                inner: Box::new(base),
                span: self.make_span(start),
            })
        } else {
            Ok(base)
        }
    }

    // =========================================================================
    // Arguments
    // =========================================================================

    /// `(name: value, ...)` on the field named `field_name`.
    fn parse_arguments(&mut self, field_name: &ast::Name) -> Result<Vec<ast::Argument>, ()> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter(open.span.clone(), DelimiterContext::FieldArguments);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.record_error(GraphQLParseError::new(
                "argument list cannot be empty; omit the parentheses instead",
                open.span.clone(),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "argument list".to_string(),
                },
            ));
        }

        let mut arguments = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.handle_unclosed_delimiter("(");
                return Err(());
            }

            let first_error = self.errors.len();
            let name = match self.expect_name("argument name") {
                Ok(name) => name,
                Err(()) => {
                    let note = format!("in the arguments of field `{}`", field_name.value);
                    self.note_errors_since(first_error, &note, &field_name.span);
                    return Err(());
                },
            };

            let value = self
                .expect(&GraphQLTokenKind::Colon)
                .and_then(|_| self.parse_value(ConstContext::AllowVariables));
            match value {
                Ok(value) => {
                    let span = self.make_span(name.span.clone());
                    arguments.push(ast::Argument { name, value, span });
                },
                Err(()) => {
                    let note = format!(
                        "in argument `{}` of field `{}`",
                        name.value,
                        field_name.value,
                    );
                    self.note_errors_since(first_error, &note, &name.span);
                    return Err(());
                },
            }
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(arguments)
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// `{ field ... }`
    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, ()> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<ast::SelectionSet, ()> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let outer_depth = self.delimiter_stack.len();
        self.push_delimiter(open.span.clone(), DelimiterContext::SelectionSet);

        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            self.record_error(GraphQLParseError::new(
                "selection set cannot be empty",
                open.span.clone(),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "selection set".to_string(),
                },
            ));
        }

        let mut fields = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.delimiter_stack.truncate(outer_depth + 1);
                self.handle_unclosed_delimiter("{");
                return Err(());
            }

            match self.parse_field() {
                Ok(field) => fields.push(field),
                Err(()) => {
                    // Drop delimiters opened by the failed field.
                    self.delimiter_stack.truncate(outer_depth + 1);
                    self.skip_to_selection_recovery_point();
                },
            }
        }

        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        self.pop_delimiter();

        Ok(ast::SelectionSet {
            fields,
            span: self.make_span(open.span),
        })
    }

    /// `alias: name(arguments) { selections }`
    fn parse_field(&mut self) -> Result<ast::Field, ()> {
        if self.peek_is_error() {
            self.record_unexpected(&["field name"]);
            return Err(());
        }

        let first_error = self.errors.len();
        let first = self.expect_name("field name")?;
        let start = first.span.clone();

        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.consume_token();
            match self.expect_name("field name") {
                Ok(name) => (Some(first), name),
                Err(()) => {
                    let note = format!("after the alias `{}`", first.value);
                    self.note_errors_since(first_error, &note, &first.span);
                    return Err(());
                },
            }
        } else {
            (None, first)
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(&name)?
        } else {
            Vec::new()
        };

        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            selection_set,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::OperationDefinition, ()> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
            || self.peek_is_keyword("query")
            || self.peek_is_keyword("mutation")
        {
            self.parse_operation_definition()
        } else if self.peek_is_keyword("subscription") {
            self.reject_definition(
                "subscriptions",
                "Only `query` and `mutation` operations can be executed",
            )
        } else if self.peek_is_keyword("fragment") {
            self.reject_definition(
                "fragment definitions",
                "Select the fields directly instead of through a fragment",
            )
        } else {
            // A lexer error token is consumed while being reported.
            let was_error = self.peek_is_error();
            self.record_unexpected(&["`query`", "`mutation`", "`{`"]);
            if !was_error {
                self.consume_token();
            }
            Err(())
        }
    }

    /// Reports a definition this engine does not run and skips its body.
    fn reject_definition(&mut self, feature: &str, help: &str) -> Result<ast::OperationDefinition, ()> {
        let keyword = self.consume_token().ok_or(())?;
        let mut error = GraphQLParseError::new(
            format!("{feature} are not supported"),
            keyword.span,
            GraphQLParseErrorKind::UnsupportedFeature {
                feature: feature.to_string(),
            },
        );
        error.add_help(help);
        self.record_error(error);

        while !self.token_stream.is_at_end()
            && !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
        {
            self.consume_token();
        }
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_selection_set()?;
        }
        Err(())
    }

    /// `query Name($var: Type) { ... }`, `mutation ...`, or `{ ... }`.
    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition, ()> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            let span = selection_set.span.clone();
            return Ok(ast::OperationDefinition {
                kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                selection_set,
                shorthand: true,
                span,
            });
        }

        let kind = if self.peek_is_keyword("mutation") {
            ast::OperationKind::Mutation
        } else {
            ast::OperationKind::Query
        };
        let keyword = self.consume_token().ok_or(())?;

        let name = if self.peek_is_name_like() {
            Some(self.expect_name("operation name")?)
        } else {
            None
        };

        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };

        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            selection_set,
            shorthand: false,
            span: self.make_span(keyword.span),
        })
    }

    /// `($var: Type = default, ...)`
    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>, ()> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter(open.span.clone(), DelimiterContext::VariableDefinitions);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.record_error(GraphQLParseError::new(
                "variable definitions cannot be empty; omit the parentheses instead",
                open.span.clone(),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "variable definitions".to_string(),
                },
            ));
        }

        let mut definitions = Vec::new();
        loop {
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                self.handle_unclosed_delimiter("(");
                return Err(());
            }
            definitions.push(self.parse_variable_definition()?);
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        self.pop_delimiter();
        Ok(definitions)
    }

    /// `$name: Type = default`
    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition, ()> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_name("variable name")?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;

        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.consume_token();
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };

        Ok(ast::VariableDefinition {
            name,
            type_annotation,
            default_value,
            span: self.make_span(dollar.span),
        })
    }
}
