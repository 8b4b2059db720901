//! Result type for parses that may recover from errors.

use crate::GraphQLParseError;

/// The outcome of a parse: a (possibly partial) AST and every error found.
///
/// The parser recovers inside selection sets and at definition boundaries,
/// so a single pass can report several errors. Callers that execute a
/// document want [`valid_ast()`](Self::valid_ast); tools that report
/// diagnostics want [`errors`](Self::errors) and may inspect
/// [`ast()`](Self::ast) for whatever was recovered.
#[derive(Debug)]
pub struct ParseResult<TAst> {
    ast: Option<TAst>,

    /// Empty if parsing was completely successful.
    pub errors: Vec<GraphQLParseError>,
}

impl<TAst> ParseResult<TAst> {
    pub(crate) fn ok(ast: TAst) -> Self {
        Self {
            ast: Some(ast),
            errors: Vec::new(),
        }
    }

    pub(crate) fn recovered(ast: TAst, errors: Vec<GraphQLParseError>) -> Self {
        Self {
            ast: Some(ast),
            errors,
        }
    }

    /// Returns the AST only if there were no errors.
    pub fn valid_ast(&self) -> Option<&TAst> {
        if self.errors.is_empty() {
            self.ast.as_ref()
        } else {
            None
        }
    }

    /// Returns the AST, recovered or not.
    pub fn ast(&self) -> Option<&TAst> {
        self.ast.as_ref()
    }

    pub fn into_valid_ast(self) -> Option<TAst> {
        if self.errors.is_empty() {
            self.ast
        } else {
            None
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ast.is_some() && self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Formats every error with [`GraphQLParseError::format_detailed()`].
    pub fn format_errors(&self, source: Option<&str>) -> String {
        self.errors
            .iter()
            .map(|e| e.format_detailed(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<TAst> From<ParseResult<TAst>> for Result<TAst, Vec<GraphQLParseError>> {
    /// A recovered AST still counts as a failure.
    fn from(result: ParseResult<TAst>) -> Self {
        match (result.ast, result.errors.is_empty()) {
            (Some(ast), true) => Ok(ast),
            (_, _) => Err(result.errors),
        }
    }
}
