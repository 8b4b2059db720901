//! One-token lookahead over a [`GraphQLTokenSource`].

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Wraps a [`GraphQLTokenSource`] with a single-token lookahead slot.
///
/// The grammar is LL(1): the parser decides every production from the next
/// token alone, so `peek()` never looks further ahead than one token.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    lookahead: Option<GraphQLToken<'src>>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            lookahead: None,
        }
    }

    /// Returns the next token without consuming it, or `None` once the
    /// source is exhausted.
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        if self.lookahead.is_none() {
            self.lookahead = self.token_source.next();
        }
        self.lookahead.as_ref()
    }

    /// Consumes and returns the next token.
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        match self.lookahead.take() {
            Some(token) => Some(token),
            None => self.token_source.next(),
        }
    }

    /// `true` when no tokens remain or the next token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        self.peek()
            .is_none_or(|token| matches!(token.kind, GraphQLTokenKind::Eof))
    }
}
