use crate::token::GraphQLToken;

/// Marker trait for lexers: any iterator of [`GraphQLToken`]s.
///
/// Implementors skip insignificant text, emit
/// [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error) tokens
/// instead of stopping on bad input, and finish with exactly one
/// [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token.
/// Buffering and lookahead live in
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
