#![no_main]

use libfuzzer_sys::fuzz_target;
use rollcall_parser::token::GraphQLTokenKind;
use rollcall_parser::token_source::StrGraphQLTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let tokens: Vec<_> = StrGraphQLTokenSource::new(s).collect();
    let eof_count = tokens
        .iter()
        .filter(|t| matches!(t.kind, GraphQLTokenKind::Eof))
        .count();
    assert_eq!(eof_count, 1);
    for token in &tokens {
        assert!(token.span.slice(s).is_some());
    }
});
