//! Lexer for placeholder templates using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,

    // Everything between braces, kept verbatim
    #[regex(r"[^{}]+", |lex| lex.slice().to_string())]
    Text(String),
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Spans of every opening brace, in order
pub fn brace_spans(input: &str) -> impl Iterator<Item = Span> + '_ {
    lex(input).filter_map(|(tok, span)| (tok == Token::BraceOpen).then_some(span))
}
