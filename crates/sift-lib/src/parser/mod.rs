//! Recognition for the filter query language.
//!
//! # Architecture
//!
//! Two phases, kept strictly apart:
//!
//! 1. Recognition: [`lexer::lex`] plus the `Parser` productions produce a
//!    neutral [`QueryAst`] (one tagged variant per term kind) and span
//!    diagnostics. Nothing here knows what a predicate is.
//! 2. Translation: [`translate`](crate::translate) lowers the tree to a
//!    [`Predicate`](crate::Predicate).
//!
//! The parser recovers at whitespace boundaries so a single run reports
//! every malformed term, but recognition never leaks a partial result:
//! [`Query::parse`](crate::Query::parse) fails whenever any error
//! diagnostic was collected.

pub mod ast;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{QueryAst, Status, Term, TermKind};
pub use lexer::{Token, TokenKind, lex, token_text};

use crate::diagnostics::Diagnostics;
use core::Parser;

/// Recognition entry point: tokenize and parse, returning the tree and
/// every diagnostic collected along the way.
pub fn parse(source: &str) -> (QueryAst, Diagnostics) {
    let mut parser = Parser::new(source, lexer::lex(source));
    let ast = parser.parse_query();
    (ast, parser.finish())
}
