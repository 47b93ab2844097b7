//! Grammar productions for the filter query language.
//!
//! ```text
//! query       := term (term)*
//! term        := status_term | author_term
//! status_term := "is" ":" ("open" | "closed")
//! author_term := "author" ":" identifier
//! identifier  := [A-Za-z0-9_]+
//! ```
//!
//! Whitespace between tokens is insignificant and may repeat; the cursor
//! skips it. Productions are statically defined functions combined by
//! explicit choice-then-repeat: `parse_query` loops `parse_term` to end
//! of input, and `parse_term` dispatches on the tag word. A failed term
//! reports a diagnostic and synchronizes to the next whitespace gap, so
//! one run surfaces every malformed term; whether the collected
//! diagnostics are fatal is the caller's decision.

use rowan::TextRange;

use super::ast::{QueryAst, Status, Term, TermKind};
use super::core::Parser;
use super::lexer::{Token, TokenKind};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_query(&mut self) -> QueryAst {
        let mut terms = Vec::new();

        if self.peek().is_none() {
            self.diagnostics
                .report(DiagnosticKind::EmptyQuery, TextRange::empty(0.into()))
                .emit();
            return QueryAst::new(terms);
        }

        while self.peek().is_some() {
            if let Some(term) = self.parse_term() {
                terms.push(term);
            }
        }

        QueryAst::new(terms)
    }

    /// One `tag:value` term. Returns `None` after reporting and recovering.
    fn parse_term(&mut self) -> Option<Term> {
        if !self.at(TokenKind::Word) {
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::UnexpectedInput, span)
                .message("expected a `tag:value` term")
                .emit();
            self.sync_to_term_boundary();
            return None;
        }

        let tag = self.bump();
        match self.text(&tag) {
            "is" => self.parse_status_term(tag),
            "author" => self.parse_author_term(tag),
            other => {
                self.diagnostics
                    .report(DiagnosticKind::UnknownTag, tag.span)
                    .message(format!("unknown tag `{other}`; expected `is` or `author`"))
                    .emit();
                self.sync_to_term_boundary();
                None
            }
        }
    }

    /// status_term := "is" ":" ("open" | "closed")
    fn parse_status_term(&mut self, tag: Token) -> Option<Term> {
        let value = self.expect_value(&tag)?;
        let status = match Status::from_keyword(self.text(&value)) {
            Some(status) => status,
            None => {
                self.diagnostics
                    .report(DiagnosticKind::InvalidStatus, value.span)
                    .emit();
                self.sync_to_term_boundary();
                return None;
            }
        };
        Some(Term {
            kind: TermKind::Status(status),
            span: tag.span.cover(value.span),
        })
    }

    /// author_term := "author" ":" identifier
    ///
    /// The value word is lexically `[A-Za-z0-9_]+`, so any `Word` token is
    /// already a valid identifier.
    fn parse_author_term(&mut self, tag: Token) -> Option<Term> {
        let value = self.expect_value(&tag)?;
        Some(Term {
            kind: TermKind::Author(self.text(&value).to_string()),
            span: tag.span.cover(value.span),
        })
    }

    /// `":" value` after a recognized tag. Reports and recovers on failure.
    fn expect_value(&mut self, tag: &Token) -> Option<Token> {
        if !self.eat(TokenKind::Colon) {
            self.diagnostics
                .report(
                    DiagnosticKind::ExpectedColon,
                    TextRange::empty(tag.span.end()),
                )
                .emit();
            self.sync_to_term_boundary();
            return None;
        }
        if !self.at(TokenKind::Word) {
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::ExpectedValue, span)
                .emit();
            self.sync_to_term_boundary();
            return None;
        }
        Some(self.bump())
    }
}
