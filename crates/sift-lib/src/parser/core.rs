//! Parser state and low-level token operations.
//!
//! Whitespace is insignificant between tokens: the cursor operations skip
//! it implicitly. Only `sync_to_term_boundary` looks at it, as the
//! recovery point between terms.

use rowan::{TextRange, TextSize};

use super::lexer::{Token, TokenKind, token_text};
use crate::diagnostics::Diagnostics;

/// Token cursor plus diagnostics sink. Productions live in `grammar.rs`.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Current token kind after skipping whitespace, `None` at end of input.
    pub(super) fn peek(&mut self) -> Option<TokenKind> {
        self.skip_whitespace();
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn at(&mut self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Span of the current token, or an empty range at end of input.
    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_whitespace();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// Consumes and returns the current token. Callers check `peek` first;
    /// bumping past end of input is a bug.
    pub(super) fn bump(&mut self) -> Token {
        self.skip_whitespace();
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    /// Consumes the current token if it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.pos += 1;
        }
    }

    /// Text of a token. Lives as long as the source, not the parser borrow.
    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Skips to the next whitespace gap (or end of input) so the following
    /// term can parse and report its own errors.
    pub(super) fn sync_to_term_boundary(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if token.kind.is_trivia() {
                break;
            }
            self.pos += 1;
        }
    }

    pub(super) fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}
