//! Query pipeline facade.
//!
//! Stages: parse → conflict check → lower. Parsing fails fast at this
//! boundary: any error diagnostic means `Err`, and no partial result
//! escapes. The conflict check only ever emits warnings, so a successful
//! `Query` may still carry diagnostics worth showing.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser;
use crate::parser::ast::{QueryAst, Status, Term, TermKind};
use crate::predicate::Predicate;
use crate::translate;
use crate::{Error, Result};

/// A parsed query: neutral tree, lowered predicate, and any warnings.
#[derive(Debug, Clone)]
pub struct Query {
    ast: QueryAst,
    predicate: Predicate,
    diagnostics: Diagnostics,
}

impl Query {
    /// Parses a query string.
    ///
    /// Fails with the full diagnostic collection when the input is not a
    /// sequence of valid terms. Parsing is pure: re-invoking with the same
    /// input always yields the same result or the same error.
    pub fn parse(input: &str) -> Result<Query> {
        let (ast, mut diagnostics) = parser::parse(input);
        if diagnostics.has_errors() {
            return Err(Error::Parse(diagnostics));
        }
        check_conflicts(&ast, &mut diagnostics);
        let predicate = translate::lower(&ast);
        Ok(Query {
            ast,
            predicate,
            diagnostics,
        })
    }

    pub fn ast(&self) -> &QueryAst {
        &self.ast
    }

    pub fn terms(&self) -> &[Term] {
        self.ast.terms()
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn into_predicate(self) -> Predicate {
        self.predicate
    }

    /// Warnings collected alongside a successful parse.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Flags repeated terms that demand two different values for one field.
///
/// Terms are conjoined and never merged, so `is:open is:closed` (or two
/// different authors) yields a predicate no record satisfies. That is the
/// documented contract, not an error; one warning per field points at the
/// first conflicting term.
fn check_conflicts(ast: &QueryAst, diagnostics: &mut Diagnostics) {
    let mut first_status: Option<Status> = None;
    let mut first_author: Option<&str> = None;
    let mut status_reported = false;
    let mut author_reported = false;

    for term in ast.terms() {
        match &term.kind {
            TermKind::Status(status) => match first_status {
                None => first_status = Some(*status),
                Some(earlier) if earlier != *status && !status_reported => {
                    diagnostics
                        .report(DiagnosticKind::ConflictingTerms, term.span)
                        .message(format!(
                            "`is:{status}` conflicts with earlier `is:{earlier}`; no record matches both"
                        ))
                        .emit();
                    status_reported = true;
                }
                Some(_) => {}
            },
            TermKind::Author(name) => match first_author {
                None => first_author = Some(name.as_str()),
                Some(earlier) if earlier != name.as_str() && !author_reported => {
                    diagnostics
                        .report(DiagnosticKind::ConflictingTerms, term.span)
                        .message(format!(
                            "`author:{name}` conflicts with earlier `author:{earlier}`; no record matches both"
                        ))
                        .emit();
                    author_reported = true;
                }
                Some(_) => {}
            },
        }
    }
}
