//! Lowering from the neutral parse tree to predicates.
//!
//! The second phase of the pipeline: recognition-free, one predicate per
//! term, conjoined in order of appearance. Repeated terms lower
//! independently; the tree is taken as-is.

use crate::parser::ast::{QueryAst, Term, TermKind};
use crate::predicate::Predicate;

/// Lowers a parse tree to a single composite predicate.
///
/// A single-term query lowers to that term's predicate directly, with no
/// one-element `And` wrapper. An empty tree (unreachable through
/// [`Query::parse`](crate::Query::parse), which rejects empty queries)
/// lowers to the vacuous `And`.
pub fn lower(ast: &QueryAst) -> Predicate {
    let mut predicates = ast.terms().iter().map(lower_term);
    match predicates.next() {
        Some(first) => predicates.fold(first, Predicate::and),
        None => Predicate::And(Vec::new()),
    }
}

fn lower_term(term: &Term) -> Predicate {
    match &term.kind {
        TermKind::Status(status) => Predicate::StatusEq(*status),
        TermKind::Author(name) => Predicate::AuthorEq(name.clone()),
    }
}
