//! Reference evaluator for predicates over in-memory records.
//!
//! Stand-in for the downstream record store: real deployments hand the
//! [`Predicate`] to their own query layer, but the semantics live here so
//! they can be tested (and used) without one.

use serde::{Deserialize, Serialize};

use crate::parser::ast::Status;
use crate::predicate::Predicate;

/// The record shape the query language filters over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub status: Status,
    pub author: String,
}

impl Predicate {
    /// Evaluates the predicate against one record.
    ///
    /// Author comparison is exact and case-sensitive. An empty `And` is
    /// vacuously true; the parser never produces one, but the evaluator's
    /// contract does not depend on where the predicate came from.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::StatusEq(status) => record.status == *status,
            Predicate::AuthorEq(author) => record.author == *author,
            Predicate::And(operands) => operands.iter().all(|p| p.matches(record)),
        }
    }
}
