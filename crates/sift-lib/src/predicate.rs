//! Composable filter predicates, the output of query translation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::ast::Status;

/// An abstract condition over a record's fields.
///
/// This is a plain data value: `sift` produces it, a downstream query layer
/// consumes it (the serde form is the hand-off format). The in-crate
/// reference evaluator lives in [`matching`](crate::matching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// `status == <value>`
    StatusEq(Status),
    /// `author == <identifier>`
    AuthorEq(String),
    /// All operands hold, in stored order.
    And(Vec<Predicate>),
}

impl Predicate {
    /// Explicit conjunction combinator.
    ///
    /// Nested `And`s flatten into one n-ary node, preserving operand order.
    /// Order never affects match semantics; conjunction is commutative.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), right) => {
                left.push(right);
                Predicate::And(left)
            }
            (left, Predicate::And(right)) => {
                let mut operands = Vec::with_capacity(right.len() + 1);
                operands.push(left);
                operands.extend(right);
                Predicate::And(operands)
            }
            (left, right) => Predicate::And(vec![left, right]),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::StatusEq(status) => write!(f, "status == {status}"),
            Predicate::AuthorEq(author) => write!(f, "author == {author}"),
            Predicate::And(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "{operand}")?;
                }
                Ok(())
            }
        }
    }
}
