//! Neutral parse tree for filter queries.
//!
//! Recognition stops here: one tagged variant per term kind, spans attached,
//! no predicate semantics. Lowering to [`Predicate`](crate::Predicate) is a
//! separate pass in [`translate`](crate::translate).

use std::fmt;

use rowan::TextRange;
use serde::{Deserialize, Serialize};

/// Closed status enumeration accepted by `is:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// Every status value, in declaration order.
    pub const ALL: [Status; 2] = [Status::Open, Status::Closed];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Closed => "closed",
        }
    }

    /// Resolves a value word from an `is:` term. `None` for anything
    /// outside the closed enumeration.
    pub fn from_keyword(word: &str) -> Option<Status> {
        match word {
            "open" => Some(Status::Open),
            "closed" => Some(Status::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a recognized term, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// `is:<status>`
    Status(Status),
    /// `author:<identifier>`
    Author(String),
}

/// One recognized `tag:value` unit, with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub kind: TermKind,
    pub span: TextRange,
}

/// Ordered term list, one entry per recognized term in left-to-right
/// order of appearance. Repeated terms are preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAst {
    terms: Vec<Term>,
}

impl QueryAst {
    pub(crate) fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Renders an indented tree, one line per term. Used by snapshot tests
    /// and `sift ast`.
    pub fn dump(&self) -> String {
        let mut out = String::from("Query");
        for term in &self.terms {
            match &term.kind {
                TermKind::Status(status) => {
                    out.push_str(&format!("\n  Status \"{status}\""));
                }
                TermKind::Author(name) => {
                    out.push_str(&format!("\n  Author \"{name}\""));
                }
            }
        }
        out
    }
}
