//! sift: a small filter-query language for record search.
//!
//! A query is a whitespace-separated list of `tag:value` terms
//! (`is:open`, `author:danlamanna`). Each term translates to one equality
//! predicate and all terms conjoin into a single [`Predicate`], a plain
//! data value meant for a downstream record store. A reference evaluator
//! over [`Record`]s is included.
//!
//! # Example
//!
//! ```
//! use sift_lib::{Record, Status};
//!
//! let predicate = sift_lib::parse("is:open author:danlamanna")?;
//! let record = Record {
//!     status: Status::Open,
//!     author: "danlamanna".to_string(),
//! };
//! assert!(predicate.matches(&record));
//! # Ok::<(), sift_lib::Error>(())
//! ```

pub mod diagnostics;
pub mod matching;
pub mod parser;
pub mod predicate;
pub mod query;
pub mod translate;

#[cfg(test)]
mod matching_tests;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use matching::Record;
pub use parser::ast::{QueryAst, Status, Term, TermKind};
pub use predicate::Predicate;
pub use query::Query;

/// Errors that can occur when parsing a query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The input is not a sequence of valid terms. Carries every
    /// diagnostic collected over the whole input.
    #[error("query parsing failed with {} errors", .0.error_count())]
    Parse(Diagnostics),
}

impl Error {
    /// The diagnostics behind the failure, for rendering.
    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Error::Parse(diagnostics) => diagnostics,
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses a query string straight to its composite predicate.
///
/// Convenience over [`Query::parse`] for callers that do not need the
/// parse tree or warnings.
pub fn parse(input: &str) -> Result<Predicate> {
    Query::parse(input).map(Query::into_predicate)
}
