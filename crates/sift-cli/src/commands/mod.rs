pub mod ast;
pub mod check;
pub mod filter;
pub mod plan;

#[cfg(test)]
mod plan_tests;

use sift_lib::{Error, Query};

use crate::cli::{OutputArgs, QueryArgs};
use crate::util::load_query;

/// Load and parse the query, rendering diagnostics and exiting on failure.
/// Returns the parsed query together with its source text.
pub fn parse_query_or_exit(query_args: &QueryArgs, output: &OutputArgs) -> (Query, String) {
    let source = load_query(query_args);
    match Query::parse(&source) {
        Ok(query) => (query, source),
        Err(Error::Parse(diagnostics)) => {
            eprintln!(
                "{}",
                diagnostics
                    .printer()
                    .source(&source)
                    .path("query")
                    .colored(output.color.should_colorize())
                    .render()
            );
            std::process::exit(1);
        }
    }
}
