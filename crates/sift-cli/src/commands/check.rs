use crate::cli::{OutputArgs, QueryArgs};

use super::parse_query_or_exit;

pub fn run(query_args: &QueryArgs, output: &OutputArgs) {
    let (query, source) = parse_query_or_exit(query_args, output);

    // warnings (e.g. conflicting terms) don't fail the check, but the
    // user should still see them
    let diagnostics = query.diagnostics();
    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            diagnostics
                .printer()
                .source(&source)
                .path("query")
                .colored(output.color.should_colorize())
                .render()
        );
    }

    println!("ok: {}", query.predicate());
}
