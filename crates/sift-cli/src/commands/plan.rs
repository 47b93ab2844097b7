use sift_lib::Query;

use crate::cli::{OutputArgs, QueryArgs};

use super::parse_query_or_exit;

pub fn run(query_args: &QueryArgs, pretty: bool, output: &OutputArgs) {
    let (query, _) = parse_query_or_exit(query_args, output);
    println!("{}", render(&query, pretty));
}

pub(super) fn render(query: &Query, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(query.predicate())
    } else {
        serde_json::to_string(query.predicate())
    };
    result.expect("predicate serialization never fails")
}
