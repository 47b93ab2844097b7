use crate::cli::{OutputArgs, QueryArgs};

use super::parse_query_or_exit;

pub fn run(query_args: &QueryArgs, output: &OutputArgs) {
    let (query, _) = parse_query_or_exit(query_args, output);
    println!("{}", query.ast().dump());
}
