use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use sift_lib::Record;

use crate::cli::{OutputArgs, QueryArgs};

use super::parse_query_or_exit;

pub fn run(query_args: &QueryArgs, records: &Path, output: &OutputArgs) {
    let records_from_stdin = records.as_os_str() == "-";
    let query_from_stdin = query_args
        .query_file
        .as_ref()
        .is_some_and(|p| p.as_os_str() == "-");
    if records_from_stdin && query_from_stdin {
        eprintln!("error: query and records cannot both be from stdin");
        std::process::exit(1);
    }

    let (query, _) = parse_query_or_exit(query_args, output);
    let predicate = query.predicate();

    let reader: Box<dyn BufRead> = if records_from_stdin {
        Box::new(BufReader::new(io::stdin()))
    } else {
        match File::open(records) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("error: failed to read '{}': {}", records.display(), e);
                std::process::exit(1);
            }
        }
    };

    for (number, line) in reader.lines().enumerate() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("error: failed to read '{}': {}", records.display(), e);
            std::process::exit(1);
        });
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("error: line {}: not a record: {}", number + 1, e);
                std::process::exit(1);
            }
        };
        if predicate.matches(&record) {
            println!("{line}");
        }
    }
}
