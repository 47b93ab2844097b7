mod cli;
mod commands;
mod util;

#[cfg(test)]
mod cli_tests;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { query, output } => commands::check::run(&query, &output),
        Command::Ast { query, output } => commands::ast::run(&query, &output),
        Command::Plan {
            query,
            pretty,
            output,
        } => commands::plan::run(&query, pretty, &output),
        Command::Filter {
            query,
            records,
            output,
        } => commands::filter::run(&query, &records, &output),
    }
}
