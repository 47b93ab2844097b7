use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "sift", bin_name = "sift")]
#[command(about = "Filter-query language for record search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a query and report diagnostics
    #[command(after_help = r#"EXAMPLES:
  sift check -q 'is:open author:danlamanna'
  sift check --query-file query.txt"#)]
    Check {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the parsed term tree
    Ast {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the translated predicate as JSON
    #[command(after_help = r#"EXAMPLES:
  sift plan -q 'is:closed'
  sift plan -q 'is:open author:danlamanna' --pretty"#)]
    Plan {
        #[command(flatten)]
        query: QueryArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Filter JSON-lines records through a query
    #[command(after_help = r#"EXAMPLES:
  sift filter -q 'is:open' records.jsonl
  cat records.jsonl | sift filter -q 'author:danlamanna'"#)]
    Filter {
        #[command(flatten)]
        query: QueryArgs,

        /// Records file, one JSON object per line (use "-" for stdin)
        #[arg(value_name = "FILE", default_value = "-")]
        records: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
#[group(id = "query_input", required = true, multiple = false)]
pub struct QueryArgs {
    /// Query as inline text
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    pub query_text: Option<String>,

    /// Query from file (use "-" for stdin)
    #[arg(long = "query-file", value_name = "FILE")]
    pub query_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// When to colorize diagnostics
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,
}
