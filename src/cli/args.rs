//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Employee record manager: add, update, delete and list employees stored in a JSON file
///
/// Commands:
///   add FirstName:<v> LastName:<v> Salary:<v>
///   update Id:<v> [FirstName:<v>] [LastName:<v>] [Salary:<v>]
///   get Id:<v>
///   delete Id:<v>
///   list
#[derive(Parser, Debug)]
#[command(name = "empman")]
#[command(author, version, about, verbatim_doc_comment)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Employee data file (default: Files/Employees.json)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Command followed by Key:Value parameters
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
