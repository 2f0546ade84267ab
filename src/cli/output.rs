//! Terminal output for command results
//!
//! Mutations (add, update, delete) report through [`success`]; records from
//! get and list go through [`info`] uncolored so they stay pipeable. Errors and
//! load warnings go to stderr. `colored` honors NO_COLOR and CLICOLOR.

use std::fmt::Display;

use colored::Colorize;

/// Failed command, red "error:" prefix on stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Missing or malformed data file, reported before the command runs
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Confirmation of a stored change
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Record lines and `--show-config` TOML
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
