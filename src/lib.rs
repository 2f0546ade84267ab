//! Employee record manager.
//!
//! Keeps a list of employees in a single JSON file and exposes add, update,
//! delete, get and list operations driven by `Key:Value` command tokens.
//!
//! Layers, leaves first:
//! - [`domain`]: records, partial updates, token parsing
//! - [`application`]: the JSON record store and the command dispatcher
//! - [`infrastructure`]: filesystem boundary and service wiring
//! - [`cli`]: argument parsing, output and exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
