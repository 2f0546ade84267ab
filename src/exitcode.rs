//! Process exit codes for `empman`, taken from BSD sysexits.h
//!
//! Only errors reach these: a missing or malformed data file at startup is a
//! warning and the command still runs.

/// Missing, unknown or unparseable command arguments
pub const USAGE: i32 = 64;

/// Stored records cannot take the operation (no Id left to assign)
pub const DATAERR: i32 = 65;

/// No employee with the requested Id
pub const NOINPUT: i32 = 66;

/// Data file could not be written
pub const CANTCREAT: i32 = 73;

/// Other I/O failure, e.g. reading the data file or resolving the cwd
pub const IOERR: i32 = 74;

/// Unreadable or invalid settings
pub const CONFIG: i32 = 78;
