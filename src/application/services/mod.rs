//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs; `EmployeeStore` is the one capability seam.

mod dispatcher;
mod record_store;

pub use dispatcher::{CommandDispatcher, CommandOutcome};
pub use record_store::{EmployeeStore, LoadStatus, RecordStore};
