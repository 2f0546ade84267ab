//! Employee record store
//!
//! Keeps the employee collection in memory and mirrors it to a single
//! pretty-printed JSON file. Every mutation rewrites the whole file.
//!
//! The in-memory change is committed before the write is attempted: if the
//! write fails the caller gets [`ApplicationError::PersistenceFailure`] while
//! the store already reflects the change. There is no file locking; concurrent
//! processes writing the same file race.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Employee, EmployeeId, EmployeeUpdate};
use crate::infrastructure::traits::FileSystem;

/// Capability set of an employee store.
pub trait EmployeeStore {
    /// (Re)read the backing storage, returning the number of records loaded.
    fn load(&mut self) -> ApplicationResult<usize>;

    /// Create a record with the next free Id and persist.
    fn add(
        &mut self,
        first_name: String,
        last_name: String,
        salary: Decimal,
    ) -> ApplicationResult<Employee>;

    fn get(&self, id: EmployeeId) -> ApplicationResult<&Employee>;

    /// Apply a partial update to the record with `id` and persist.
    fn update(&mut self, id: EmployeeId, changes: &EmployeeUpdate) -> ApplicationResult<Employee>;

    /// Remove the record with `id` and persist. Returns the removed record.
    fn delete(&mut self, id: EmployeeId) -> ApplicationResult<Employee>;

    /// All records in insertion order.
    fn list(&self) -> &[Employee];
}

/// Outcome of the initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Records were read from the data file.
    Loaded(usize),
    /// No data file exists yet; the store starts empty.
    Missing,
    /// The data file exists but holds no usable records.
    Malformed(String),
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(n) => write!(f, "loaded {} employees", n),
            Self::Missing => f.write_str("no data file, starting empty"),
            Self::Malformed(reason) => write!(f, "incorrect data format: {}", reason),
        }
    }
}

/// JSON-file backed employee store.
pub struct RecordStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    employees: Vec<Employee>,
    load_status: LoadStatus,
}

impl RecordStore {
    /// Bind a store to `path` and load its contents.
    ///
    /// A missing or malformed file is not an error here: the store starts
    /// with whatever could be read and the condition is kept in
    /// [`RecordStore::load_status`].
    pub fn open(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        let mut store = Self {
            fs,
            path: path.into(),
            employees: Vec::new(),
            load_status: LoadStatus::Missing,
        };
        store.load_status = match store.load() {
            Ok(n) => LoadStatus::Loaded(n),
            Err(ApplicationError::MissingStorage(path)) => {
                warn!("Invalid path or file: {}", path.display());
                LoadStatus::Missing
            }
            Err(ApplicationError::MalformedData { path, reason }) => {
                warn!("Incorrect data format in {}: {}", path.display(), reason);
                LoadStatus::Malformed(reason)
            }
            Err(e) => {
                warn!("Cannot load {}: {}", store.path.display(), e);
                LoadStatus::Malformed(e.to_string())
            }
        };
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Max existing Id + 1, or 1 for an empty store.
    fn next_id(&self) -> ApplicationResult<EmployeeId> {
        match self.employees.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(ApplicationError::IdsExhausted(max)),
        }
    }

    fn position(&self, id: EmployeeId) -> ApplicationResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(ApplicationError::RecordNotFound(id))
    }

    /// Overwrite the data file with the full collection.
    fn persist(&self) -> ApplicationResult<()> {
        let json = serde_json::to_string_pretty(&self.employees)
            .map_err(|e| ApplicationError::persistence(&self.path, e))?;
        self.fs
            .ensure_parent(&self.path)
            .or_persistence_failure(&self.path)?;
        self.fs
            .write(&self.path, &json)
            .or_persistence_failure(&self.path)?;
        debug!(
            "persist: wrote {} employees to {}",
            self.employees.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl EmployeeStore for RecordStore {
    fn load(&mut self) -> ApplicationResult<usize> {
        debug!("load: path={}", self.path.display());
        if !self.fs.is_file(&self.path) {
            return Err(ApplicationError::MissingStorage(self.path.clone()));
        }

        let content = self
            .fs
            .read_to_string(&self.path)
            .with_path_context("read data file", &self.path)?;

        let employees = match serde_json::from_str::<Option<Vec<Employee>>>(&content) {
            Ok(Some(employees)) if !employees.is_empty() => {
                if let Err(reason) = check_ids(&employees) {
                    return Err(ApplicationError::MalformedData {
                        path: self.path.clone(),
                        reason,
                    });
                }
                employees
            }
            Ok(_) => {
                return Err(ApplicationError::MalformedData {
                    path: self.path.clone(),
                    reason: "no employee records".to_string(),
                })
            }
            Err(e) => {
                return Err(ApplicationError::MalformedData {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
        };

        self.employees = employees;
        info!(
            "Employees read from {}: {}",
            self.path.display(),
            self.employees.len()
        );
        Ok(self.employees.len())
    }

    fn add(
        &mut self,
        first_name: String,
        last_name: String,
        salary: Decimal,
    ) -> ApplicationResult<Employee> {
        let employee = Employee::new(self.next_id()?, first_name, last_name, salary);
        debug!("add: {}", employee);
        self.employees.push(employee.clone());
        self.persist()?;
        info!(
            "Employee {} was added with Id {}",
            employee.full_name(),
            employee.id
        );
        Ok(employee)
    }

    fn get(&self, id: EmployeeId) -> ApplicationResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(ApplicationError::RecordNotFound(id))
    }

    fn update(&mut self, id: EmployeeId, changes: &EmployeeUpdate) -> ApplicationResult<Employee> {
        let idx = self.position(id)?;
        changes.apply_to(&mut self.employees[idx]);
        let employee = self.employees[idx].clone();
        debug!("update: {}", employee);
        self.persist()?;
        info!("Employee with Id {} was updated", id);
        Ok(employee)
    }

    fn delete(&mut self, id: EmployeeId) -> ApplicationResult<Employee> {
        let idx = self.position(id)?;
        let removed = self.employees.remove(idx);
        self.persist()?;
        info!("Employee with Id {} was deleted", id);
        Ok(removed)
    }

    fn list(&self) -> &[Employee] {
        &self.employees
    }
}

/// Ids must be positive and unique for records to be addressable.
fn check_ids(employees: &[Employee]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(employees.len());
    for e in employees {
        if e.id == 0 {
            return Err("Id 0 is not a valid employee Id".to_string());
        }
        if !seen.insert(e.id) {
            return Err(format!("duplicate employee Id {}", e.id));
        }
    }
    Ok(())
}
