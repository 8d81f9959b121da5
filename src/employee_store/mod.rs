//! # Employee Store
//!
//! An ordered, append-only list of [`Employee`] records.
//!
//! Ids are not unique. Lookups and edits act on the **first** match in
//! insertion order, while [`EmployeeStore::remove`] drops **every** match.

pub mod error;

pub use error::*;

use crate::audit::{AuditEvent, SharedSink};
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use tracing::debug;

pub struct EmployeeStore {
    employees: Vec<Employee>,
    sink: SharedSink,
}

impl EmployeeStore {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            employees: Vec::new(),
            sink,
        }
    }

    /// Appends a new employee. Duplicate ids are accepted.
    pub fn add(&mut self, params: EmployeeCreate) {
        let employee = Employee::from(params);
        let id = employee.id;
        self.employees.push(employee);
        self.sink.record(&AuditEvent::EmployeeAdded { id });
    }

    /// Overwrites position and salary of the first employee with `id`.
    pub fn edit(&mut self, id: EmployeeId, update: EmployeeUpdate) -> Result<(), EmployeeError> {
        let Some(employee) = self.employees.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "Edit target not found");
            return Err(EmployeeError::NotFound(id));
        };
        employee.position = update.position;
        employee.salary = update.salary;
        self.sink.record(&AuditEvent::EmployeeEdited { id });
        Ok(())
    }

    /// Removes all employees with `id` and returns how many were removed.
    pub fn remove(&mut self, id: EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let removed = before - self.employees.len();
        self.sink.record(&AuditEvent::EmployeeRemoved { id, removed });
        removed
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Sum of all salaries; `0.0` for an empty store.
    pub fn total_salary_cost(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// All employees in insertion order.
    pub fn list_all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
