use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Employees.
///
/// Ids are chosen by the caller, not generated, and are not required to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i32);

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "employee_{}", self.0)
    }
}

/// A single employee record.
///
/// See [`EmployeeStore`](crate::employee_store::EmployeeStore) for the operations
/// that create, edit and remove these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    /// Creates a new Employee instance.
    ///
    /// # Arguments
    /// * `id` - Caller-chosen identifier
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `position` - Job title
    /// * `salary` - Salary; not checked for sign
    pub fn new(
        id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: position.into(),
            salary,
        }
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} - {}, salary: {}",
            self.id.0, self.first_name, self.last_name, self.position, self.salary
        )
    }
}

/// Payload for adding a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub id: EmployeeId,
    pub position: String,
    pub salary: f64,
}

impl EmployeeCreate {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: impl Into<EmployeeId>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id: id.into(),
            position: position.into(),
            salary,
        }
    }
}

impl From<EmployeeCreate> for Employee {
    fn from(params: EmployeeCreate) -> Self {
        Self {
            id: params.id,
            first_name: params.first_name,
            last_name: params.last_name,
            position: params.position,
            salary: params.salary,
        }
    }
}

/// Payload for editing an existing employee.
///
/// Both fields are always overwritten together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub position: String,
    pub salary: f64,
}

impl EmployeeUpdate {
    pub fn new(position: impl Into<String>, salary: f64) -> Self {
        Self {
            position: position.into(),
            salary,
        }
    }
}
