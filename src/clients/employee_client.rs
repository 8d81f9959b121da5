//! # Employee Client
//!
//! Async API over the employee store, backed by the records actor.

use crate::clients::actor_client::ActorClient;
use crate::employee_store::EmployeeError;
use crate::lifecycle::{CompanySystem, Command, Reply};
use crate::framework::ResourceClient;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use tracing::instrument;

/// Client for employee operations.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<CompanySystem>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<CompanySystem>) -> Self {
        Self { inner }
    }
}

impl ActorClient<CompanySystem> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<CompanySystem> {
        &self.inner
    }
}

impl EmployeeClient {
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn add_employee(&self, params: EmployeeCreate) -> Result<(), EmployeeError> {
        match self.send(Command::AddEmployee(params)).await? {
            Reply::Done => Ok(()),
            other => unreachable!("AddEmployee must reply Done, got {other:?}"),
        }
    }

    /// Returns `Err(EmployeeError::NotFound)` when no employee has this id.
    #[instrument(skip(self))]
    pub async fn edit_employee(&self, id: EmployeeId, update: EmployeeUpdate) -> Result<(), EmployeeError> {
        match self.send(Command::EditEmployee { id, update }).await? {
            Reply::Edited(result) => result,
            other => unreachable!("EditEmployee must reply Edited, got {other:?}"),
        }
    }

    /// Removes every employee with this id and returns how many were removed.
    #[instrument(skip(self))]
    pub async fn remove_employee(&self, id: EmployeeId) -> Result<usize, EmployeeError> {
        match self.send(Command::RemoveEmployee(id)).await? {
            Reply::Removed(count) => Ok(count),
            other => unreachable!("RemoveEmployee must reply Removed, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        match self.send(Command::FindEmployee(id)).await? {
            Reply::Employee(employee) => Ok(employee),
            other => unreachable!("FindEmployee must reply Employee, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn total_salary_cost(&self) -> Result<f64, EmployeeError> {
        match self.send(Command::TotalSalaryCost).await? {
            Reply::SalaryCost(total) => Ok(total),
            other => unreachable!("TotalSalaryCost must reply SalaryCost, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        match self.send(Command::ListEmployees).await? {
            Reply::Employees(employees) => Ok(employees),
            other => unreachable!("ListEmployees must reply Employees, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_request};

    #[tokio::test]
    async fn test_edit_employee_passes_not_found_through() {
        let (client, mut receiver) = create_mock_client::<CompanySystem>(10);
        let employee_client = EmployeeClient::new(client);

        let task = tokio::spawn(async move {
            employee_client
                .edit_employee(EmployeeId(3), EmployeeUpdate::new("Lead", 10.0))
                .await
        });

        let (request, responder) = expect_request(&mut receiver).await.expect("Expected request");
        match request {
            Command::EditEmployee { id, update } => {
                assert_eq!(id, EmployeeId(3));
                assert_eq!(update.position, "Lead");
            }
            other => panic!("Expected EditEmployee, got {other:?}"),
        }
        responder
            .send(Reply::Edited(Err(EmployeeError::NotFound(EmployeeId(3)))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(EmployeeError::NotFound(EmployeeId(3))));
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<CompanySystem>(1);
        drop(receiver);
        let employee_client = EmployeeClient::new(client);

        let result = employee_client.total_salary_cost().await;

        assert_eq!(
            result,
            Err(EmployeeError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
