//! Request and reply messages for the records actor.
//!
//! Each [`Command`] maps to exactly one store operation, and each operation
//! answers with one [`Reply`] variant. Typed clients in [`crate::clients`]
//! hide the pairing from callers.

use super::CompanySystem;
use crate::employee_store::EmployeeError;
use crate::framework::ActorState;
use crate::model::{
    Employee, EmployeeCreate, EmployeeId, EmployeeUpdate, InventoryItem, ItemCreate, ItemId, Order,
    OrderCreate, OrderId,
};
use crate::order_processing::ProcessingError;
use crate::order_store::OrderError;

#[derive(Debug)]
pub enum Command {
    // --- employees ---
    AddEmployee(EmployeeCreate),
    EditEmployee { id: EmployeeId, update: EmployeeUpdate },
    RemoveEmployee(EmployeeId),
    FindEmployee(EmployeeId),
    TotalSalaryCost,
    ListEmployees,

    // --- orders ---
    AddOrder(OrderCreate),
    UpdateOrderStatus { id: OrderId, status: String },
    ListActiveOrders,

    // --- inventory ---
    AddItem(ItemCreate),
    AdjustQuantity { id: ItemId, delta: i64 },
    Deduct { id: ItemId, amount: i64 },
    IsAvailable { id: ItemId, required: i64 },
    GetItem(ItemId),
    ListLowStock,
    ListItems,

    // --- processing ---
    Fulfill { item_id: ItemId, quantity: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Done,
    Edited(Result<(), EmployeeError>),
    Removed(usize),
    Employee(Option<Employee>),
    SalaryCost(f64),
    Employees(Vec<Employee>),
    StatusUpdated(Result<(), OrderError>),
    Orders(Vec<Order>),
    /// New quantity, or `None` when the item does not exist.
    Quantity(Option<i64>),
    Available(bool),
    Item(Option<InventoryItem>),
    Items(Vec<InventoryItem>),
    Fulfilled(Result<i64, ProcessingError>),
}

impl ActorState for CompanySystem {
    type Request = Command;
    type Reply = Reply;

    fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::AddEmployee(params) => {
                self.employees.add(params);
                Reply::Done
            }
            Command::EditEmployee { id, update } => Reply::Edited(self.employees.edit(id, update)),
            Command::RemoveEmployee(id) => Reply::Removed(self.employees.remove(id)),
            Command::FindEmployee(id) => Reply::Employee(self.employees.find(id).cloned()),
            Command::TotalSalaryCost => Reply::SalaryCost(self.employees.total_salary_cost()),
            Command::ListEmployees => Reply::Employees(self.employees.list_all().to_vec()),

            Command::AddOrder(params) => {
                self.orders.add(params);
                Reply::Done
            }
            Command::UpdateOrderStatus { id, status } => {
                Reply::StatusUpdated(self.orders.update_status(id, status))
            }
            Command::ListActiveOrders => {
                Reply::Orders(self.orders.list_active().into_iter().cloned().collect())
            }

            Command::AddItem(params) => {
                self.inventory.add(params);
                Reply::Done
            }
            Command::AdjustQuantity { id, delta } => {
                Reply::Quantity(self.inventory.adjust_quantity(id, delta))
            }
            Command::Deduct { id, amount } => Reply::Quantity(self.inventory.deduct(id, amount)),
            Command::IsAvailable { id, required } => {
                Reply::Available(self.inventory.is_available(id, required))
            }
            Command::GetItem(id) => Reply::Item(self.inventory.get(id).cloned()),
            Command::ListLowStock => {
                Reply::Items(self.inventory.list_low_stock().into_iter().cloned().collect())
            }
            Command::ListItems => Reply::Items(self.inventory.list_all().into_iter().cloned().collect()),

            Command::Fulfill { item_id, quantity } => Reply::Fulfilled(self.fulfill(item_id, quantity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RecordingSink;
    use std::sync::Arc;

    #[test]
    fn test_handle_dispatches_to_stores() {
        let mut system = CompanySystem::new(Arc::new(RecordingSink::new()));

        assert_eq!(
            system.handle(Command::AddItem(ItemCreate::new(1, "Widget", 5, 10))),
            Reply::Done
        );
        assert_eq!(
            system.handle(Command::IsAvailable { id: ItemId(1), required: 5 }),
            Reply::Available(true)
        );
        assert_eq!(
            system.handle(Command::Deduct { id: ItemId(9), amount: 1 }),
            Reply::Quantity(None)
        );
        assert_eq!(
            system.handle(Command::Fulfill { item_id: ItemId(1), quantity: 3 }),
            Reply::Fulfilled(Ok(2))
        );
        assert_eq!(
            system.handle(Command::EditEmployee {
                id: EmployeeId(4),
                update: EmployeeUpdate::new("Lead", 1.0),
            }),
            Reply::Edited(Err(EmployeeError::NotFound(EmployeeId(4))))
        );
    }
}
