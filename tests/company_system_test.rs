use company_records::audit::{AuditEvent, RecordingSink};
use company_records::lifecycle::CompanySystem;
use company_records::model::{
    EmployeeCreate, EmployeeId, EmployeeUpdate, ItemCreate, ItemId, OrderCreate, OrderId,
};
use company_records::order_processing::ProcessingError;
use company_records::order_store::OrderError;
use std::sync::Arc;

fn system() -> (CompanySystem, RecordingSink) {
    let sink = RecordingSink::new();
    (CompanySystem::new(Arc::new(sink.clone())), sink)
}

#[test]
fn test_duplicate_employee_ids_first_match_and_remove_all() {
    let (mut system, _) = system();
    system.employees.add(EmployeeCreate::new("Anna", "A", 1, "Clerk", 100.0));
    system.employees.add(EmployeeCreate::new("Boris", "B", 1, "Driver", 200.0));

    assert_eq!(system.employees.find(EmployeeId(1)).unwrap().first_name, "Anna");

    system
        .employees
        .edit(EmployeeId(1), EmployeeUpdate::new("Manager", 300.0))
        .unwrap();
    assert_eq!(system.employees.list_all()[0].position, "Manager");
    assert_eq!(system.employees.list_all()[1].position, "Driver");

    assert_eq!(system.employees.remove(EmployeeId(1)), 2);
    assert!(system.employees.find(EmployeeId(1)).is_none());
    assert!(system.employees.is_empty());
}

#[test]
fn test_salary_cost_over_mixed_salaries() {
    let (mut system, _) = system();
    assert_eq!(system.employees.total_salary_cost(), 0.0);

    for (id, salary) in [(1, 1000.0), (2, 2500.5), (3, 0.0)] {
        system
            .employees
            .add(EmployeeCreate::new("First", "Last", id, "Staff", salary));
    }

    assert_eq!(system.employees.total_salary_cost(), 3500.5);
}

#[test]
fn test_inventory_add_replaces_instead_of_summing() {
    let (mut system, _) = system();
    system.inventory.add(ItemCreate::new(5, "Bolt", 10, 0));
    system.inventory.add(ItemCreate::new(5, "Bolt", 3, 0));

    let items = system.inventory.list_all();
    let item = items.iter().find(|i| i.id == ItemId(5)).unwrap();
    assert_eq!(item.quantity, 3);
}

#[test]
fn test_widget_low_stock_and_fulfillment_scenario() {
    let (mut system, sink) = system();
    system.inventory.add(ItemCreate::new(1, "Widget", 5, 10));

    let low: Vec<_> = system.inventory.list_low_stock().iter().map(|i| i.id).collect();
    assert_eq!(low, vec![ItemId(1)]);

    assert_eq!(system.fulfill(ItemId(1), 3), Ok(2));
    assert_eq!(system.inventory.get(ItemId(1)).unwrap().quantity, 2);

    assert!(matches!(
        system.fulfill(ItemId(1), 5),
        Err(ProcessingError::InsufficientStock { requested: 5, available: Some(2), .. })
    ));
    assert_eq!(system.inventory.get(ItemId(1)).unwrap().quantity, 2);

    assert_eq!(
        sink.events(),
        vec![
            AuditEvent::ItemAdded { id: ItemId(1), replaced: false },
            AuditEvent::StockDeducted { id: ItemId(1), amount: 3, quantity: 2 },
            AuditEvent::OrderFulfilled { item_id: ItemId(1), quantity: 3 },
            AuditEvent::FulfillmentRejected { item_id: ItemId(1), quantity: 5 },
        ]
    );
}

#[test]
fn test_update_status_unknown_order_leaves_collection_unchanged() {
    let (mut system, _) = system();
    system
        .orders
        .add(OrderCreate::new(1, "Roof", "Replace tiles", "New", "2024-05-01", "2024-06-01"));
    system
        .orders
        .add(OrderCreate::new(2, "Fence", "Paint", "Done", "2024-05-02", "2024-05-20"));

    let before = system.orders.list_all().to_vec();
    let active_before: Vec<_> = system.orders.list_active().into_iter().cloned().collect();

    assert_eq!(
        system.orders.update_status(OrderId(3), "Done"),
        Err(OrderError::NotFound(OrderId(3)))
    );

    assert_eq!(system.orders.list_all(), before.as_slice());
    let active_after: Vec<_> = system.orders.list_active().into_iter().cloned().collect();
    assert_eq!(active_after, active_before);
}

#[test]
fn test_is_available_unknown_item_for_any_requirement() {
    let (system, _) = system();
    for required in [-1, 0, 1, 1000] {
        assert!(!system.inventory.is_available(ItemId(99), required));
    }
}

#[test]
fn test_every_mutation_is_audited_once() {
    let (mut system, sink) = system();

    system.employees.add(EmployeeCreate::new("Anna", "A", 1, "Clerk", 100.0));
    system
        .employees
        .edit(EmployeeId(1), EmployeeUpdate::new("Lead", 150.0))
        .unwrap();
    system.employees.remove(EmployeeId(1));
    system.orders.add(OrderCreate::new(1, "Roof", "", "New", "", ""));
    system.orders.update_status(OrderId(1), "Done").unwrap();
    system.inventory.add(ItemCreate::new(1, "Widget", 5, 1));
    system.inventory.adjust_quantity(ItemId(1), 2);
    system.inventory.deduct(ItemId(1), 1);

    let events = sink.events();
    assert_eq!(events.len(), 8);
    assert_eq!(
        sink.kinds(),
        vec![
            "employee.added",
            "employee.edited",
            "employee.removed",
            "order.added",
            "order.status_updated",
            "inventory.item_added",
            "inventory.quantity_adjusted",
            "inventory.stock_deducted",
        ]
    );
}
