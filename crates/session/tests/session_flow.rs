//! Black-box tests driving the session the way presentation code would:
//! mutate, listen on the bus, recompute the view, export/import.

use stockroom_core::{DomainError, ProductId};
use stockroom_events::Event;
use stockroom_inventory::{ProductFields, StoreEvent};
use stockroom_query::SortCriterion;
use stockroom_session::InventorySession;

fn fields(name: &str, brand: &str, price: f64, quantity: i64, avg: i64) -> ProductFields {
    ProductFields::new(name, brand, price, quantity, avg)
}

#[test]
fn crud_flow_publishes_one_event_per_accepted_mutation() {
    let mut session = InventorySession::new();
    let sub = session.subscribe();

    let nail = session.create(fields("Nail", "Acme", 9.5, 100, 50)).unwrap();
    session
        .update(nail, fields("Nail", "Acme", 10.0, 90, 50))
        .unwrap();
    session.remove(nail).unwrap();

    // A rejected mutation publishes nothing.
    assert!(session.create(fields("Bolt", "Acme", -1.0, 0, 0)).is_err());

    let types: Vec<&str> = std::iter::from_fn(|| sub.try_recv().ok())
        .map(|e| e.event_type())
        .collect();
    assert_eq!(
        types,
        [
            "inventory.product.created",
            "inventory.product.updated",
            "inventory.product.deleted",
        ]
    );
}

#[test]
fn update_notification_carries_the_field_transitions() {
    let mut session = InventorySession::new();
    let sub = session.subscribe();

    let id = session.create(fields("Nail", "Acme", 9.5, 100, 50)).unwrap();
    session
        .update(id, fields("Nail", "Acme", 10.0, 100, 50))
        .unwrap();

    let _created = sub.try_recv().unwrap();
    match sub.try_recv().unwrap() {
        StoreEvent::ProductUpdated { detail, .. } => {
            assert_eq!(detail, "price: 9.5 -> 10");
        }
        other => panic!("expected update event, got {other:?}"),
    }
}

#[test]
fn rejections_surface_as_typed_errors() {
    let mut session = InventorySession::new();
    session.create(fields("Nail", "Acme", 9.5, 100, 50)).unwrap();

    let dup = session.create(fields("nail", "ACME", 1.0, 1, 1)).unwrap_err();
    assert!(matches!(dup, DomainError::Conflict(_)));

    let neg = session.create(fields("Bolt", "Acme", -1.0, 1, 1)).unwrap_err();
    assert!(matches!(neg, DomainError::Validation(_)));

    let missing = session.remove(ProductId::new(99)).unwrap_err();
    assert!(matches!(missing, DomainError::NotFound));

    assert_eq!(session.store().len(), 1);
}

#[test]
fn view_composes_filter_and_sort() {
    let mut session = InventorySession::new();
    session.create(fields("Bolt A", "Acme", 1.0, 10, 0)).unwrap();
    session.create(fields("Bolt B", "Acme", 1.0, 0, 0)).unwrap();
    session.create(fields("Nail", "Acme", 1.0, 20, 0)).unwrap();

    session.set_min_quantity(5);
    session.set_show_zero_quantity(false);
    session.set_search_text("bolt");

    let names: Vec<&str> = session.current_view().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Bolt A"]);

    // Drop the search, sort by quantity descending.
    session.set_search_text("");
    session.set_sort_criterion(SortCriterion::ByQuantityDesc);
    let names: Vec<&str> = session.current_view().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Nail", "Bolt A"]);
}

#[test]
fn view_is_recomputed_from_current_state_on_every_call() {
    let mut session = InventorySession::new();
    session.create(fields("Nail", "Acme", 1.0, 5, 0)).unwrap();
    assert_eq!(session.current_view().len(), 1);

    session.create(fields("Bolt", "Acme", 1.0, 5, 0)).unwrap();
    assert_eq!(session.current_view().len(), 2);
}

#[test]
fn statistics_reflect_names_and_counters() {
    let mut session = InventorySession::new();
    session.create(fields("A", "X", 1.0, 1, 1)).unwrap();
    session.create(fields("A", "Y", 1.0, 1, 1)).unwrap();
    session.create(fields("B", "X", 1.0, 1, 1)).unwrap();

    let stats = session.statistics();
    assert_eq!(stats.total_products, 3);
    assert_eq!(stats.unique_names, 2);
    assert_eq!(stats.avg_products_per_name, "1.50");
    assert_eq!(stats.add_count, 3);
}

#[test]
fn find_by_name_matches_first_in_insertion_order() {
    let mut session = InventorySession::new();
    session.create(fields("Nail", "Acme", 1.0, 1, 1)).unwrap();
    session.create(fields("Nail", "Globex", 2.0, 1, 1)).unwrap();

    assert_eq!(session.find_by_name("NAIL").unwrap().brand, "Acme");
    assert!(session.find_by_name("Hammer").is_none());
}

#[test]
fn export_then_import_restores_products() {
    let mut source = InventorySession::new();
    source.create(fields("Nail", "Acme", 9.5, 100, 50)).unwrap();
    source.create(fields("Bolt", "Acme", 10.0, 0, 10)).unwrap();
    let text = source.export_csv();

    let mut target = InventorySession::new();
    let report = target.import_csv(&text);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.errors, 0);
    assert_eq!(target.store().products(), source.store().products());
}

#[test]
fn import_replaces_products_but_keeps_history_and_counters() {
    let mut session = InventorySession::new();
    session.create(fields("Old", "Acme", 1.0, 1, 1)).unwrap();
    let text = "ID,Name,Brand,Price,Quantity,AverageQuantity\n5,New,Acme,2,2,2\n";

    let report = session.import_csv(text);
    assert_eq!(report.loaded, 1);

    // The old product is gone from the collection...
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().products()[0].name, "New");

    // ...but the log still remembers it, and loaded rows count as adds.
    let history = session.history_text();
    assert!(history.contains("created product Old"));
    assert!(history.contains("created product New"));
    assert_eq!(session.statistics().add_count, 2);
}

#[test]
fn import_tolerates_malformed_rows() {
    let mut session = InventorySession::new();
    let text = "ID,Name,Brand,Price,Quantity,AverageQuantity\n\
                1,Nail,Acme,9.50,100,50\n\
                2,Bolt,Acme\n";

    let report = session.import_csv(text);
    assert_eq!(report.loaded, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn ids_keep_advancing_after_an_import() {
    let mut session = InventorySession::new();
    session.import_csv("header\n10,Nail,Acme,1,1,1\n");

    let id = session.create(fields("Bolt", "Acme", 1.0, 1, 1)).unwrap();
    assert_eq!(id, ProductId::new(11));
}
