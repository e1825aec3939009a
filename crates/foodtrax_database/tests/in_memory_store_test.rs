//! Tests for the in-memory record store.

use foodtrax_database::InMemoryRecordStore;
use foodtrax_error::StoreErrorKind;
use foodtrax_interface::RecordStore;
use serde_json::json;

fn store() -> InMemoryRecordStore {
    InMemoryRecordStore::new()
        .with_table(
            "truck_information",
            &["truck_id", "name"],
            vec![
                vec![json!(1), json!("Tacos El Gordo")],
                vec![json!(2), json!("Pho Real")],
            ],
        )
        .with_table("users", &["id", "email"], Vec::new())
}

#[tokio::test]
async fn test_fetch_table_labels_rows() {
    let rows = store().fetch_table("truck_information").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["truck_id"], 1);
    assert_eq!(rows[1]["name"], "Pho Real");
}

#[tokio::test]
async fn test_fetch_empty_table() {
    let rows = store().fetch_table("users").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_fetch_rejects_invalid_name() {
    let err = store()
        .fetch_table("truck_information; DROP TABLE users")
        .await
        .unwrap_err();

    assert!(matches!(err.kind, StoreErrorKind::InvalidName(_)));
}

#[tokio::test]
async fn test_fetch_missing_table() {
    let err = store().fetch_table("particle_to_truck").await.unwrap_err();
    assert_eq!(
        err.kind,
        StoreErrorKind::TableNotFound("particle_to_truck".to_string())
    );
}

#[tokio::test]
async fn test_fetch_reports_arity_mismatch() {
    let store = store();
    store
        .insert_table(
            "truck_locations_memory",
            &["truck_id", "lat", "long"],
            vec![vec![json!(1), json!(43.1)]],
        )
        .await;

    let err = store.fetch_table("truck_locations_memory").await.unwrap_err();
    assert!(matches!(
        err.kind,
        StoreErrorKind::ShapeMismatch {
            expected: 3,
            found: 2,
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_tables_and_headers() {
    let store = store();

    let tables = store.list_tables().await.unwrap();
    assert_eq!(tables, vec!["truck_information", "users"]);

    let headers = store.list_table_headers("truck_information").await.unwrap();
    assert_eq!(headers, vec!["truck_id", "name"]);
}
