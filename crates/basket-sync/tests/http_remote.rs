//! HTTP contract tests for `HttpRemote`.
//!
//! Starts an axum server on a random port and exercises the client against
//! it: method, path, body shape, id extraction, and failure typing.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use basket_core::{Product, ProductDraft, ProductId};
use basket_sync::{HttpRemote, Operation, RemoteConfig, RemoteStore, SyncError};

/// Requests captured by the mock handlers: (record id, JSON body).
type Recorded = Arc<Mutex<Vec<(i64, Value)>>>;

/// Binds port 0, serves `router`, and returns the collection URL.
async fn start_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/products")
}

fn remote_for(collection_url: &str) -> HttpRemote {
    HttpRemote::new(RemoteConfig::new(collection_url).unwrap())
}

fn product(id: i64, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.into(),
        quantity: "1".into(),
        category: "other".into(),
        purchased: false,
    }
}

// =============================================================================
// list
// =============================================================================

async fn list_two() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "Milk", "quantity": "2", "category": "dairy", "purchased": false },
        { "id": 2, "name": "Bread", "quantity": "1", "category": "bakery", "purchased": true },
    ]))
}

#[tokio::test]
async fn list_fetches_the_collection_in_order() {
    let base = start_server(Router::new().route("/products", get(list_two))).await;

    let products = remote_for(&base).list().await.unwrap();

    let ids: Vec<i64> = products.iter().map(|p| p.id.raw()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(products[0].name, "Milk");
    assert!(products[1].purchased);
}

#[tokio::test]
async fn list_surfaces_non_success_status() {
    async fn boom() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    let base = start_server(Router::new().route("/products", get(boom))).await;

    let err = remote_for(&base).list().await.unwrap_err();
    match err {
        SyncError::Status { op, status } => {
            assert_eq!(op, Operation::List);
            assert_eq!(status, 500);
        }
        other => panic!("expected status error, got {other}"),
    }
}

// =============================================================================
// create
// =============================================================================

async fn create_echoing(
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorded.lock().unwrap().push((0, body));
    // Echo a full record the way the real service does; the client must read
    // nothing but the id out of it.
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 42,
            "name": "Server Renamed",
            "quantity": "999",
            "category": "bakery",
            "purchased": true,
            "price": 0.0,
        })),
    )
}

#[tokio::test]
async fn create_sends_the_draft_and_trusts_only_the_id() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/products", post(create_echoing))
        .with_state(recorded.clone());
    let base = start_server(router).await;

    let draft = ProductDraft {
        name: "Milk".into(),
        quantity: "2".into(),
        category: "dairy".into(),
        purchased: false,
    };
    let id = remote_for(&base).create(&draft).await.unwrap();
    assert_eq!(id, ProductId::new(42));

    let sent = &recorded.lock().unwrap()[0].1;
    assert_eq!(sent.get("id"), None, "drafts must not carry an id");
    assert_eq!(sent["name"], "Milk");
    assert_eq!(sent["quantity"], "2");
    assert_eq!(sent["category"], "dairy");
    assert_eq!(sent["purchased"], false);
}

// =============================================================================
// update
// =============================================================================

async fn update_recording(
    Path(id): Path<i64>,
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> Json<Value> {
    recorded.lock().unwrap().push((id, body));
    Json(json!({ "status": "updated" }))
}

#[tokio::test]
async fn update_puts_the_full_record_at_the_record_path() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/products/{id}", put(update_recording))
        .with_state(recorded.clone());
    let base = start_server(router).await;

    let updated = product(7, "Butter").with_purchased(true);
    remote_for(&base).update(&updated).await.unwrap();

    let (path_id, body) = recorded.lock().unwrap()[0].clone();
    assert_eq!(path_id, 7);
    assert_eq!(body, serde_json::to_value(&updated).unwrap());
}

#[tokio::test]
async fn update_failure_carries_operation_and_status() {
    async fn missing() -> StatusCode {
        StatusCode::NOT_FOUND
    }
    let base = start_server(Router::new().route("/products/{id}", put(missing))).await;

    let err = remote_for(&base).update(&product(9, "Ghost")).await.unwrap_err();
    match err {
        SyncError::Status { op, status } => {
            assert_eq!(op, Operation::Update);
            assert_eq!(status, 404);
        }
        other => panic!("expected status error, got {other}"),
    }
}

// =============================================================================
// delete
// =============================================================================

async fn delete_recording(Path(id): Path<i64>, State(recorded): State<Recorded>) -> Json<Value> {
    recorded.lock().unwrap().push((id, Value::Null));
    Json(json!({ "status": "deleted" }))
}

#[tokio::test]
async fn delete_hits_the_record_path() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/products/{id}", delete(delete_recording))
        .with_state(recorded.clone());
    let base = start_server(router).await;

    remote_for(&base).delete(ProductId::new(3)).await.unwrap();

    assert_eq!(recorded.lock().unwrap()[0].0, 3);
}

// =============================================================================
// transport failures
// =============================================================================

#[tokio::test]
async fn transport_failure_is_reported_not_swallowed() {
    // Nothing listens on this port; the request dies in the transport.
    let remote = remote_for("http://127.0.0.1:9/products");

    let err = remote.list().await.unwrap_err();
    match err {
        SyncError::Transport { op, .. } => assert_eq!(op, Operation::List),
        other => panic!("expected transport error, got {other}"),
    }
}
