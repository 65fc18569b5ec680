use std::net::TcpListener;
use serde_json::{json, Value};
use bookshelf::books::domain::Book;
use bookshelf::catalog::router;
use bookshelf::client::books_client::BooksClient;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::{Attributes, Configuration, IdAssignment};
use bookshelf::core::library::LibraryError;
use bookshelf::core::repository::RepositoryStore;
use bookshelf::gateway::GatewayPublisherVia;

/// Serve a fresh seeded catalog on an ephemeral port and return its base url
fn start_catalog(config: Configuration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    let state = AppState::new(config, RepositoryStore::Seeded, GatewayPublisherVia::Memory);
    let server = axum::Server::from_tcp(listener)
        .expect("failed to build server")
        .serve(router(state).into_make_service());
    tokio::spawn(server);
    format!("http://{}", addr)
}

fn attrs(value: Value) -> Attributes {
    value.as_object().cloned().expect("object")
}

#[tokio::test]
async fn test_client_runs_book_lifecycle() {
    let client = BooksClient::new(start_catalog(Configuration::new("test")).as_str());

    let seeded = client.list_books().await.expect("should list books");
    assert_eq!(json!([
        {"id": 1, "title": "To Kill a Mockingbird", "author": "Harper Lee"},
        {"id": 2, "title": "1984", "author": "George Orwell"},
    ]), serde_json::to_value(&seeded).unwrap());

    let created = client.create_book(&attrs(json!({"title": "The Great Gatsby", "author": "F. Scott Fitzgerald"})))
        .await.expect("should create book");
    assert_eq!(3, created.id);

    let loaded = client.get_book(3).await.expect("should get book");
    assert_eq!(created, loaded);

    let updated = client.update_book(3, &attrs(json!({"title": "The Great Gatsby (Updated)"})))
        .await.expect("should update book");
    assert_eq!(json!({"id": 3, "title": "The Great Gatsby (Updated)", "author": "F. Scott Fitzgerald"}),
               serde_json::to_value(&updated).unwrap());

    client.delete_book(3).await.expect("should delete book");
    assert_eq!(seeded, client.list_books().await.expect("should list books"));

    match client.get_book(3).await {
        Err(LibraryError::NotFound { message }) => assert_eq!("Book not found", message),
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn test_http_statuses_and_bodies() {
    let base_url = start_catalog(Configuration::new("test"));
    let http = reqwest::Client::new();

    let res = http.post(format!("{}/books", base_url))
        .json(&json!({"id": 77, "title": "Dune", "author": "Frank Herbert", "pages": 412}))
        .send().await.unwrap();
    assert_eq!(201, res.status().as_u16());
    let body: Value = res.json().await.unwrap();
    assert_eq!(json!({"id": 3, "title": "Dune", "author": "Frank Herbert", "pages": 412}), body);

    let res = http.get(format!("{}/books/42", base_url)).send().await.unwrap();
    assert_eq!(404, res.status().as_u16());
    assert_eq!(json!({"message": "Book not found"}), res.json::<Value>().await.unwrap());

    let res = http.put(format!("{}/books/42", base_url))
        .json(&json!({"title": "x"}))
        .send().await.unwrap();
    assert_eq!(404, res.status().as_u16());
    assert_eq!(json!({"message": "Book not found"}), res.json::<Value>().await.unwrap());

    let res = http.delete(format!("{}/books/42", base_url)).send().await.unwrap();
    assert_eq!(204, res.status().as_u16());
    assert!(res.bytes().await.unwrap().is_empty());

    let res = http.delete(format!("{}/books/3", base_url)).send().await.unwrap();
    assert_eq!(204, res.status().as_u16());

    let res = http.post(format!("{}/books", base_url))
        .json(&json!(["not", "an", "object"]))
        .send().await.unwrap();
    assert_eq!(400, res.status().as_u16());
    assert!(res.json::<Value>().await.unwrap()["message"].is_string());

    let res = http.get(format!("{}/books/abc", base_url)).send().await.unwrap();
    assert_eq!(400, res.status().as_u16());
}

#[tokio::test]
async fn test_length_ids_collide_after_delete() {
    let client = BooksClient::new(start_catalog(Configuration::new("test")).as_str());

    client.delete_book(2).await.expect("should delete book");
    let created = client.create_book(&attrs(json!({"title": "Brave New World"}))).await.expect("should create book");
    assert_eq!(2, created.id);

    client.delete_book(1).await.expect("should delete book");
    let dup = client.create_book(&attrs(json!({"title": "Dup"}))).await.expect("should create book");
    assert_eq!(2, dup.id);
    assert_eq!(Some("Brave New World"), client.get_book(2).await.expect("should get book").title());
}

#[tokio::test]
async fn test_monotonic_ids_and_immutable_id() {
    let config = Configuration::new("test")
        .with_id_assignment(IdAssignment::Monotonic)
        .with_immutable_ids(true);
    let client = BooksClient::new(start_catalog(config).as_str());

    client.delete_book(2).await.expect("should delete book");
    let created = client.create_book(&attrs(json!({"title": "Brave New World"}))).await.expect("should create book");
    assert_eq!(3, created.id);

    let updated = client.update_book(3, &attrs(json!({"id": 1, "author": "Aldous Huxley"})))
        .await.expect("should update book");
    assert_eq!(3, updated.id);
    assert_eq!(Some("Aldous Huxley"), updated.author());
}

#[tokio::test]
async fn test_rejects_non_integer_id_on_update() {
    let client = BooksClient::new(start_catalog(Configuration::new("test")).as_str());

    let res = client.update_book(1, &attrs(json!({"id": "one"}))).await;
    assert!(matches!(res, Err(LibraryError::Validation { .. })));
    assert_eq!(1, client.get_book(1).await.expect("should get book").id);
}

#[tokio::test]
async fn test_id_overwrite_on_update() {
    let client = BooksClient::new(start_catalog(Configuration::new("test")).as_str());

    let updated = client.update_book(2, &attrs(json!({"id": 5}))).await.expect("should update book");
    assert_eq!(5, updated.id);
    assert!(client.get_book(2).await.is_err());
    assert_eq!(Some("1984"), client.get_book(5).await.expect("should get book").title());
}
