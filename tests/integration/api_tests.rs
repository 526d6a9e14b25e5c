//! End-to-end flows of the resource controller against a stub library API

use std::sync::{Arc, Mutex};

use library_admin::{
    client::ResourceClient,
    controller::{ControllerState, ResourceController},
    error::AppError,
    prompt::Prompt,
    resources::{Authors, Books, BorrowedBooks, Categories, Resource, Users},
    table::Action,
};
use mockito::{Matcher, ServerGuard};
use reqwest::Client;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Info(String),
    Error(String),
    Confirm(String),
}

/// Records every notification and answers confirmations with a fixed value
#[derive(Clone)]
struct RecordingPrompt {
    notices: Arc<Mutex<Vec<Notice>>>,
    answer: bool,
}

impl RecordingPrompt {
    fn new(answer: bool) -> Self {
        Self {
            notices: Arc::new(Mutex::new(Vec::new())),
            answer,
        }
    }

    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn info(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Error(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.notices.lock().unwrap().push(Notice::Confirm(message.to_string()));
        self.answer
    }
}

fn client<R: Resource>(server: &ServerGuard) -> ResourceClient<R> {
    ResourceClient::with_base_url(Client::new(), format!("{}{}", server.url(), R::BASE_PATH))
}

fn dune() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Dune",
        "publication_year": 1965,
        "isbn": "0441013597",
        "quantity": 3,
        "authors": [{"id": 1, "first_name": "Frank", "last_name": "Herbert", "biography": null}],
        "categories": [{"id": 2, "name": "Science Fiction", "description": null}],
        "created_at": "2024-05-01T10:00:00.000001",
        "updated_at": "2024-05-01T10:00:00.000001"
    })
}

fn borrow(return_date: Option<&str>) -> serde_json::Value {
    json!({
        "id": 5,
        "book_id": 1,
        "user_id": 8,
        "borrow_date": "2024-04-17T08:00:00",
        "due_date": "2024-05-01T08:00:00",
        "return_date": return_date,
        "created_at": "2024-04-17T08:00:00",
        "updated_at": "2024-04-17T08:00:00"
    })
}

#[tokio::test]
async fn test_create_book_then_relist() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/books")
        .match_body(Matcher::Json(json!({
            "title": "Dune",
            "publication_year": 1965,
            "isbn": "0441013597",
            "quantity": 3,
            "author_ids": [1],
            "category_ids": [2]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(dune().to_string())
        .expect(1)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/books")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([dune()]).to_string())
        .expect(1)
        .create_async()
        .await;

    let prompt = RecordingPrompt::new(true);
    let mut controller = ResourceController::new(client::<Books>(&server), prompt.clone());
    {
        let form = controller.form_mut().form_mut();
        form.input("title", "Dune").unwrap();
        form.input("publication_year", "1965").unwrap();
        form.input("isbn", "0441013597").unwrap();
        form.input("quantity", "3").unwrap();
        form.input("author_ids", "1").unwrap();
        form.input("category_ids", "2").unwrap();
    }
    controller.submit().await;

    create.assert_async().await;
    list.assert_async().await;
    assert_eq!(
        prompt.notices(),
        vec![Notice::Info("Book created successfully".to_string())]
    );

    let table = controller.table().current().expect("table rendered");
    let row = table.row(1).expect("Dune row");
    assert_eq!(
        &row.cells[1..7],
        &["Dune", "1965", "0441013597", "3", "Frank Herbert", "Science Fiction"]
    );
    assert_eq!(row.actions, [Action::Edit(1), Action::Delete(1)]);

    // form is back to a fresh create form
    assert_eq!(controller.state(), ControllerState::IdleCreate);
    assert_eq!(controller.form().form().text("quantity"), "1");
    assert_eq!(controller.form().form().text("title"), "");
}

#[tokio::test]
async fn test_edit_borrow_sends_only_return_date() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/borrowed-books/5")
        .with_status(200)
        .with_body(borrow(None).to_string())
        .expect(1)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/borrowed-books/5")
        .match_body(Matcher::Json(json!({"return_date": "2024-05-01T00:00:00.000Z"})))
        .with_status(200)
        .with_body(borrow(Some("2024-05-01T00:00:00")).to_string())
        .expect(1)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/borrowed-books")
        .with_status(200)
        .with_body(json!([borrow(Some("2024-05-01T00:00:00"))]).to_string())
        .expect(1)
        .create_async()
        .await;

    let prompt = RecordingPrompt::new(true);
    let mut controller = ResourceController::new(client::<BorrowedBooks>(&server), prompt.clone());
    controller.dispatch(Action::Edit(5)).await;

    assert_eq!(controller.state(), ControllerState::Editing(5));
    let form = controller.form().form();
    assert!(form.is_disabled("book_id"));
    assert!(form.is_disabled("user_id"));
    assert_eq!(form.text("book_id"), "1");

    let locked = controller.form_mut().form_mut().input("user_id", "9");
    assert!(matches!(locked, Err(AppError::Validation(_))));

    controller
        .form_mut()
        .form_mut()
        .input("return_date", "2024-05-01")
        .unwrap();
    controller.submit().await;

    update.assert_async().await;
    list.assert_async().await;
    assert_eq!(controller.state(), ControllerState::IdleCreate);
    assert!(!controller.form().form().is_disabled("book_id"));
    assert_eq!(
        prompt.notices(),
        vec![Notice::Info("Borrowed book updated successfully".to_string())]
    );
}

#[tokio::test]
async fn test_network_failure_on_load_notifies_once() {
    let prompt = RecordingPrompt::new(true);
    let client = ResourceClient::<Authors>::with_base_url(Client::new(), "http://127.0.0.1:9/api/authors");
    let mut controller = ResourceController::new(client, prompt.clone());

    controller.load().await;

    assert!(controller.table().current().is_none());
    let notices = prompt.notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(&notices[0], Notice::Error(msg) if msg.starts_with("Failed to fetch authors: Network error")));
}

#[tokio::test]
async fn test_delete_removes_row() {
    let mut server = mockito::Server::new_async().await;
    let author = |id: i32, first: &str| {
        json!({
            "id": id, "first_name": first, "last_name": "Herbert", "biography": null,
            "created_at": "2024-01-01T09:00:00", "updated_at": "2024-01-01T09:00:00"
        })
    };
    let before = server
        .mock("GET", "/api/authors")
        .with_status(200)
        .with_body(json!([author(1, "Frank"), author(2, "Brian")]).to_string())
        .expect(1)
        .create_async()
        .await;

    let prompt = RecordingPrompt::new(true);
    let mut controller = ResourceController::new(client::<Authors>(&server), prompt.clone());
    controller.load().await;
    before.assert_async().await;
    before.remove_async().await;
    assert_eq!(controller.table().current().unwrap().rows.len(), 2);

    let delete = server
        .mock("DELETE", "/api/authors/2")
        .with_status(200)
        .with_body(author(2, "Brian").to_string())
        .expect(1)
        .create_async()
        .await;
    let after = server
        .mock("GET", "/api/authors")
        .with_status(200)
        .with_body(json!([author(1, "Frank")]).to_string())
        .expect(1)
        .create_async()
        .await;

    controller.dispatch(Action::Delete(2)).await;

    delete.assert_async().await;
    after.assert_async().await;
    let table = controller.table().current().unwrap();
    assert_eq!(table.rows.len(), 1);
    assert!(table.row(2).is_none());
    assert_eq!(
        prompt.notices(),
        vec![
            Notice::Confirm("Are you sure you want to delete author with ID 2?".to_string()),
            Notice::Info("Author deleted successfully".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_delete_missing_record_surfaces_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/api/borrowed-books/42")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Borrow with ID 42 not found"}"#)
        .expect(2)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/borrowed-books")
        .expect(0)
        .create_async()
        .await;

    let err = client::<BorrowedBooks>(&server).delete(42).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let prompt = RecordingPrompt::new(true);
    let mut controller = ResourceController::new(client::<BorrowedBooks>(&server), prompt.clone());
    controller.delete(42).await;

    list.assert_async().await;
    assert_eq!(
        prompt.notices(),
        vec![
            Notice::Confirm(
                "Are you sure you want to delete borrowed book record with ID 42?".to_string()
            ),
            Notice::Error("Failed to delete borrowed book: Borrow with ID 42 not found".to_string()),
        ]
    );
}

/// Serves `body` on the list endpoint of `R` and decodes it through the client
async fn list_from<R: Resource>(body: serde_json::Value) -> Vec<R::Record> {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", R::BASE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;
    let records = client::<R>(&server).list().await.unwrap();
    list.assert_async().await;
    records
}

#[tokio::test]
async fn test_backend_read_models_decode() {
    let author_read = json!({
        "first_name": "Frank", "last_name": "Herbert", "biography": null,
        "id": 1, "created_at": "2024-05-01T10:00:00+00:00", "updated_at": "2024-05-01T10:00:00+00:00"
    });
    let category_read = json!({
        "name": "Science Fiction", "description": "Spaceships",
        "id": 2, "created_at": "2024-05-01T10:00:00", "updated_at": "2024-05-01T10:00:00"
    });

    let authors = list_from::<Authors>(json!([author_read.clone()])).await;
    assert_eq!(authors[0].last_name, "Herbert");

    let categories = list_from::<Categories>(json!([category_read.clone()])).await;
    assert_eq!(categories[0].description.as_deref(), Some("Spaceships"));

    let books = list_from::<Books>(json!([{
        "title": "Dune", "publication_year": 1965, "isbn": "0441013597", "quantity": 1,
        "id": 1, "created_at": "2024-05-01T10:00:00.123456", "updated_at": "2024-05-01T10:00:00.123456",
        "authors": [author_read], "categories": [category_read]
    }])).await;
    let cells = Books::cells(&books[0]);
    assert_eq!(&cells[5..7], &["Frank Herbert", "Science Fiction"]);

    let borrows = list_from::<BorrowedBooks>(json!([{
        "book_id": 1, "user_id": 8, "borrow_date": "2024-04-17T08:00:00.654321",
        "return_date": null, "due_date": "2024-05-01T08:00:00.654321",
        "id": 5, "created_at": "2024-04-17T08:00:00", "updated_at": "2024-04-17T08:00:00"
    }])).await;
    assert_eq!(borrows[0].return_date, None);
    assert!(BorrowedBooks::cells(&borrows[0]).contains(&"Not Returned".to_string()));

    // the user read model carries no updated_at
    let users = list_from::<Users>(json!([{
        "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.org",
        "id": 1, "registration_date": "2024-05-01T10:00:00.123456", "is_active": true
    }])).await;
    assert_eq!(users[0].updated_at, None);
    let cells = Users::cells(&users[0]);
    assert_eq!(cells[4], "Yes");
    assert_eq!(cells[6], "N/A");
}
