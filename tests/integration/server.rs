//! In-process books resource used by the integration tests
//!
//! Serves the same REST surface as the real backend from an in-memory
//! list, with switches to make list reads or mutations fail.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use bookshelf_client::models::{Book, BookDraft};

#[derive(Clone)]
pub struct BooksState {
    books: Arc<Mutex<Vec<Book>>>,
    next_id: Arc<AtomicU64>,
    fail_list: Arc<AtomicBool>,
    fail_mutations: Arc<AtomicBool>,
}

impl BooksState {
    pub fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }
}

pub struct TestServer {
    pub base_url: String,
    pub state: BooksState,
}

pub async fn spawn(initial: Vec<Book>) -> TestServer {
    let state = BooksState {
        next_id: Arc::new(AtomicU64::new(initial.len() as u64 + 1)),
        books: Arc::new(Mutex::new(initial)),
        fail_list: Arc::new(AtomicBool::new(false)),
        fail_mutations: Arc::new(AtomicBool::new(false)),
    };

    let app = Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", put(update_book).delete(delete_book))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}/books", addr),
        state,
    }
}

/// Variant whose list endpoint answers with a JSON `null` body
pub async fn spawn_null_list() -> String {
    let app = Router::new().route(
        "/books",
        get(|| async { Json(serde_json::Value::Null) }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/books", addr)
}

async fn list_books(State(state): State<BooksState>) -> Result<Json<Vec<Book>>, StatusCode> {
    if state.fail_list.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(state.books()))
}

async fn create_book(
    State(state): State<BooksState>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Book>, StatusCode> {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let book = draft.with_id(&id.to_string());
    state.books.lock().unwrap().push(book.clone());
    Ok(Json(book))
}

async fn update_book(
    Path(id): Path<String>,
    State(state): State<BooksState>,
    Json(book): Json<Book>,
) -> Result<Json<Book>, StatusCode> {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut books = state.books.lock().unwrap();
    match books.iter_mut().find(|b| b.id == id) {
        Some(slot) => {
            *slot = book.clone();
            Ok(Json(book))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_book(
    Path(id): Path<String>,
    State(state): State<BooksState>,
) -> StatusCode {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let mut books = state.books.lock().unwrap();
    let before = books.len();
    books.retain(|b| b.id != id);
    if books.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
