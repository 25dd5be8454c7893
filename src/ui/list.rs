//! Book list controller
//!
//! Derives the searched view of the store's list and orchestrates the
//! add/edit dialogs, routing their outcomes to the store and reporting
//! success or failure through the [`Notifier`] boundary.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    services::store::BookStore,
    ui::dialog::{BookDialog, DialogOutcome},
};

/// Idle time before a typed query takes effect
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

const GENERIC_FAILURE: &str = "Ooops... something went wrong";

/// User-visible feedback boundary
///
/// The rendering shell decides how notifications are presented.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Keep only books whose title or author contains the query,
/// case-insensitively. An empty trimmed query keeps everything.
pub fn filter_books(books: &[Book], query: &str) -> Vec<Book> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return books.to_vec();
    }
    books
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Republish raw query values once input has been idle for the debounce
/// window. Ends when the raw sender side is dropped.
fn spawn_debounce(mut raw: watch::Receiver<String>, active: watch::Sender<String>) {
    tokio::spawn(async move {
        while raw.changed().await.is_ok() {
            loop {
                let pending = raw.borrow_and_update().clone();
                tokio::select! {
                    changed = raw.changed() => {
                        if changed.is_err() {
                            return;
                        }
                    }
                    _ = tokio::time::sleep(SEARCH_DEBOUNCE) => {
                        let _ = active.send(pending);
                        break;
                    }
                }
            }
        }
    });
}

pub struct BookListController {
    store: Arc<BookStore>,
    notifier: Arc<dyn Notifier>,
    query: watch::Sender<String>,
    active_query: watch::Receiver<String>,
}

impl BookListController {
    /// Must be called within a tokio runtime; spawns the debounce task.
    pub fn new(store: Arc<BookStore>, notifier: Arc<dyn Notifier>) -> Self {
        let (query, raw_rx) = watch::channel(String::new());
        let (active_tx, active_query) = watch::channel(String::new());
        spawn_debounce(raw_rx, active_tx);
        Self {
            store,
            notifier,
            query,
            active_query,
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Record a keystroke's worth of search input
    pub fn set_search_query(&self, text: &str) {
        let _ = self.query.send(text.to_string());
    }

    /// Observe the debounced query, for shells re-rendering on change
    pub fn search_changes(&self) -> watch::Receiver<String> {
        self.active_query.clone()
    }

    /// The store list narrowed by the debounced search query
    pub fn filtered(&self) -> Vec<Book> {
        let query = self.active_query.borrow().clone();
        filter_books(&self.store.current(), &query)
    }

    /// Open the dialog with no source book
    pub fn open_add_dialog(&self) -> BookDialog {
        BookDialog::create()
    }

    /// Open the dialog for an existing book
    ///
    /// The id is resolved against the full store list, not the filtered
    /// view, so an active search query cannot hide the edit target.
    pub fn open_edit_dialog(&self, id: &str) -> AppResult<BookDialog> {
        let book = self
            .store
            .current()
            .into_iter()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))?;
        Ok(BookDialog::for_book(book))
    }

    /// Route the outcome of an add dialog
    pub async fn finish_add(&self, outcome: DialogOutcome) {
        if let DialogOutcome::Create(draft) = outcome {
            match self.store.create(&draft).await {
                Ok(()) => self.notifier.success("Book successfully added"),
                Err(e) => {
                    tracing::warn!("Create failed: {}", e);
                    self.notifier.error(GENERIC_FAILURE);
                }
            }
        }
    }

    /// Route the outcome of an edit dialog for the given book id
    pub async fn finish_edit(&self, id: &str, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Edit(draft) => match self.store.update(id, &draft).await {
                Ok(()) => self.notifier.success("Book successfully edited"),
                Err(e) => {
                    tracing::warn!("Update failed: {}", e);
                    self.notifier.error(GENERIC_FAILURE);
                }
            },
            DialogOutcome::Delete(_) => match self.store.delete(id).await {
                Ok(()) => self.notifier.success("Book successfully deleted"),
                Err(e) => {
                    tracing::warn!("Delete failed: {}", e);
                    self.notifier.error(GENERIC_FAILURE);
                }
            },
            _ => {}
        }
    }
}
