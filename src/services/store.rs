//! Book store
//!
//! Holds the last-known server state for the full book collection and
//! publishes it through a watch channel. The held list is only ever
//! replaced wholesale by a completed fetch, never patched locally.

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::{
    error::AppResult,
    models::{Book, BookDraft},
    services::gateway::BookGateway,
};

pub struct BookStore {
    gateway: BookGateway,
    list: watch::Sender<Vec<Book>>,
}

impl BookStore {
    pub fn new(gateway: BookGateway) -> Self {
        let (list, _) = watch::channel(Vec::new());
        Self { gateway, list }
    }

    /// Replace the held list with the server's current state
    ///
    /// On failure the previously held list is left unchanged.
    pub async fn fetch_all(&self) -> AppResult<()> {
        let books = self.gateway.list().await?;
        tracing::info!("Fetched {} books", books.len());
        self.list.send_replace(books);
        Ok(())
    }

    /// Snapshot of the held list, in server order
    pub fn current(&self) -> Vec<Book> {
        self.list.borrow().clone()
    }

    /// Subscribe to list changes
    pub fn subscribe(&self) -> watch::Receiver<Vec<Book>> {
        self.list.subscribe()
    }

    /// List changes as an async stream
    pub fn stream(&self) -> WatchStream<Vec<Book>> {
        WatchStream::new(self.list.subscribe())
    }

    /// Create a book and publish the refreshed collection
    pub async fn create(&self, draft: &BookDraft) -> AppResult<()> {
        let books = self.gateway.create(draft).await?;
        self.list.send_replace(books);
        Ok(())
    }

    /// Update a book and publish the refreshed collection
    pub async fn update(&self, id: &str, draft: &BookDraft) -> AppResult<()> {
        let books = self.gateway.update(id, draft).await?;
        self.list.send_replace(books);
        Ok(())
    }

    /// Delete a book and publish the refreshed collection
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let books = self.gateway.delete(id).await?;
        self.list.send_replace(books);
        Ok(())
    }
}
