//! Remote book gateway
//!
//! Translates book operations into REST calls against a single resource
//! endpoint. Every mutation chains into a full collection read so callers
//! always receive the server's post-mutation state.

use reqwest::Client;
use validator::Validate;

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    models::{Book, BookDraft},
};

#[derive(Clone)]
pub struct BookGateway {
    client: Client,
    base_url: String,
}

impl BookGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full collection
    ///
    /// A JSON `null` body counts as an empty collection.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        tracing::debug!("GET {}", self.base_url);
        let books: Option<Vec<Book>> = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(books.unwrap_or_default())
    }

    /// Create a book, then return the refreshed collection
    pub async fn create(&self, draft: &BookDraft) -> AppResult<Vec<Book>> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tracing::debug!("POST {}", self.base_url);
        self.client
            .post(&self.base_url)
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        self.list().await
    }

    /// Update a book by identifier, then return the refreshed collection
    ///
    /// The request body is the full record, identifier included.
    pub async fn update(&self, id: &str, draft: &BookDraft) -> AppResult<Vec<Book>> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let url = format!("{}/{}", self.base_url, id);
        tracing::debug!("PUT {}", url);
        self.client
            .put(&url)
            .json(&draft.with_id(id))
            .send()
            .await?
            .error_for_status()?;
        self.list().await
    }

    /// Delete a book by identifier, then return the refreshed collection
    pub async fn delete(&self, id: &str) -> AppResult<Vec<Book>> {
        let url = format!("{}/{}", self.base_url, id);
        tracing::debug!("DELETE {}", url);
        self.client
            .delete(&url)
            .send()
            .await?
            .error_for_status()?;
        self.list().await
    }
}
