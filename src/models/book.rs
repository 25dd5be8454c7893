//! Book model

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Oldest publication year the catalog accepts
pub const MIN_YEAR: i32 = 1000;

/// Current calendar year, the upper bound for publication years
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Book record as served by the REST backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier, unique within the collection
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Book fields without the server-assigned identifier
///
/// Used as the create request body and as the payload carried out of the
/// edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BookDraft {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
    #[validate(range(min = 1000, message = "Year must be 1000 or later"))]
    pub year: i32,
}

impl BookDraft {
    /// Attach a server-assigned identifier, producing a full record
    pub fn with_id(&self, id: &str) -> Book {
        Book {
            id: id.to_string(),
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
        }
    }
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}
