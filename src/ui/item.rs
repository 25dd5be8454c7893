//! Book item view
//!
//! Stateless projection of a single book row. The only gesture it knows is
//! "edit", emitted upward as the book's identifier.

use crate::models::Book;

/// Edit gesture emitted by an item view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub book_id: String,
}

pub struct BookItemView<'a> {
    book: &'a Book,
}

impl<'a> BookItemView<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &Book {
        self.book
    }

    /// Single-line display label
    pub fn label(&self) -> String {
        format!("{} by {} ({})", self.book.title, self.book.author, self.book.year)
    }

    /// React to the user's edit gesture
    pub fn request_edit(&self) -> EditRequest {
        EditRequest {
            book_id: self.book.id.clone(),
        }
    }
}
