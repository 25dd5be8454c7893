//! Data models

pub mod book;

pub use book::{current_year, Book, BookDraft, MIN_YEAR};
