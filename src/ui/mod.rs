//! Front-end interaction logic
//!
//! Framework-agnostic: a rendering shell drives these types and draws
//! whatever state they expose.

pub mod dialog;
pub mod item;
pub mod list;

pub use dialog::{BookDialog, BookForm, DialogMode, DialogOutcome, Violation};
pub use item::{BookItemView, EditRequest};
pub use list::{BookListController, Notifier};
