//! Book edit dialog state machine
//!
//! One dialog session covers a single add/view/edit/delete interaction.
//! The session owns a working copy of the editable fields and never touches
//! the store; it closes by surfacing a terminal [`DialogOutcome`] that the
//! list controller routes to the gateway.

use crate::models::{current_year, Book, BookDraft, MIN_YEAR};

/// Mode of an open dialog session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// No source book; the form is always editable
    Create,
    /// Source book present, form disabled
    View,
    /// Source book present, form enabled
    Edit,
}

/// Terminal action surfaced when the dialog closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Create(BookDraft),
    Edit(BookDraft),
    /// Carries the working copy as-is at confirmation time
    Delete(BookForm),
    Close,
}

/// Validation rule violated by the current working copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TitleRequired,
    AuthorRequired,
    YearRequired,
    YearOutOfRange,
}

/// Working copy of the three editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

impl BookForm {
    fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: Some(book.year),
        }
    }

    /// Rules violated by the current field values
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.title.trim().is_empty() {
            violations.push(Violation::TitleRequired);
        }
        if self.author.trim().is_empty() {
            violations.push(Violation::AuthorRequired);
        }
        match self.year {
            None => violations.push(Violation::YearRequired),
            Some(year) if year < MIN_YEAR || year > current_year() => {
                violations.push(Violation::YearOutOfRange)
            }
            Some(_) => {}
        }
        violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    fn to_draft(&self) -> Option<BookDraft> {
        if !self.is_valid() {
            return None;
        }
        Some(BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year?,
        })
    }
}

/// One open dialog session
#[derive(Debug, Clone)]
pub struct BookDialog {
    source: Option<Book>,
    mode: DialogMode,
    form: BookForm,
    confirming_delete: bool,
}

impl BookDialog {
    /// Open in create mode with empty defaults
    pub fn create() -> Self {
        Self {
            source: None,
            mode: DialogMode::Create,
            form: BookForm::default(),
            confirming_delete: false,
        }
    }

    /// Open an existing book in view mode
    pub fn for_book(book: Book) -> Self {
        Self {
            form: BookForm::from_book(&book),
            source: Some(book),
            mode: DialogMode::View,
            confirming_delete: false,
        }
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    /// Whether the form currently accepts input
    pub fn is_editable(&self) -> bool {
        matches!(self.mode, DialogMode::Create | DialogMode::Edit)
    }

    /// Dialog heading for the current mode
    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Create => "Add new book",
            DialogMode::View => "View book",
            DialogMode::Edit => "Edit book",
        }
    }

    pub fn set_title(&mut self, title: &str) {
        if self.is_editable() {
            self.form.title = title.to_string();
        }
    }

    pub fn set_author(&mut self, author: &str) {
        if self.is_editable() {
            self.form.author = author.to_string();
        }
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        if self.is_editable() {
            self.form.year = year;
        }
    }

    /// Toggle between view and edit mode
    ///
    /// Leaving edit mode discards unsaved input by reverting the working
    /// copy to the source book's values. No-op in create mode.
    pub fn toggle_edit(&mut self) {
        match self.mode {
            DialogMode::View => self.mode = DialogMode::Edit,
            DialogMode::Edit => {
                self.revert();
                self.mode = DialogMode::View;
            }
            DialogMode::Create => {}
        }
    }

    /// Submit the form
    ///
    /// Returns `None` while the form is disabled or invalid; the dialog
    /// stays open and nothing is emitted.
    pub fn submit(&self) -> Option<DialogOutcome> {
        if !self.is_editable() {
            return None;
        }
        let draft = self.form.to_draft()?;
        Some(match self.source {
            Some(_) => DialogOutcome::Edit(draft),
            None => DialogOutcome::Create(draft),
        })
    }

    /// Cancel the current interaction
    ///
    /// From create or view mode this closes the dialog. From edit mode it
    /// reverts the working copy and drops back to view mode, returning
    /// `None` so the dialog stays open.
    pub fn cancel(&mut self) -> Option<DialogOutcome> {
        if self.source.is_some() && self.mode == DialogMode::Edit {
            self.revert();
            self.mode = DialogMode::View;
            return None;
        }
        Some(DialogOutcome::Close)
    }

    /// Open the delete confirmation sub-dialog
    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Resolve the delete confirmation
    ///
    /// Accepting closes with the current form values; declining leaves the
    /// session exactly as it was.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<DialogOutcome> {
        if !self.confirming_delete {
            return None;
        }
        self.confirming_delete = false;
        if confirmed {
            Some(DialogOutcome::Delete(self.form.clone()))
        } else {
            None
        }
    }

    fn revert(&mut self) {
        if let Some(ref book) = self.source {
            self.form = BookForm::from_book(book);
        }
    }
}
