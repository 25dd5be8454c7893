//! Bookshelf client
//!
//! Front-end core for a book collection manager backed by a REST resource:
//! remote gateway, reactive store, list orchestration with debounced
//! search, and the add/view/edit/delete dialog state machine. Rendering is
//! left to a shell built on top of the [`ui`] layer.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use config::LoggingConfig;
use services::{BookGateway, BookStore};
use ui::{BookListController, Notifier};

/// Application bundle shared by the UI layer
#[derive(Clone)]
pub struct App {
    pub config: Arc<AppConfig>,
    pub store: Arc<BookStore>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let gateway = BookGateway::new(&config.api);
        Self {
            config: Arc::new(config),
            store: Arc::new(BookStore::new(gateway)),
        }
    }

    /// Build a list controller over the shared store
    pub fn list_controller(&self, notifier: Arc<dyn Notifier>) -> BookListController {
        BookListController::new(self.store.clone(), notifier)
    }
}

/// Initialize tracing from the logging configuration
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf_client={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
