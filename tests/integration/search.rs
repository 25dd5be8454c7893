//! Search behavior over a live store: debounce, filtering, and edit
//! lookups that must not be hidden by an active filter.

use std::time::Duration;

use crate::crud_flow::{book, setup};

// Comfortably past the 500ms debounce window
const SETTLE: Duration = Duration::from_millis(700);

fn library() -> Vec<bookshelf_client::models::Book> {
    vec![
        book("1", "Dune", "Frank Herbert", 1965),
        book("2", "Foundation", "Isaac Asimov", 1951),
        book("3", "Dune Messiah", "Frank Herbert", 1969),
    ]
}

#[tokio::test]
async fn search_narrows_list_after_debounce() {
    let fx = setup(library()).await;
    fx.store.fetch_all().await.unwrap();

    fx.controller.set_search_query("herbert");
    tokio::time::sleep(SETTLE).await;

    let hits = fx.controller.filtered();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|b| b.author == "Frank Herbert"));
}

#[tokio::test]
async fn clearing_query_restores_full_list_in_order() {
    let fx = setup(library()).await;
    fx.store.fetch_all().await.unwrap();

    fx.controller.set_search_query("foundation");
    tokio::time::sleep(SETTLE).await;
    assert_eq!(fx.controller.filtered().len(), 1);

    fx.controller.set_search_query("");
    tokio::time::sleep(SETTLE).await;
    assert_eq!(fx.controller.filtered(), library());
}

#[tokio::test]
async fn edit_lookup_succeeds_despite_active_filter() {
    let fx = setup(library()).await;
    fx.store.fetch_all().await.unwrap();

    fx.controller.set_search_query("foundation");
    tokio::time::sleep(SETTLE).await;

    // Dune is filtered out of the visible list
    assert!(fx.controller.filtered().iter().all(|b| b.id != "1"));

    // but it can still be opened for editing
    let dialog = fx.controller.open_edit_dialog("1").unwrap();
    assert_eq!(dialog.form().title, "Dune");
}
