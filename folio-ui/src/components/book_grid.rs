//! Book grid - renders a prepared selection of books as cards
//!
//! Selection (all / featured / explicit ids) happens in
//! `folio_common::Catalog::select`; this component renders exactly what it
//! is given, in order. An empty list renders an empty grid, no error.

use crate::components::book_card::BookCard;
use dioxus::prelude::*;
use folio_common::Book;

#[component]
pub fn BookGrid(books: Vec<Book>, on_open: EventHandler<String>) -> Element {
    rsx! {
        div { class: "grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3",
            for book in books.into_iter() {
                BookCard { key: "{book.id}", book, on_open }
            }
        }
    }
}
