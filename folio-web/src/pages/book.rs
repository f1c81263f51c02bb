//! Book detail page
//!
//! Reads the book id from the route's `id` query parameter. A missing or
//! empty id and an id that does not resolve are distinct terminal states;
//! neither renders any detail content.

use crate::Route;
use dioxus::prelude::*;
use folio_common::Catalog;
use folio_ui::{BookDetailView, NoticeView};

#[component]
pub fn BookDetail(id: Option<String>) -> Element {
    let catalog = use_context::<Catalog>();

    let back_home = move |_: ()| {
        navigator().push(Route::Home {});
    };

    let Some(book_id) = id.filter(|v| !v.is_empty()) else {
        return rsx! {
            NoticeView {
                message: "No book was specified.".to_string(),
                action_label: "Back to the catalog".to_string(),
                on_action: back_home,
            }
        };
    };

    match catalog.find(&book_id) {
        Some(book) => {
            let book = book.clone();
            rsx! {
                document::Title { "{book.title} — {book.author}" }
                // Keyed by id so per-book view state resets on navigation
                BookDetailView {
                    key: "{book.id}",
                    book,
                    on_back: move |_| {
                        navigator().push(Route::Home {});
                    },
                }
            }
        }
        None => rsx! {
            NoticeView {
                message: "Book not found.".to_string(),
                action_label: "Back to the catalog".to_string(),
                on_action: back_home,
            }
        },
    }
}
