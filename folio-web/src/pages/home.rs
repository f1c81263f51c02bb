//! Home page: hero, featured strip, full catalog grid

use crate::Route;
use dioxus::prelude::*;
use folio_common::{Book, Catalog, GridSelection};
use folio_ui::BookGrid;

#[component]
pub fn Home() -> Element {
    let catalog = use_context::<Catalog>();

    let featured: Vec<Book> = catalog
        .select(&GridSelection::Featured)
        .into_iter()
        .cloned()
        .collect();
    let all: Vec<Book> = catalog
        .select(&GridSelection::All)
        .into_iter()
        .cloned()
        .collect();

    let open_book = move |id: String| {
        navigator().push(Route::BookDetail { id: Some(id) });
    };

    rsx! {
        // Hero behind the floating header
        section { class: "bg-stone-900 text-stone-100 pt-40 pb-24",
            div { class: "container mx-auto px-6 max-w-3xl text-center",
                h1 { class: "font-serif text-5xl font-bold mb-4", "Folio" }
                p { class: "text-lg text-stone-300",
                    "Illustrated books worth keeping. Browse the shelf below."
                }
            }
        }

        if !featured.is_empty() {
            section { class: "container mx-auto px-6 py-14",
                h2 { class: "font-serif text-3xl font-bold text-stone-900 mb-8", "Featured" }
                BookGrid { books: featured, on_open: open_book }
            }
        }

        section { id: "books", class: "container mx-auto px-6 py-14",
            h2 { class: "font-serif text-3xl font-bold text-stone-900 mb-8", "All books" }
            BookGrid { books: all, on_open: open_book }
        }
    }
}
