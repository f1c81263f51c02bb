//! Book card component - pure view with callbacks

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::cover_image::CoverImage;
use dioxus::prelude::*;
use folio_common::Book;

/// Summary card for one book (cover, genres, title, blurb, call to action).
///
/// Pure view component - navigation is handled via the `on_open` callback,
/// not direct router calls.
#[component]
pub fn BookCard(book: Book, on_open: EventHandler<String>) -> Element {
    let book_id = book.id.clone();
    let cover_failed = use_signal(|| false);

    rsx! {
        article { class: "bg-white rounded-lg overflow-hidden shadow-md hover:shadow-xl transition-shadow duration-300 flex flex-col",
            button {
                class: "block aspect-[3/4] bg-stone-200 cursor-pointer",
                aria_label: "{book.title}",
                onclick: {
                    let book_id = book_id.clone();
                    move |_| on_open.call(book_id.clone())
                },
                CoverImage {
                    src: book.cover_url.clone(),
                    alt: "Cover: {book.title}",
                    failed: cover_failed,
                    class: Some("w-full h-full object-cover".to_string()),
                    lazy: true,
                }
            }
            div { class: "p-4 flex flex-col flex-1 gap-2",
                div { class: "flex flex-wrap gap-1",
                    for genre in book.genres.iter() {
                        span {
                            class: "text-xs uppercase tracking-wide bg-stone-100 text-stone-600 rounded-full px-2 py-0.5",
                            "{genre}"
                        }
                    }
                }
                h3 { class: "font-bold text-lg text-stone-900",
                    button {
                        class: "hover:text-amber-700 transition-colors text-left",
                        onclick: {
                            let book_id = book_id.clone();
                            move |_| on_open.call(book_id.clone())
                        },
                        "{book.title}"
                    }
                }
                if let Some(subtitle) = &book.subtitle {
                    p { class: "text-sm text-stone-500 italic", "{subtitle}" }
                }
                p { class: "text-sm text-stone-600 flex-1", "{book.description}" }
                div {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: {
                            let book_id = book_id.clone();
                            move |_| on_open.call(book_id.clone())
                        },
                        "More"
                    }
                }
            }
        }
    }
}
