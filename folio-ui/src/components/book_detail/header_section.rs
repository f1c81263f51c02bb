//! Detail page header: cover column + book info column

use super::buy_section::BuySection;
use crate::components::cover_image::CoverImage;
use dioxus::prelude::*;
use folio_common::Book;

#[component]
pub fn HeaderSection(
    book: Book,
    /// Owned by the detail view so the lightbox can reuse the resolved source
    cover_failed: Signal<bool>,
    on_cover_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "container mx-auto px-6 flex flex-col lg:flex-row gap-10",
            // Cover column
            div { class: "w-full lg:w-[340px] lg:flex-shrink-0",
                button {
                    class: "block w-full cursor-zoom-in",
                    aria_label: "Enlarge cover",
                    onclick: move |_| on_cover_click.call(()),
                    CoverImage {
                        src: book.cover_url.clone(),
                        alt: "Cover: {book.title}",
                        failed: cover_failed,
                        class: Some("w-full rounded-lg shadow-lg".to_string()),
                        title: Some("Click to enlarge".to_string()),
                    }
                }
                p { class: "mt-2 text-center text-xs text-stone-400", "Click the cover to enlarge" }
            }

            // Info column
            div { class: "flex-1 min-w-0",
                div { class: "flex flex-wrap gap-1 mb-3",
                    for genre in book.genres.iter() {
                        span {
                            class: "text-xs uppercase tracking-wide bg-stone-100 text-stone-600 rounded-full px-2 py-0.5",
                            "{genre}"
                        }
                    }
                }
                h1 { class: "font-serif text-4xl font-bold text-stone-900", "{book.title}" }
                if let Some(subtitle) = &book.subtitle {
                    p { class: "mt-1 text-lg text-stone-500 italic", "{subtitle}" }
                }
                p { class: "mt-2 text-stone-700", "{book.author}" }
                p { class: "mt-1 text-sm text-stone-500", {book.meta_line()} }
                p { class: "mt-6 text-stone-700 leading-relaxed",
                    for (i, line) in book.long_description.split('\n').enumerate() {
                        if i > 0 {
                            br {}
                        }
                        "{line}"
                    }
                }

                BuySection { editions: book.editions.clone() }
            }
        }
    }
}
