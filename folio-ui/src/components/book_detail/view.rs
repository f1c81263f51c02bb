//! Book detail view - main component
//!
//! Composition of the header, the optional sections (each rendered only
//! when its data exists), and the cover lightbox. The two pieces of view
//! state live here: whether the lightbox is up, and whether the cover fell
//! back to the placeholder (the lightbox reuses the resolved source).

use super::excerpt_section::ExcerptSection;
use super::header_section::HeaderSection;
use super::spreads_section::SpreadsSection;
use super::video_section::VideoSection;
use crate::components::cover_image::resolved_cover_src;
use crate::components::cover_lightbox::CoverLightbox;
use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;
use folio_common::Book;

#[component]
pub fn BookDetailView(book: Book, on_back: EventHandler<()>) -> Element {
    let cover_failed = use_signal(|| false);
    let mut show_lightbox = use_signal(|| false);

    let lightbox_src = resolved_cover_src(&book.cover_url, cover_failed());

    rsx! {
        div { class: "pt-24 pb-16 flex flex-col gap-4", "data-testid": "book-detail",
            // Breadcrumb back to the catalog
            div { class: "container mx-auto px-6 mb-4",
                button {
                    class: "inline-flex items-center gap-2 text-stone-500 hover:text-stone-900 transition-colors",
                    onclick: move |_| on_back.call(()),
                    ArrowLeftIcon {}
                    "All books"
                }
            }

            HeaderSection {
                book: book.clone(),
                cover_failed,
                on_cover_click: move |_| show_lightbox.set(true),
            }

            if !book.spreads.is_empty() {
                SpreadsSection { spreads: book.spreads.clone() }
            }

            if let Some(excerpt) = &book.excerpt {
                ExcerptSection { excerpt: excerpt.clone() }
            }

            if let Some(video_url) = &book.video_url {
                VideoSection { video_url: video_url.clone(), book_title: book.title.clone() }
            }

            CoverLightbox {
                is_open: show_lightbox,
                src: lightbox_src,
                caption: book.title.clone(),
                on_close: move |_| show_lightbox.set(false),
            }
        }
    }
}
