//! Embedded video section, shown only when the book has one

use super::section_divider::SectionDivider;
use dioxus::prelude::*;

#[component]
pub fn VideoSection(video_url: String, book_title: String) -> Element {
    rsx! {
        section { class: "container mx-auto px-6 max-w-3xl",
            SectionDivider {}
            h2 { class: "font-serif text-2xl font-bold text-stone-900 text-center mb-8", "Video" }
            div { class: "aspect-video rounded-lg overflow-hidden shadow-md",
                iframe {
                    class: "w-full h-full",
                    src: "{video_url}",
                    title: "Video: {book_title}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        }
    }
}
