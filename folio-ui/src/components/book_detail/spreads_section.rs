//! Page-spread gallery, shown only when the book has spreads

use super::section_divider::SectionDivider;
use dioxus::prelude::*;

#[component]
pub fn SpreadsSection(spreads: Vec<String>) -> Element {
    rsx! {
        section { class: "container mx-auto px-6",
            SectionDivider {}
            h2 { class: "font-serif text-2xl font-bold text-stone-900 text-center mb-8", "Spreads" }
            div { class: "grid gap-6 grid-cols-1 md:grid-cols-2",
                for (i, src) in spreads.iter().enumerate() {
                    img {
                        key: "{i}",
                        src: "{src}",
                        alt: "Page spread",
                        loading: "lazy",
                        class: "w-full rounded-lg shadow-md",
                    }
                }
            }
        }
    }
}
