//! Excerpt section, shown only when the book has one

use super::section_divider::SectionDivider;
use dioxus::prelude::*;

#[component]
pub fn ExcerptSection(excerpt: String) -> Element {
    rsx! {
        section { class: "container mx-auto px-6 max-w-3xl",
            SectionDivider {}
            h2 { class: "font-serif text-2xl font-bold text-stone-900 text-center mb-8", "Excerpt" }
            blockquote { class: "border-l-4 border-amber-600 pl-6 text-stone-700 italic leading-relaxed",
                for (i, line) in excerpt.split('\n').enumerate() {
                    if i > 0 {
                        br {}
                    }
                    "{line}"
                }
            }
        }
    }
}
