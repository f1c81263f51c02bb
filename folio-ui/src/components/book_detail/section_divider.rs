//! Decorative divider preceding each optional detail section

use dioxus::prelude::*;

#[component]
pub fn SectionDivider() -> Element {
    rsx! {
        div { class: "flex items-center justify-center my-10", aria_hidden: "true",
            span { class: "h-px w-16 bg-stone-300" }
            span { class: "mx-4 text-stone-400 text-xs", "◆" }
            span { class: "h-px w-16 bg-stone-300" }
        }
    }
}
