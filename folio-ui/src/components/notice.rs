//! Centered terminal notices for the detail page
//!
//! "Book not specified" and "book not found" both land here; the page picks
//! the message, this component renders it with a way back to the catalog.

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

#[component]
pub fn NoticeView(
    message: String,
    action_label: String,
    on_action: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "container mx-auto px-6 py-24 text-center",
            p { class: "text-lg text-stone-500 mb-4", "{message}" }
            button {
                class: "inline-flex items-center gap-2 text-amber-700 hover:text-amber-900 transition-colors",
                onclick: move |_| on_action.call(()),
                ArrowLeftIcon {}
                "{action_label}"
            }
        }
    }
}
