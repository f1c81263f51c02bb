//! "Where to buy" section: one tab per edition, one retailer panel
//!
//! Tab state is the pure `EditionTabs` value held in a signal; only the
//! active edition's panel renders. Renders nothing at all when the book has
//! no editions.

use super::retailer_list::RetailerList;
use dioxus::prelude::*;
use folio_common::{Edition, EditionTabs};

#[component]
pub fn BuySection(editions: Vec<Edition>) -> Element {
    let count = editions.len();
    let mut tabs = use_signal(move || EditionTabs::new(count));

    // Re-sync when a different edition set renders into this slot
    if tabs.peek().count() != count {
        tabs.set(EditionTabs::new(count));
    }

    if editions.is_empty() {
        return rsx! {};
    }

    let selected = tabs.read().selected();

    rsx! {
        div { class: "mt-8",
            p { class: "font-serif text-lg font-bold text-stone-900 mb-3", "Where to buy" }
            div { role: "tablist", class: "flex flex-wrap gap-1 border-b border-stone-200",
                for (i, edition) in editions.iter().enumerate() {
                    button {
                        key: "{i}",
                        role: "tab",
                        aria_selected: if i == selected { "true" } else { "false" },
                        class: if i == selected {
                            "px-4 py-2 text-sm font-medium text-amber-800 border-b-2 border-amber-700 -mb-px"
                        } else {
                            "px-4 py-2 text-sm text-stone-500 hover:text-stone-800 transition-colors"
                        },
                        onclick: move |_| tabs.write().select(i),
                        "{edition.label}"
                    }
                }
            }
            div { role: "tabpanel", class: "pt-4",
                RetailerList { retailers: editions[selected].retailers.clone() }
            }
        }
    }
}
