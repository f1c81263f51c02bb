//! Retailer groups for one edition
//!
//! Every link opens in a new browsing context with no back-reference to the
//! opener. The `Retailer` enum is closed, so the match is exhaustive;
//! unknown platforms never get this far (they are rejected with a warning
//! when the catalog is loaded).

use crate::components::icons::{BookOpenIcon, ExternalLinkIcon, PackageIcon};
use dioxus::prelude::*;
use folio_common::Retailer;

const LINK_BUTTON: &str = "inline-flex items-center gap-2 rounded-lg px-3 py-1.5 text-sm \
     bg-stone-100 text-stone-800 hover:bg-stone-200 transition-colors";

#[component]
pub fn RetailerList(retailers: Vec<Retailer>) -> Element {
    rsx! {
        div { class: "flex flex-col gap-5",
            for (i, retailer) in retailers.iter().enumerate() {
                div { key: "{i}",
                    match retailer {
                        Retailer::Amazon { regions } => rsx! {
                            p { class: "flex items-center gap-2 text-sm font-medium text-stone-700 mb-2",
                                PackageIcon {}
                                "Amazon"
                            }
                            div { class: "flex flex-wrap gap-2",
                                for region in regions.iter() {
                                    a {
                                        key: "{region.label}",
                                        href: "{region.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: LINK_BUTTON,
                                        span { "{region.flag}" }
                                        span { "{region.label}" }
                                    }
                                }
                            }
                        },
                        Retailer::Lulu { url } => rsx! {
                            p { class: "flex items-center gap-2 text-sm font-medium text-stone-700 mb-2",
                                BookOpenIcon {}
                                "Lulu"
                            }
                            a {
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: LINK_BUTTON,
                                "Buy on Lulu"
                                ExternalLinkIcon { class: "w-3.5 h-3.5" }
                            }
                        },
                    }
                }
            }
        }
    }
}
