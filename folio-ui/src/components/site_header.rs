//! Site header view component
//!
//! Pure, props-based header with the site wordmark and navigation. The
//! current page is highlighted via `NavItem::is_active`; the caller owns
//! the scroll state that switches the header from floating-over-hero to
//! solid.

use dioxus::prelude::*;

/// Navigation item for the site header
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Site header view (pure, props-based)
#[component]
pub fn SiteHeader(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Header floats transparently over the page top (home hero)
    floating: bool,
    /// Window is scrolled past the threshold; floating headers turn solid
    scrolled: bool,
) -> Element {
    let surface = if floating && !scrolled {
        "bg-transparent"
    } else {
        "bg-white/95 shadow-sm"
    };

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-40 transition-colors duration-300 {surface}",
            div { class: "container mx-auto px-6 h-16 flex items-center justify-between",
                button {
                    class: "font-serif text-xl font-bold text-stone-900",
                    onclick: move |_| on_nav_click.call("home".to_string()),
                    "Folio"
                }
                nav { class: "flex items-center gap-6",
                    for item in nav_items.iter() {
                        NavLink {
                            key: "{item.id}",
                            id: item.id.clone(),
                            label: item.label.clone(),
                            is_active: item.is_active,
                            on_click: on_nav_click,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(
    id: String,
    label: String,
    is_active: bool,
    on_click: EventHandler<String>,
) -> Element {
    let class = if is_active {
        "text-amber-700 font-medium"
    } else {
        "text-stone-600 hover:text-stone-900 transition-colors"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_click.call(id.clone()),
            "{label}"
        }
    }
}
