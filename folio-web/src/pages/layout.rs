//! Site layout: header wiring + routed page outlet
//!
//! Page-level behaviors live here: which nav item is highlighted (from the
//! current route) and the scroll-dependent header style. The scroll
//! listener is owned by this component and detaches when it unmounts.

use crate::Route;
use dioxus::prelude::*;
use folio_ui::wasm_utils::{window_scroll_y, DomEventListener};
use folio_ui::{NavItem, SiteHeader};

/// Scroll offset past which a floating header turns solid, in CSS pixels.
const SCROLL_THRESHOLD: f64 = 60.0;

#[component]
pub fn SiteLayout() -> Element {
    let current_route = use_route::<Route>();
    let mut scrolled = use_signal(|| false);
    let mut scroll_listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    use_effect(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        scrolled.set(window_scroll_y() > SCROLL_THRESHOLD);
        scroll_listener.set(Some(DomEventListener::new(
            window.into(),
            "scroll",
            move |_| scrolled.set(window_scroll_y() > SCROLL_THRESHOLD),
        )));
    });

    let on_home = matches!(current_route, Route::Home {});
    let nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: on_home,
        },
        NavItem {
            id: "books".to_string(),
            label: "Books".to_string(),
            is_active: matches!(current_route, Route::BookDetail { .. }),
        },
    ];

    rsx! {
        SiteHeader {
            nav_items,
            on_nav_click: move |_id: String| {
                navigator().push(Route::Home {});
            },
            floating: on_home,
            scrolled: scrolled(),
        }
        main { Outlet::<Route> {} }
    }
}
