//! folio web app - renders the book catalog and detail pages
//!
//! A client-only Dioxus app over an embedded, read-only catalog fixture.
//! No server, no persistence; the catalog is parsed once at startup and
//! provided to the page tree through context.

mod catalog_data;
mod pages;

use dioxus::prelude::*;
use pages::{BookDetail, Home, SiteLayout};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/book?:id")]
    BookDetail { id: Option<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(catalog_data::load_catalog);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-stone-50 text-stone-900", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
