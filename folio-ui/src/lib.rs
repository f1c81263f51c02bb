//! folio-ui - Pure view components for the folio catalog
//!
//! Props-based Dioxus components with callbacks for navigation; no data
//! fetching and no globals. The web app composes these with the catalog
//! handle and the router.

pub mod components;
pub mod wasm_utils;

pub use components::*;
