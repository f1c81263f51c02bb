//! Cover image with one-shot placeholder fallback
//!
//! The failure flag is an explicit signal owned by the caller, so views that
//! need the resolved source later (the detail page hands it to the lightbox)
//! can read it. Once the flag is set the placeholder renders and further
//! error events are ignored, so a broken placeholder cannot loop.

use dioxus::prelude::*;

/// Fixed placeholder shown when a cover fails to load: a muted paper-toned
/// panel with a book glyph.
pub const COVER_PLACEHOLDER: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 300 400'>\
<rect width='300' height='400' fill='%23e7e5e4'/>\
<path d='M150 140v120M90 250a1 1 0 0 1-10-10V130a1 1 0 0 1 10-10h30a30 30 0 0 1 30 30 30 30 0 0 1 30-30h30a1 1 0 0 1 10 10v110a1 1 0 0 1-10 10h-40a20 20 0 0 0-20 20 20 20 0 0 0-20-20z' \
fill='none' stroke='%23a8a29e' stroke-width='8'/>\
</svg>";

/// Resolve the source a cover is actually showing.
pub fn resolved_cover_src(src: &str, failed: bool) -> String {
    if failed {
        COVER_PLACEHOLDER.to_string()
    } else {
        src.to_string()
    }
}

/// Book cover `img` element. `failed` is created by the caller
/// (`use_signal(|| false)`) and flips at most once.
#[component]
pub fn CoverImage(
    src: String,
    alt: String,
    mut failed: Signal<bool>,
    #[props(default)] class: Option<String>,
    #[props(default)] lazy: bool,
    #[props(default)] title: Option<String>,
) -> Element {
    let shown = resolved_cover_src(&src, failed());

    rsx! {
        img {
            src: "{shown}",
            alt: "{alt}",
            class: class.as_deref(),
            loading: if lazy { "lazy" } else { "eager" },
            title: title.as_deref(),
            onerror: move |_| {
                if !failed() {
                    failed.set(true);
                }
            },
        }
    }
}
