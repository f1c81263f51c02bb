//! Full-viewport cover viewer
//!
//! The overlay's lifecycle is an explicit phase value, not a class toggled
//! on retained DOM: it mounts transparent (`Entering`), flips to `Open`
//! after one frame so the CSS transition animates instead of snapping, and
//! plays the reverse transition in `Closing` before the parent unmounts it
//! on `transitionend`.
//!
//! Escape handling is a single `DomEventListener` owned by the overlay
//! instance and dropped when it leaves, whatever the close trigger was.
//! A stale Escape press after close therefore has no listener to hit, and
//! cannot affect a later overlay.

use crate::components::icons::XIcon;
use crate::wasm_utils::{event_key, next_frame, set_body_scroll_locked, DomEventListener};
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OverlayPhase {
    /// Mounted but still transparent; painted at least once before opening
    Entering,
    /// Fully visible
    Open,
    /// Reverse transition playing; waiting for transitionend
    Closing,
}

/// Cover image lightbox. `is_open` is owned by the caller; `on_close` fires
/// after the exit transition finishes.
#[component]
pub fn CoverLightbox(
    is_open: ReadSignal<bool>,
    src: String,
    caption: String,
    on_close: EventHandler<()>,
) -> Element {
    let mut phase = use_signal(|| OverlayPhase::Entering);
    let mut escape_listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    // Start the exit transition. Safe to call repeatedly; only the first
    // call after open does anything.
    let mut begin_close = move || {
        if *phase.peek() == OverlayPhase::Closing {
            return;
        }
        phase.set(OverlayPhase::Closing);
    };

    use_effect(move || {
        if is_open() {
            phase.set(OverlayPhase::Entering);
            set_body_scroll_locked(true);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                escape_listener.set(Some(DomEventListener::new(
                    document.into(),
                    "keydown",
                    move |evt| {
                        if event_key(&evt).as_deref() == Some("Escape") {
                            begin_close();
                        }
                    },
                )));
            }

            spawn(async move {
                next_frame().await;
                if *phase.peek() == OverlayPhase::Entering {
                    phase.set(OverlayPhase::Open);
                }
            });
        } else {
            escape_listener.set(None);
            set_body_scroll_locked(false);
        }
    });

    // Restore scrolling if the page unmounts with the overlay still up
    use_drop(move || set_body_scroll_locked(false));

    if !is_open() {
        return rsx! {};
    }

    let visible = if *phase.read() == OverlayPhase::Open {
        "opacity-100"
    } else {
        "opacity-0"
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center transition-opacity duration-200 {visible}",
            ontransitionend: move |_| {
                if *phase.peek() == OverlayPhase::Closing {
                    on_close.call(());
                }
            },

            // Backdrop click closes
            div {
                class: "absolute inset-0 bg-black/90",
                onclick: move |_| begin_close(),
            }

            div {
                class: "relative flex flex-col items-center",
                onclick: move |e| e.stop_propagation(),
                img {
                    src: "{src}",
                    alt: "{caption}",
                    class: "max-w-[90vw] max-h-[80vh] object-contain rounded-lg shadow-2xl",
                }
                div { class: "mt-4 text-stone-300 text-sm", "{caption}" }
            }

            button {
                class: "absolute top-4 right-4 text-stone-400 hover:text-white transition-colors",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    begin_close();
                },
                XIcon { class: "w-6 h-6" }
            }
        }
    }
}
