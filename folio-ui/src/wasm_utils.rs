//! Browser interop utilities
//!
//! # Event Listener Cleanup Pattern
//!
//! Attaching a JavaScript event listener from Rust/WASM requires keeping the
//! `Closure` alive for as long as the listener is attached. The naive
//! `closure.forget()` leaks the closure and leaves the listener attached
//! forever, which is exactly how stale Escape handlers accumulate.
//!
//! Instead the closure lives in a struct that removes the listener on
//! `Drop`, tying the listener lifetime to Rust ownership:
//!
//! ```ignore
//! // Attached on construction
//! let listener = DomEventListener::new(document.into(), "keydown", callback);
//!
//! // Removed when dropped
//! drop(listener);
//! ```
//!
//! With Dioxus signals, store the listener in a
//! `Signal<Option<DomEventListener>>` and set it to `None` to detach.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// An event listener on any target (document, window, element) that removes
/// itself when dropped.
pub struct DomEventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen::JsValue)>,
}

impl DomEventListener {
    /// Attaches an event listener to `target`.
    ///
    /// The listener is removed again when the returned value is dropped.
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen::JsValue)> =
            Closure::wrap(Box::new(callback));

        if target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!(event_name, "failed to attach event listener");
        }

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for DomEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read the `key` property of a keyboard event without needing the typed
/// `KeyboardEvent` bindings.
pub fn event_key(event: &wasm_bindgen::JsValue) -> Option<String> {
    js_sys::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Suppress or restore body scrolling (used while an overlay is up).
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

/// Current vertical scroll position of the window, in CSS pixels.
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Wait roughly one render frame, so a just-mounted element gets painted in
/// its initial state before a transition class flips.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    gloo_timers::future::TimeoutFuture::new(16).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    tokio::time::sleep(std::time::Duration::from_millis(16)).await;
}
