//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Amber background - for primary calls to action
    Primary,
    /// Bordered, transparent background - for secondary actions
    Outline,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded-lg transition-colors";

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-amber-600 hover:bg-amber-500 text-white",
        ButtonVariant::Outline => {
            "border border-stone-400 text-stone-700 hover:border-stone-600 hover:text-stone-900"
        }
        ButtonVariant::Ghost => "text-stone-500 hover:text-stone-900",
    };

    let extra = class.as_deref().unwrap_or("");

    rsx! {
        button {
            class: "{base} {padding} {variant_class} {extra}",
            aria_label: aria_label.as_deref(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
