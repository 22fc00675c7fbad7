//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use std::time::Duration;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::notify::Notifier;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
        (ButtonType::Contrast, false) => "contrast",
        (ButtonType::Contrast, true) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CopyButtonProps {
    text_to_copy: String,
}

/// Copies its text to the clipboard, flashing a checkmark on success.
/// A failed copy is non-fatal and goes through the app-wide notifier.
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let mut notifier = use_context::<Notifier>();
    let mut copied = use_signal(|| false);

    let label = if copied() { "✓" } else { "⧉" };

    rsx! {
        button {
            class: "secondary outline copy-button",
            title: "Copy to clipboard",
            onclick: move |_| {
                let text = props.text_to_copy.clone();
                spawn(async move {
                    if crate::compat::clipboard_set(text).await {
                        copied.set(true);
                        crate::compat::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    } else {
                        warn!("clipboard write failed");
                        notifier.notify("Could not copy to clipboard");
                    }
                });
            },
            "{label}"
        }
    }
}
