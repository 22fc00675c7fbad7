//! Non-blocking notification banner.

use std::time::Duration;

use dioxus::prelude::*;

use crate::notify::Notifier;

/// How long a notification stays up before dismissing itself.
const DISMISS_AFTER: Duration = Duration::from_secs(6);

#[component]
pub fn Toast() -> Element {
    let mut notifier = use_context::<Notifier>();
    let state = notifier.state;

    // Auto-dismiss. Each message spawns its own timer; the generation
    // check keeps a timer for an already-replaced message from taking
    // down the newer one early.
    use_effect(move || {
        let generation = state.read().generation();
        if state.read().message().is_some() {
            spawn(async move {
                crate::compat::sleep(DISMISS_AFTER).await;
                notifier
                    .state
                    .with_mut(|s| s.dismiss_if_current(generation));
            });
        }
    });

    let current = state.read().message().map(str::to_string);
    match current {
        Some(msg) => rsx! {
            article {
                class: "toast",
                role: "alert",
                span { "{msg}" }
                button {
                    class: "secondary outline copy-button",
                    "aria-label": "Close",
                    onclick: move |_| notifier.clear(),
                    "×"
                }
            }
        },
        None => rsx! {},
    }
}
