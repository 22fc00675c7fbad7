use dioxus::prelude::*;

use components::pico::Card;
use components::pico::Container;
use components::toast::Toast;
use notify::Notifier;
use screens::history::TransactionHistoryView;

mod api;
mod compat;
/// Shared components used across the app.
mod components;
mod export;
mod format;
mod model;
mod notify;
mod pagination;
/// The UI for each screen of the app.
mod screens;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[component]
pub fn App() -> Element {
    let responsive_css = r#"
    .history-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }

    .history-header h3 {
        margin-bottom: 0;
    }

    .pagination-controls {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        margin-top: 1rem;
    }

    .copy-button {
        padding: 0 0.4rem;
        margin: 0;
        line-height: 1.2;
        font-size: 0.8rem;
        width: auto;
        border: none;
    }

    .toast {
        position: fixed;
        bottom: 1rem;
        right: 1rem;
        z-index: 1000;
        display: flex;
        align-items: center;
        gap: 0.75rem;
        max-width: 24rem;
        margin: 0;
        padding: 0.75rem 1rem;
        box-shadow: var(--pico-card-box-shadow);
    }

    table th {
        position: sticky;
        top: 0;
        background: var(--pico-card-background-color);
        white-space: nowrap;
    }

    /* Collapse the export button to its icon on narrow viewports. */
    @media (max-width: 768px) {
        .export-label {
            display: none;
        }
    }
"#;

    // Signal for the toast state, provided app-wide through the context.
    let toast_state = use_signal(notify::ToastState::default);
    use_context_provider(|| Notifier { state: toast_state });

    let mut address = use_signal(String::new);
    let current_address = address();

    rsx! {
        document::Stylesheet { href: asset!("/assets/css/main.css") }
        style { "{responsive_css}" }

        Container {
            header {
                h1 { "TxLens" }
                p { "Auto-updating transaction history with CSV export." }
            }
            label {
                "Address"
                input {
                    r#type: "search",
                    name: "address",
                    placeholder: "0x0000000000000000000000000000000000000000",
                    oninput: move |event| address.set(event.value().trim().to_string()),
                }
            }
            if current_address.is_empty() {
                Card {
                    p { "Enter an address to view its transaction history." }
                }
            } else {
                // Keyed on the address: changing it remounts the screen and
                // drops any in-flight fetch for the previous address.
                TransactionHistoryView {
                    key: "{current_address}",
                    address: current_address.clone(),
                }
            }
        }

        Toast {}
    }
}
