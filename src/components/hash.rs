//=============================================================================
// File: src/components/hash.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::CopyButton;
use crate::format::truncate_address;

/// A small helper component to display a transaction hash abbreviated,
/// with the full hash as tooltip and a copy button.
#[component]
pub fn TxHashDisplay(hash: String) -> Element {
    let abbreviated = truncate_address(&hash);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            code {
                title: "{hash}",
                "{abbreviated}"
            }
            CopyButton { text_to_copy: hash.clone() }
        }
    }
}
