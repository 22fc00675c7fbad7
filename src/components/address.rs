//=============================================================================
// File: src/components/address.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::CopyButton;
use crate::format::truncate_address;

/// Abbreviated account address with the full value on hover and a copy
/// button for the untruncated form.
#[component]
pub fn AddressDisplay(address: String) -> Element {
    let abbreviated = truncate_address(&address);

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            code {
                title: "{address}",
                "{abbreviated}"
            }
            CopyButton { text_to_copy: address.clone() }
        }
    }
}
