//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use std::time::Duration;

use dioxus::logger::tracing::info;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::api;
use crate::components::address::AddressDisplay;
use crate::components::hash::TxHashDisplay;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::export;
use crate::format;
use crate::model::Transaction;
use crate::notify::Notifier;
use crate::pagination::Pager;

/// How often the loaded history is refreshed from the API.
const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// A single row in the history table.
#[component]
fn TransactionRow(tx: Transaction) -> Element {
    let age = format::relative_time(tx.timestamp);
    let exact = format::absolute_timestamp(tx.timestamp);
    let amount = format::format_amount(tx.amount);

    rsx! {
        tr {
            td {
                // the indexer does not always resolve a hash
                match &tx.hash {
                    Some(h) => rsx! { TxHashDisplay { hash: h.clone() } },
                    None => rsx! { span { "-" } },
                }
            }
            td { AddressDisplay { address: tx.from.clone() } }
            td { AddressDisplay { address: tx.to.clone() } }
            td { "{amount}" }
            td {
                title: "{exact}",
                "{age}"
            }
        }
    }
}

/// Paginated, auto-refreshing transaction table for one address, with
/// CSV export of the loaded set.
///
/// Mount with `key: "{address}"` so an address change remounts the
/// screen: the in-flight fetch for the old address is dropped with it,
/// so a slow stale response can never overwrite newer state.
#[allow(non_snake_case)]
#[component]
pub fn TransactionHistoryView(address: String) -> Element {
    let mut notifier = use_context::<Notifier>();

    // The canonical list. Replaced wholesale on each successful fetch;
    // left untouched when a fetch fails.
    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut pager = use_signal(Pager::default);

    let fetch_address = address.clone();
    let history = use_resource(move || {
        let addr = fetch_address.clone();
        async move { api::transactions(&addr).await }
    });

    // Fold each completed fetch into the screen state.
    use_effect(move || match &*history.read() {
        Some(Ok(list)) => {
            if &*transactions.peek() != list {
                info!(count = list.len(), "transaction history updated");
                let len = list.len();
                transactions.set(list.clone());
                pager.with_mut(|p| p.resize(len));
            }
        }
        Some(Err(e)) => {
            warn!("failed to fetch transactions: {e}");
            notifier.notify(e.to_string());
        }
        None => {}
    });

    // for refreshing from the API every N secs
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut data_resource = history;
        async move {
            loop {
                crate::compat::sleep(REFRESH_INTERVAL).await;
                data_resource.restart();
            }
        }
    });

    let export_address = address.clone();
    let on_export = move |_| {
        let txs = transactions.peek().clone();
        let filename = export::export_filename(&export_address);
        spawn(async move {
            match export::to_csv(&txs) {
                Ok(bytes) => {
                    match crate::compat::save_file(&filename, "text/csv", bytes).await {
                        Ok(()) => info!(count = txs.len(), "exported transaction history"),
                        Err(e) => {
                            warn!("csv export failed: {e}");
                            notifier.notify(format!("Export failed: {e}"));
                        }
                    }
                }
                Err(e) => {
                    warn!("csv serialization failed: {e}");
                    notifier.notify(format!("Export failed: {e}"));
                }
            }
        });
    };

    let is_loading = history.read().is_none();
    let list = transactions.read();
    let pager_now = pager();
    let range = pager_now.slice_range(list.len());
    let owner = format::truncate_address(&address);

    rsx! {
        Card {
            div {
                class: "history-header",
                h3 { "Latest {list.len()} transactions for {owner}" }
                Button {
                    on_click: on_export,
                    disabled: list.is_empty(),
                    span { class: "export-icon", "⬇" }
                    span { class: "export-label", " Download CSV" }
                }
            }
            div {
                style: "max-height: 70vh; overflow-y: auto;",
                table {
                    thead {
                        tr {
                            th { "Transaction Hash" }
                            th { "From" }
                            th { "To" }
                            th { "Amount" }
                            th { "Timestamp" }
                        }
                    }
                    tbody {
                        if is_loading && list.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    "aria-busy": "true",
                                    "Loading transactions..."
                                }
                            }
                        } else if list.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    "No transactions found for this address."
                                }
                            }
                        } else {
                            {list[range.clone()].iter().map(|tx| rsx! {
                                TransactionRow { tx: tx.clone() }
                            })}
                        }
                    }
                }
            }
            div {
                class: "pagination-controls",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: !pager_now.has_prev(),
                    on_click: move |_| pager.with_mut(|p| p.prev()),
                    "Previous"
                }
                span { "Page {pager_now.current()} of {pager_now.total()}" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: !pager_now.has_next(),
                    on_click: move |_| pager.with_mut(|p| p.next()),
                    "Next"
                }
            }
        }
    }
}
