//! Client for the external transaction endpoint.

use crate::model::ErrorResponse;
use crate::model::Transaction;
use crate::model::TransactionsResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; carries the server-provided message when the
    /// body had one, otherwise a generic fallback.
    #[error("{0}")]
    Server(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Base URL of the transaction API.
///
/// On native builds this comes from the `TXLENS_API_URL` environment
/// variable. The web build talks to its own origin.
#[cfg(not(target_arch = "wasm32"))]
fn base_url() -> String {
    const DEFAULT_URL: &str = "http://127.0.0.1:3000";
    std::env::var("TXLENS_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn base_url() -> String {
    String::new()
}

/// Fetches the transaction history for `address`.
pub async fn transactions(address: &str) -> Result<Vec<Transaction>, ApiError> {
    transactions_from(&base_url(), address).await
}

async fn transactions_from(base: &str, address: &str) -> Result<Vec<Transaction>, ApiError> {
    let url = format!("{}/api/transactions", base);
    let response = reqwest::Client::new()
        .get(&url)
        .query(&[("address", address)])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("request failed with status {}", status));
        return Err(ApiError::Server(message));
    }

    let parsed: TransactionsResponse = serde_json::from_str(&body)?;
    Ok(parsed.transactions)
}
