//! Wire types for the transaction API.

use serde::Deserialize;

/// A single ledger entry as returned by the transaction endpoint.
///
/// The indexer omits fields it could not resolve, so everything beyond
/// the transfer itself is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub timestamp: i64,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

/// Successful response body: `{ "transactions": [...] }`.
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

/// Error response body. The server may or may not include a message.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "from": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
            "amount": 1.5,
            "timestamp": 1700000000,
            "hash": "0xabc",
            "block": "18500000",
            "fee": "0.001",
            "method": "transfer(address,uint256)"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, 1.5);
        assert_eq!(tx.hash.as_deref(), Some("0xabc"));
        assert_eq!(tx.method.as_deref(), Some("transfer(address,uint256)"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "from": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
            "amount": 0.25,
            "timestamp": 1700000000
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.hash.is_none());
        assert!(tx.block.is_none());
        assert!(tx.fee.is_none());
        assert!(tx.method.is_none());
    }

    #[test]
    fn response_wrapper_holds_the_list() {
        let json = r#"{"transactions": []}"#;
        let resp: TransactionsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.transactions.is_empty());
    }

    #[test]
    fn error_body_message_is_optional() {
        let resp: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.message.is_none());
        let resp: ErrorResponse =
            serde_json::from_str(r#"{"message":"server error"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("server error"));
    }
}
