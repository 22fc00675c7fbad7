//! CSV serialization of the loaded transaction list.

use crate::format::absolute_timestamp;
use crate::format::simplify_method_name;
use crate::model::Transaction;

const HEADER: [&str; 8] = [
    "Transaction Hash",
    "Method",
    "Block",
    "Age",
    "From",
    "To",
    "Amount",
    "Txn Fee",
];

/// Serializes the transactions to CSV bytes, one row per transaction.
///
/// Fields go through the `csv` writer so embedded commas, quotes and
/// newlines are quoted per RFC 4180. Absent optional fields become
/// empty cells.
pub fn to_csv(transactions: &[Transaction]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for tx in transactions {
        let age = absolute_timestamp(tx.timestamp);
        let amount = format!("{:.6}", tx.amount);
        writer.write_record([
            tx.hash.as_deref().unwrap_or(""),
            simplify_method_name(tx.method.as_deref().unwrap_or("")),
            tx.block.as_deref().unwrap_or(""),
            age.as_str(),
            tx.from.as_str(),
            tx.to.as_str(),
            amount.as_str(),
            tx.fee.as_deref().unwrap_or(""),
        ])?;
    }
    // into_inner surfaces an io::Error; csv::Error converts from it
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// Download name for the export of `address`'s history.
pub fn export_filename(address: &str) -> String {
    format!("{}_transactions.csv", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> Transaction {
        Transaction {
            from: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            to: "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
            amount: 1.5,
            timestamp: 1_700_000_000,
            hash: Some("0xabc".to_string()),
            block: Some("18500000".to_string()),
            fee: Some("0.001".to_string()),
            method: Some("transfer(address,uint256)".to_string()),
        }
    }

    fn csv_lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn header_row_comes_first() {
        let lines = csv_lines(to_csv(&[]).unwrap());
        assert_eq!(
            lines[0],
            "Transaction Hash,Method,Block,Age,From,To,Amount,Txn Fee"
        );
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn row_starts_with_hash_and_formats_amount() {
        let lines = csv_lines(to_csv(&[sample_tx()]).unwrap());
        assert!(lines[1].starts_with("0xabc,"));
        assert!(lines[1].contains("1.500000"));
        assert!(lines[1].contains("14-11-2023 22:13:20 UTC"));
        assert!(lines[1].contains(",transfer,"));
    }

    #[test]
    fn absent_optionals_become_empty_cells() {
        let tx = Transaction {
            hash: None,
            block: None,
            fee: None,
            method: None,
            ..sample_tx()
        };
        let lines = csv_lines(to_csv(&[tx]).unwrap());
        assert!(lines[1].starts_with(",,,"));
        assert!(lines[1].ends_with(','));
    }

    #[test]
    fn comma_bearing_fields_are_quoted() {
        let tx = Transaction {
            // no parameter list, so the comma survives simplification
            method: Some("swap, exact in".to_string()),
            ..sample_tx()
        };
        let lines = csv_lines(to_csv(&[tx]).unwrap());
        assert!(lines[1].contains("\"swap, exact in\""));
    }

    #[test]
    fn filename_embeds_the_address() {
        assert_eq!(
            export_filename("0x1234567890abcdefABCD"),
            "0x1234567890abcdefABCD_transactions.csv"
        );
    }
}
