use std::collections::HashMap;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// One purchase lot as written in the holdings file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeclaredLot {
    /// Display name; lots sharing it are merged in the aggregated view.
    pub name: String,
    /// Per-unit cost in the instrument's native currency.
    pub purchase_price: Decimal,
    /// Units bought in this lot.
    pub amount: u64,
}

/// Contents of the holdings file.
///
/// ```json
/// {
///   "stocks": [{ "name": "Samsung", "purchase_price": 71000, "amount": 10 }],
///   "ticker": { "Samsung": "005930.KS" }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HoldingsDeclaration {
    #[serde(rename = "stocks")]
    pub lots: Vec<DeclaredLot>,
    #[serde(rename = "ticker", default)]
    pub tickers: HashMap<String, String>,
}

impl HoldingsDeclaration {
    /// Reads and validates a holdings file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::InvalidInput(format!(
                "Failed to read holdings file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded holdings file {}", path.display());
        Self::from_json(&raw)
    }

    /// Parses and validates a holdings declaration from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let declaration: HoldingsDeclaration = serde_json::from_str(raw)?;
        declaration.validate()?;
        Ok(declaration)
    }

    /// Checks field-level constraints.
    ///
    /// Zero amounts are left to the position builder, which reports them per
    /// display name.
    pub fn validate(&self) -> Result<()> {
        for (index, lot) in self.lots.iter().enumerate() {
            if lot.name.trim().is_empty() {
                return Err(ValidationError::MissingField(format!("stocks[{}].name", index)).into());
            }
            if lot.purchase_price.is_sign_negative() {
                return Err(ValidationError::InvalidInput(format!(
                    "Purchase price of '{}' must not be negative, got {}",
                    lot.name, lot.purchase_price
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Distinct display names in first-seen order.
    pub fn display_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.lots
            .iter()
            .map(|lot| lot.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "stocks": [
            { "name": "Samsung", "purchase_price": 71000, "amount": 10 },
            { "name": "Apple", "purchase_price": 172.35, "amount": 3 },
            { "name": "Samsung", "purchase_price": 65000, "amount": 5 }
        ],
        "ticker": { "Samsung": "005930.KS", "Apple": "AAPL" }
    }"#;

    #[test]
    fn test_from_json_parses_lots_and_tickers() {
        let declaration = HoldingsDeclaration::from_json(SAMPLE).unwrap();
        assert_eq!(declaration.lots.len(), 3);
        assert_eq!(declaration.lots[1].purchase_price, dec!(172.35));
        assert_eq!(declaration.lots[2].amount, 5);
        assert_eq!(
            declaration.tickers.get("Samsung").map(String::as_str),
            Some("005930.KS")
        );
        assert_eq!(declaration.display_names(), vec!["Samsung", "Apple"]);
    }

    #[test]
    fn test_missing_ticker_table_defaults_to_empty() {
        let declaration = HoldingsDeclaration::from_json(
            r#"{ "stocks": [{ "name": "Apple", "purchase_price": 1, "amount": 1 }] }"#,
        )
        .unwrap();
        assert!(declaration.tickers.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = HoldingsDeclaration::from_json(
            r#"{ "stocks": [{ "name": "Apple", "purchase_price": -1, "amount": 1 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_amount_is_parse_error() {
        let err = HoldingsDeclaration::from_json(
            r#"{ "stocks": [{ "name": "Apple", "purchase_price": 1, "amount": -2 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::Json(_))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = HoldingsDeclaration::from_json(
            r#"{ "stocks": [{ "name": " ", "purchase_price": 1, "amount": 1 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let declaration = HoldingsDeclaration::from_path(file.path()).unwrap();
        assert_eq!(declaration.lots.len(), 3);
    }

    #[test]
    fn test_from_path_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = HoldingsDeclaration::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
