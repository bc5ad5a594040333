use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resolver::Market;

/// Which construction of the holdings list a row belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HoldingView {
    /// Lots sharing a display name merged into one weighted-average position.
    Aggregated,
    /// One holding per declared purchase lot.
    PerLot,
}

impl fmt::Display for HoldingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoldingView::Aggregated => f.write_str("aggregated"),
            HoldingView::PerLot => f.write_str("per-lot"),
        }
    }
}

/// One valued position: a single purchase lot or a merged group of lots.
///
/// Prices are in the instrument's native currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub identifier: String,
    pub display_name: String,
    pub market: Market,
    /// Per-unit cost; weighted average across lots for a merged position.
    pub purchase_price: Decimal,
    pub quantity: u64,
    pub current_price: Decimal,
    pub previous_price: Decimal,
    /// Sum of `purchase_price × quantity` over the holding's lots.
    pub total_cost: Decimal,
}

impl Holding {
    pub fn quantity_decimal(&self) -> Decimal {
        Decimal::from(self.quantity)
    }
}

/// Why a declared holding was left out of the report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// Display name missing from the ticker table.
    UnknownName,
    /// The mapped identifier has no recognizable market.
    UnclassifiableIdentifier { identifier: String },
    /// No current/previous price could be selected from the history.
    PriceUnavailable { identifier: String, message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownName => write!(f, "no ticker configured"),
            SkipReason::UnclassifiableIdentifier { identifier } => {
                write!(f, "market for '{}' is not recognized", identifier)
            }
            SkipReason::PriceUnavailable { message, .. } => {
                write!(f, "price unavailable ({})", message)
            }
        }
    }
}

/// A declared holding that was dropped with a diagnostic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedHolding {
    pub display_name: String,
    pub reason: SkipReason,
}
