use serde::{Deserialize, Serialize};
use std::fmt;

/// Home market of a holding.
///
/// Domestic holdings are quoted in the reporting currency; foreign holdings
/// are converted with the run's exchange rate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Market {
    Domestic,
    Foreign,
}

impl Market {
    /// Report order: domestic first.
    pub const ALL: [Market; 2] = [Market::Domestic, Market::Foreign];

    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Domestic => "domestic",
            Market::Foreign => "foreign",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
