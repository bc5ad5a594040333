use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DOMESTIC_SUFFIXES, DEFAULT_FOREIGN_CURRENCY, DEFAULT_LOOKBACK_DAYS,
    DEFAULT_MAX_FALLBACK_STEPS, DEFAULT_REPORTING_CURRENCY,
};
use crate::errors::{Error, Result};
use crate::portfolio::valuation::TrendBasis;

/// Settings for one report run, passed explicitly to the report service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    /// Identifier suffixes (e.g. ".KS") that classify a holding as domestic.
    pub domestic_suffixes: Vec<String>,
    /// Currency all totals are expressed in; also the domestic native currency.
    pub reporting_currency: String,
    /// Native currency of foreign holdings.
    pub foreign_currency: String,
    /// Bound on how far a price lookup steps back past empty sessions.
    pub max_fallback_steps: usize,
    /// Calendar days of history requested from the provider.
    pub lookback_days: i64,
    pub trend_basis: TrendBasis,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            domestic_suffixes: DEFAULT_DOMESTIC_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reporting_currency: DEFAULT_REPORTING_CURRENCY.to_string(),
            foreign_currency: DEFAULT_FOREIGN_CURRENCY.to_string(),
            max_fallback_steps: DEFAULT_MAX_FALLBACK_STEPS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            trend_basis: TrendBasis::default(),
        }
    }
}

impl ReportSettings {
    /// Rejects settings no report run could work with.
    pub fn validate(&self) -> Result<()> {
        if self.domestic_suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::InvalidConfigValue(
                "domestic suffixes must not be empty strings".to_string(),
            ));
        }
        if self.reporting_currency.trim().is_empty() || self.foreign_currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "reporting and foreign currency codes are required".to_string(),
            ));
        }
        if self.reporting_currency.eq_ignore_ascii_case(&self.foreign_currency) {
            return Err(Error::InvalidConfigValue(format!(
                "foreign currency must differ from reporting currency {}",
                self.reporting_currency
            )));
        }
        if self.lookback_days < 2 {
            return Err(Error::InvalidConfigValue(format!(
                "lookback must cover at least 2 days, got {}",
                self.lookback_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = ReportSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.domestic_suffixes, vec![".KS", ".KQ"]);
        assert_eq!(settings.reporting_currency, "KRW");
        assert_eq!(settings.foreign_currency, "USD");
    }

    #[test]
    fn test_same_currencies_rejected() {
        let settings = ReportSettings {
            foreign_currency: "krw".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_blank_suffix_rejected() {
        let settings = ReportSettings {
            domestic_suffixes: vec![".KS".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
