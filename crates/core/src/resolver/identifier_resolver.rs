use std::collections::HashMap;
use std::fmt;

use super::Market;

/// Classifies an identifier by its exchange suffix.
///
/// Domestic when the identifier ends with one of `domestic_suffixes`
/// (case-insensitive), foreign otherwise. Blank identifiers and identifiers
/// containing whitespace cannot be classified.
pub fn classify_market<S: AsRef<str>>(identifier: &str, domestic_suffixes: &[S]) -> Option<Market> {
    if identifier.is_empty() || identifier.chars().any(char::is_whitespace) {
        return None;
    }
    let upper = identifier.to_uppercase();
    let domestic = domestic_suffixes
        .iter()
        .any(|suffix| upper.ends_with(&suffix.as_ref().to_uppercase()));
    Some(if domestic {
        Market::Domestic
    } else {
        Market::Foreign
    })
}

/// A display name successfully mapped to an identifier and market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstrument {
    pub identifier: String,
    pub market: Market,
}

/// Why a display name could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The name is missing from the ticker table.
    UnknownName,
    /// The mapped identifier has no recognizable market.
    UnclassifiableIdentifier(String),
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionFailure::UnknownName => write!(f, "no ticker configured"),
            ResolutionFailure::UnclassifiableIdentifier(identifier) => {
                write!(f, "market for identifier '{}' is not recognized", identifier)
            }
        }
    }
}

/// Maps display names to market identifiers using the declaration's ticker
/// table and classifies them by exchange suffix.
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    tickers: HashMap<String, String>,
    domestic_suffixes: Vec<String>,
}

impl IdentifierResolver {
    pub fn new(tickers: HashMap<String, String>, domestic_suffixes: &[String]) -> Self {
        Self {
            tickers,
            domestic_suffixes: domestic_suffixes.iter().map(|s| s.to_uppercase()).collect(),
        }
    }

    /// The configured identifier for a display name.
    pub fn identifier_for(&self, display_name: &str) -> Option<&str> {
        self.tickers
            .get(display_name)
            .map(|identifier| identifier.trim())
    }

    pub fn classify(&self, identifier: &str) -> Option<Market> {
        classify_market(identifier, self.domestic_suffixes.as_slice())
    }

    /// Name → identifier → market in one step.
    pub fn resolve(&self, display_name: &str) -> Result<ResolvedInstrument, ResolutionFailure> {
        let identifier = self
            .identifier_for(display_name)
            .ok_or(ResolutionFailure::UnknownName)?;
        let market = self
            .classify(identifier)
            .ok_or_else(|| ResolutionFailure::UnclassifiableIdentifier(identifier.to_string()))?;
        Ok(ResolvedInstrument {
            identifier: identifier.to_string(),
            market,
        })
    }
}
