use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

use super::report_model::PortfolioReport;
use crate::declarations::HoldingsDeclaration;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::portfolio::holdings::{HoldingView, PositionBuilder, SkipReason};
use crate::portfolio::valuation::ValuationEngine;
use crate::quotes::{PriceLookup, PriceSnapshot, QuoteServiceTrait};
use crate::resolver::IdentifierResolver;
use crate::settings::ReportSettings;

#[async_trait]
pub trait PortfolioReportServiceTrait: Send + Sync {
    /// Runs one full valuation of the declared holdings.
    async fn generate(&self, declaration: &HoldingsDeclaration) -> Result<PortfolioReport>;
}

/// Drives a report run: resolve, fetch, look up prices, build both holding
/// views and value them per market.
pub struct PortfolioReportService {
    quote_service: Arc<dyn QuoteServiceTrait>,
    fx_service: Arc<dyn FxServiceTrait>,
    settings: ReportSettings,
}

impl PortfolioReportService {
    pub fn new(
        quote_service: Arc<dyn QuoteServiceTrait>,
        fx_service: Arc<dyn FxServiceTrait>,
        settings: ReportSettings,
    ) -> Self {
        Self {
            quote_service,
            fx_service,
            settings,
        }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Distinct identifiers of every resolvable name, in declaration order.
    fn identifiers_to_fetch(
        resolver: &IdentifierResolver,
        declaration: &HoldingsDeclaration,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        declaration
            .display_names()
            .into_iter()
            .filter_map(|name| resolver.resolve(name).ok())
            .map(|instrument| instrument.identifier)
            .filter(|identifier| seen.insert(identifier.clone()))
            .collect()
    }
}

#[async_trait]
impl PortfolioReportServiceTrait for PortfolioReportService {
    async fn generate(&self, declaration: &HoldingsDeclaration) -> Result<PortfolioReport> {
        self.settings.validate()?;
        declaration.validate()?;

        let resolver = IdentifierResolver::new(
            declaration.tickers.clone(),
            &self.settings.domestic_suffixes,
        );
        let identifiers = Self::identifiers_to_fetch(&resolver, declaration);
        debug!(
            "Generating report for {} lot(s), {} identifier(s)",
            declaration.lots.len(),
            identifiers.len()
        );

        let generated_at = Utc::now();
        let series = self
            .quote_service
            .fetch_price_series(&identifiers, generated_at)
            .await?;
        let exchange_rate = self.fx_service.get_exchange_rate().await?;
        let engine = ValuationEngine::new(exchange_rate, self.settings.trend_basis)?;

        let lookup = PriceLookup::new(self.settings.max_fallback_steps);
        let snapshot = PriceSnapshot::build(&identifiers, &series, &lookup);

        let builder = PositionBuilder::new(&resolver, &snapshot);
        let aggregated = builder.build_aggregated(&declaration.lots)?;
        let per_lot = builder.build_per_lot(&declaration.lots)?;

        // Both views drop the same names; report each once.
        for skipped in &aggregated.skipped {
            match &skipped.reason {
                SkipReason::UnknownName => {
                    warn!("Skipping '{}': {}", skipped.display_name, skipped.reason)
                }
                SkipReason::UnclassifiableIdentifier { identifier }
                | SkipReason::PriceUnavailable { identifier, .. } => warn!(
                    "Skipping '{}' ({}): {}",
                    skipped.display_name, identifier, skipped.reason
                ),
            }
        }

        let mut sections = engine.value_view(HoldingView::Aggregated, &aggregated.holdings);
        sections.extend(engine.value_view(HoldingView::PerLot, &per_lot.holdings));

        info!(
            "Valued {} position(s) from {} lot(s) at {}/{} {}; {} skipped",
            aggregated.holdings.len(),
            per_lot.holdings.len(),
            self.settings.foreign_currency,
            self.settings.reporting_currency,
            exchange_rate,
            aggregated.skipped.len()
        );

        Ok(PortfolioReport {
            reporting_currency: self.settings.reporting_currency.clone(),
            foreign_currency: self.settings.foreign_currency.clone(),
            exchange_rate,
            sections,
            skipped: aggregated.skipped,
            generated_at,
        })
    }
}
