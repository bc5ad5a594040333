use std::collections::{HashMap, HashSet};

use log::debug;
use rust_decimal::Decimal;

use super::holdings_model::{Holding, SkipReason, SkippedHolding};
use crate::declarations::DeclaredLot;
use crate::errors::{CalculatorError, Result, ValidationError};
use crate::quotes::{PriceSnapshot, SessionPrices};
use crate::resolver::{IdentifierResolver, ResolutionFailure, ResolvedInstrument};

/// Holdings built for one view plus the declared names that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOutcome {
    pub holdings: Vec<Holding>,
    pub skipped: Vec<SkippedHolding>,
}

impl BuildOutcome {
    fn skip(&mut self, display_name: &str, reason: SkipReason) {
        debug!("Skipping holding '{}': {}", display_name, reason);
        self.skipped.push(SkippedHolding {
            display_name: display_name.to_string(),
            reason,
        });
    }
}

/// Running totals for one display name while its lots are folded in.
struct PositionAccumulator {
    display_name: String,
    instrument: ResolvedInstrument,
    prices: SessionPrices,
    quantity: u64,
    total_cost: Decimal,
}

impl PositionAccumulator {
    fn new(display_name: &str, instrument: ResolvedInstrument, prices: SessionPrices) -> Self {
        Self {
            display_name: display_name.to_string(),
            instrument,
            prices,
            quantity: 0,
            total_cost: Decimal::ZERO,
        }
    }

    fn add_lot(&mut self, lot: &DeclaredLot) -> Result<()> {
        self.quantity = self.quantity.checked_add(lot.amount).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Total amount of '{}' overflows",
                self.display_name
            ))
        })?;
        self.total_cost += lot.purchase_price * Decimal::from(lot.amount);
        Ok(())
    }

    /// Derives the weighted-average purchase price once, from the exact sums.
    fn finalize(self) -> Result<Holding> {
        if self.quantity == 0 {
            return Err(CalculatorError::ZeroQuantity {
                display_name: self.display_name,
            }
            .into());
        }
        Ok(Holding {
            purchase_price: self.total_cost / Decimal::from(self.quantity),
            identifier: self.instrument.identifier,
            display_name: self.display_name,
            market: self.instrument.market,
            quantity: self.quantity,
            current_price: self.prices.current,
            previous_price: self.prices.previous,
            total_cost: self.total_cost,
        })
    }
}

/// Builds the per-lot and aggregated holding views from declared lots,
/// resolving names and pricing identifiers against one shared snapshot.
pub struct PositionBuilder<'a> {
    resolver: &'a IdentifierResolver,
    snapshot: &'a PriceSnapshot,
}

impl<'a> PositionBuilder<'a> {
    pub fn new(resolver: &'a IdentifierResolver, snapshot: &'a PriceSnapshot) -> Self {
        Self { resolver, snapshot }
    }

    fn locate(
        &self,
        display_name: &str,
    ) -> std::result::Result<(ResolvedInstrument, SessionPrices), SkipReason> {
        let instrument = self
            .resolver
            .resolve(display_name)
            .map_err(|failure| match failure {
                ResolutionFailure::UnknownName => SkipReason::UnknownName,
                ResolutionFailure::UnclassifiableIdentifier(identifier) => {
                    SkipReason::UnclassifiableIdentifier { identifier }
                }
            })?;
        let prices = self
            .snapshot
            .get(&instrument.identifier)
            .map_err(|e| SkipReason::PriceUnavailable {
                identifier: instrument.identifier.clone(),
                message: e.to_string(),
            })?;
        Ok((instrument, prices))
    }

    /// One holding per declared lot, in declaration order.
    ///
    /// A name that cannot be resolved or priced is reported once in
    /// `skipped`; all of its lots are dropped.
    pub fn build_per_lot(&self, lots: &[DeclaredLot]) -> Result<BuildOutcome> {
        let mut outcome = BuildOutcome::default();
        let mut dropped: HashSet<&str> = HashSet::new();

        for lot in lots {
            if dropped.contains(lot.name.as_str()) {
                continue;
            }
            let (instrument, prices) = match self.locate(&lot.name) {
                Ok(located) => located,
                Err(reason) => {
                    dropped.insert(lot.name.as_str());
                    outcome.skip(&lot.name, reason);
                    continue;
                }
            };

            let mut position = PositionAccumulator::new(&lot.name, instrument, prices);
            position.add_lot(lot)?;
            outcome.holdings.push(position.finalize()?);
        }

        Ok(outcome)
    }

    /// One holding per display name, in first-seen order.
    ///
    /// Quantities and costs are summed across lots; the purchase price is the
    /// weighted average `total_cost / quantity`, derived after the last lot.
    pub fn build_aggregated(&self, lots: &[DeclaredLot]) -> Result<BuildOutcome> {
        let mut outcome = BuildOutcome::default();
        let mut dropped: HashSet<&str> = HashSet::new();
        let mut order: Vec<&str> = Vec::new();
        let mut positions: HashMap<&str, PositionAccumulator> = HashMap::new();

        for lot in lots {
            let name = lot.name.as_str();
            if dropped.contains(name) {
                continue;
            }
            if let Some(position) = positions.get_mut(name) {
                position.add_lot(lot)?;
                continue;
            }
            match self.locate(name) {
                Ok((instrument, prices)) => {
                    let mut position = PositionAccumulator::new(name, instrument, prices);
                    position.add_lot(lot)?;
                    order.push(name);
                    positions.insert(name, position);
                }
                Err(reason) => {
                    dropped.insert(name);
                    outcome.skip(name, reason);
                }
            }
        }

        for name in order {
            if let Some(position) = positions.remove(name) {
                outcome.holdings.push(position.finalize()?);
            }
        }

        Ok(outcome)
    }
}
