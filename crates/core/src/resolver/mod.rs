//! Identifier resolution: display name → market identifier → market.

mod identifier_resolver;
mod market;

pub use identifier_resolver::{
    classify_market, IdentifierResolver, ResolutionFailure, ResolvedInstrument,
};
pub use market::Market;
