//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Explicit provider configuration (`ProviderConfig`)
//! - The Yahoo Finance implementation

mod config;
mod traits;

pub mod yahoo;

// Re-exports
pub use config::ProviderConfig;
pub use traits::MarketDataProvider;
