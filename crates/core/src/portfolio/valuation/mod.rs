pub mod valuation_engine;
pub mod valuation_model;


pub use valuation_engine::ValuationEngine;
pub use valuation_model::*;
