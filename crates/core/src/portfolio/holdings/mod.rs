pub mod holdings_model;
pub mod position_builder;


pub use holdings_model::*;
pub use position_builder::{BuildOutcome, PositionBuilder};
