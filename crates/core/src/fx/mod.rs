//! FX (Foreign Exchange) module - the single foreign→reporting rate of a run.

mod fx_errors;
mod fx_service;

pub use fx_errors::FxError;
pub use fx_service::{FxService, FxServiceTrait};
