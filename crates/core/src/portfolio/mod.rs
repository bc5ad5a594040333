pub mod holdings;
pub mod report;
pub mod valuation;

pub use holdings::*;
pub use report::*;
pub use valuation::*;
