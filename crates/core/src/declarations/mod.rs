//! Holdings declaration - the user's list of purchase lots and the
//! name→identifier mapping table.

mod declarations_model;

pub use declarations_model::{DeclaredLot, HoldingsDeclaration};
