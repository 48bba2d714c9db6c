//! Battle resolution - element advantage relation and scaled-power comparison

mod relation;
mod resolution;

pub use relation::element_relation;
pub use resolution::{battle, Outcome, UnresolvedBattleError};
