//! battle_core - Deterministic battle resolution for elemental creatures
//!
//! This library provides:
//! - Creature: An immutable combatant with bounded stats and a derived power total
//! - StatRange: The inclusive bounds every stat is validated against
//! - Element relation: The 5x5 advantage table between creature elements
//! - Battle resolution: Scaled-power comparison deciding a pairwise contest

pub mod battle;
pub mod config;
pub mod creature;
pub mod range;
pub mod types;

// Re-export core types for convenience
pub use battle::{battle, element_relation, Outcome, UnresolvedBattleError};
pub use config::{ConfigError, RangeConfig};
pub use creature::{Creature, CreatureRecord, OutOfRangeError, Stat};
pub use range::{InvalidRangeError, StatRange};
pub use types::Element;
