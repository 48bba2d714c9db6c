//! Battle resolution - decide a pairwise contest from scaled power totals

use super::relation::element_relation;
use crate::creature::Creature;
use std::cmp::Ordering;
use thiserror::Error;

/// Relation tier outside the multiplier table
///
/// Unreachable while the relation table covers every element pair; raised
/// only if the table and the multiplier tiers ever drift apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no multiplier tier for relation value {relation}")]
pub struct UnresolvedBattleError {
    pub relation: i8,
}

/// Result of a battle, from the perspective of the first creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    /// Signed form: -1 for a loss, 0 for a draw, 1 for a win
    pub fn signum(self) -> i8 {
        match self {
            Outcome::Loss => -1,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Draw,
            Ordering::Greater => Outcome::Win,
        }
    }
}

/// Resolve a battle between two creatures
///
/// The element relation picks a multiplier for each side's power total and
/// the scaled totals are compared. The tilt is an edge, not a guarantee: a
/// large enough raw power gap outweighs any multiplier pair.
pub fn battle(a: &Creature, b: &Creature) -> Result<Outcome, UnresolvedBattleError> {
    let relation = element_relation(a.element(), b.element());

    let (mult_a, mult_b) = match relation {
        -2 => (0.8, 1.2),
        -1 => (0.9, 1.1),
        0 => (1.0, 1.0),
        1 => (1.1, 0.9),
        2 => (1.2, 0.8),
        other => return Err(UnresolvedBattleError { relation: other }),
    };

    let scaled_a = a.power() as f64 * mult_a;
    let scaled_b = b.power() as f64 * mult_b;
    // Scaled products of finite integers are never NaN
    Ok(Outcome::from(scaled_a.total_cmp(&scaled_b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::StatRange;
    use crate::types::Element;
    use proptest::prelude::*;

    fn creature(element: Element, attack: i32, defense: i32, speed: i32) -> Creature {
        Creature::with_range("Test", element, attack, defense, speed, &StatRange::default())
            .unwrap()
    }

    #[test]
    fn test_advantaged_side_wins() {
        let a = creature(Element::Red, 60, 50, 40);
        let b = creature(Element::Green, 50, 40, 30);
        assert_eq!(battle(&a, &b).unwrap(), Outcome::Win);
    }

    #[test]
    fn test_advantage_overwhelmed_by_power_gap() {
        // Red is strong against Green, but 90 * 1.1 < 150 * 0.9
        let a = creature(Element::Red, 40, 30, 20);
        let b = creature(Element::Green, 60, 50, 40);
        assert_eq!(battle(&a, &b).unwrap(), Outcome::Loss);
    }

    #[test]
    fn test_light_beats_dark_tier() {
        let a = creature(Element::Light, 60, 50, 40);
        let b = creature(Element::Dark, 50, 40, 30);
        assert_eq!(battle(&a, &b).unwrap(), Outcome::Win);
    }

    #[test]
    fn test_wildcard_dominates_cycle() {
        // Equal power: the 1.2 vs 0.8 tier alone decides it
        let a = creature(Element::Dark, 50, 40, 30);
        let b = creature(Element::Blue, 50, 40, 30);
        assert_eq!(battle(&a, &b).unwrap(), Outcome::Win);
        assert_eq!(battle(&b, &a).unwrap(), Outcome::Loss);
    }

    #[test]
    fn test_neutral_equal_power_draws() {
        let a = creature(Element::Red, 50, 40, 30);
        let b = creature(Element::Red, 30, 40, 50);
        assert_eq!(battle(&a, &b).unwrap(), Outcome::Draw);
    }

    #[test]
    fn test_outcome_signum() {
        assert_eq!(Outcome::Loss.signum(), -1);
        assert_eq!(Outcome::Draw.signum(), 0);
        assert_eq!(Outcome::Win.signum(), 1);
    }

    #[test]
    fn test_unresolved_error_display() {
        let err = UnresolvedBattleError { relation: 3 };
        assert_eq!(err.to_string(), "no multiplier tier for relation value 3");
    }

    fn any_element() -> impl Strategy<Value = Element> {
        prop::sample::select(Element::all().to_vec())
    }

    proptest! {
        /// Swapping the combatants swaps the multiplier assignment, so the
        /// outcome sign always flips (the same two scaled products are
        /// compared in the other direction).
        #[test]
        fn test_battle_is_antisymmetric(
            ea in any_element(),
            eb in any_element(),
            sa in prop::array::uniform3(0..=100i32),
            sb in prop::array::uniform3(0..=100i32),
        ) {
            let a = creature(ea, sa[0], sa[1], sa[2]);
            let b = creature(eb, sb[0], sb[1], sb[2]);
            prop_assert_eq!(
                battle(&a, &b).unwrap().signum(),
                -battle(&b, &a).unwrap().signum()
            );
        }
    }
}
