//! The element advantage table

use crate::types::Element;

/// Advantage of element `a` over element `b`
///
/// Returns a signed tier in `{-2, -1, 0, 1, 2}`:
/// - `-2` / `2`: dominated by / dominates a wildcard matchup
/// - `-1` / `1`: weak / strong within the Red/Green/Blue cycle, or the
///   one-sided Light-beats-Dark order
/// - `0`: neutral (same element, or same-side wildcard pair)
///
/// The arms are checked in order: cycle rules first, then wildcard
/// dominance, then Light vs Dark, so a pair like `(Dark, Dark)` falls
/// through to the neutral default rather than matching a dominance rule.
pub fn element_relation(a: Element, b: Element) -> i8 {
    use Element::{Blue, Dark, Green, Light, Red};

    match (a, b) {
        (Blue, Green) | (Green, Red) | (Red, Blue) => -1,
        (Green, Blue) | (Red, Green) | (Blue, Red) => 1,
        (Dark | Light, Red | Green | Blue) => 2,
        (Red | Green | Blue, Dark | Light) => -2,
        (Light, Dark) => 1,
        (Dark, Light) => -1,
        _ => 0,
    }
}
