//! Core types specific to battle_core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element of a creature, determining its advantage relation in battle
///
/// Red, Green and Blue form a rock-paper-scissors cycle; Dark and Light are
/// wildcards that dominate the cycle and carry their own one-sided order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Element {
    Red,
    Green,
    Blue,
    Dark,
    Light,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Red,
            Element::Green,
            Element::Blue,
            Element::Dark,
            Element::Light,
        ]
    }

    /// Whether this element is one of the wildcards that dominate the
    /// Red/Green/Blue cycle
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Element::Dark | Element::Light)
    }

    /// The symbolic upper-case name, as rendered in records and JSON
    pub fn name(&self) -> &'static str {
        match self {
            Element::Red => "RED",
            Element::Green => "GREEN",
            Element::Blue => "BLUE",
            Element::Dark => "DARK",
            Element::Light => "LIGHT",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
