//! Creature - An immutable combatant with bounded stats and derived power

use crate::range::{self, InvalidRangeError, StatRange};
use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which stat failed range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Defense,
    Speed,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
        };
        f.write_str(name)
    }
}

/// A stat outside the bounds active at construction time
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{stat} value ({value}) must lie within {min} - {max}")]
pub struct OutOfRangeError {
    pub stat: Stat,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

/// A named, elemental combatant
///
/// Stats are validated once, at construction, against a snapshot of the
/// bounds in effect at that moment; the creature is immutable afterwards,
/// so `power == attack + defense + speed` holds for its entire lifetime.
/// Creatures are plain values with no identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    element: Element,
    attack: i32,
    defense: i32,
    speed: i32,
    power: i64,
}

/// Plain serializable mapping of a creature's fields
///
/// The element appears as its symbolic name and the derived `power` total
/// is included. Field order is the canonical JSON order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    pub element: Element,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub power: i64,
}

impl Creature {
    /// Create a creature, validating each stat against the process-wide
    /// active range
    ///
    /// Reports the first stat that falls outside the bounds. The range is
    /// snapshotted at call time; later calls to [`Creature::set_range`] do
    /// not affect creatures that already exist.
    pub fn new(
        name: impl Into<String>,
        element: Element,
        attack: i32,
        defense: i32,
        speed: i32,
    ) -> Result<Creature, OutOfRangeError> {
        Creature::with_range(name, element, attack, defense, speed, &range::active())
    }

    /// Create a creature validated against an explicit range, bypassing the
    /// process-wide configuration
    pub fn with_range(
        name: impl Into<String>,
        element: Element,
        attack: i32,
        defense: i32,
        speed: i32,
        range: &StatRange,
    ) -> Result<Creature, OutOfRangeError> {
        for (stat, value) in [
            (Stat::Attack, attack),
            (Stat::Defense, defense),
            (Stat::Speed, speed),
        ] {
            if !range.contains(value) {
                return Err(OutOfRangeError {
                    stat,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        Ok(Creature {
            name: name.into(),
            element,
            attack,
            defense,
            speed,
            // i64 so the sum cannot overflow at extreme bounds
            power: i64::from(attack) + i64::from(defense) + i64::from(speed),
        })
    }

    /// Replace the process-wide range used by [`Creature::new`]
    ///
    /// Previously constructed creatures are not re-validated.
    pub fn set_range(max: i32, min: i32) -> Result<(), InvalidRangeError> {
        range::set_active(StatRange::new(max, min)?);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Total of the three stats, fixed at construction
    pub fn power(&self) -> i64 {
        self.power
    }

    /// Produce the plain record form of this creature
    pub fn to_record(&self) -> CreatureRecord {
        CreatureRecord {
            name: self.name.clone(),
            element: self.element,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            power: self.power,
        }
    }

    /// Encode this creature as canonical JSON
    ///
    /// Keys appear in record order: name, element, attack, defense, speed,
    /// power.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }
}
