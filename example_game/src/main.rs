//! Example Game - builds a small roster and resolves every pairwise battle
//!
//! Stat bounds come from `range.toml` next to the working directory when it
//! exists; otherwise the demo tightens the floor to 10 itself.

use battle_core::{battle, config, Creature, Element, Outcome};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = Path::new("range.toml");
    if config_path.exists() {
        let range = config::load_range(config_path)?;
        Creature::set_range(range.max, range.min)?;
    } else {
        Creature::set_range(100, 10)?;
    }

    let roster = vec![
        Creature::new("Dragonoid", Element::Red, 80, 60, 70)?,
        Creature::new("Pegatrix", Element::Blue, 60, 50, 60)?,
        Creature::new("Trox", Element::Green, 80, 80, 50)?,
        Creature::new("Cyber Dragon", Element::Red, 90, 90, 90)?,
    ];

    print_roster(&roster);

    println!("Battles:");
    for (i, a) in roster.iter().enumerate() {
        for b in &roster[i + 1..] {
            let verdict = match battle(a, b)? {
                Outcome::Win => format!("{} wins", a.name()),
                Outcome::Loss => format!("{} wins", b.name()),
                Outcome::Draw => "draw".to_string(),
            };
            println!("  {} vs {} -> {}", a.name(), b.name(), verdict);
        }
    }

    Ok(())
}

/// Aligned stat table, one row per creature
fn print_roster(roster: &[Creature]) {
    let name_width = roster
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0)
        .max("name".len());

    println!(
        "{:<name_width$}  {:<7}  {:>6}  {:>7}  {:>5}  {:>5}",
        "name", "element", "attack", "defense", "speed", "power"
    );
    for creature in roster {
        println!(
            "{:<name_width$}  {:<7}  {:>6}  {:>7}  {:>5}  {:>5}",
            creature.name(),
            creature.element(),
            creature.attack(),
            creature.defense(),
            creature.speed(),
            creature.power()
        );
    }
    println!();
}
