use std::io::Write;

use crate::{AttackError, Character, CharacterClass};

/// Rogue striking from the shadows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Thief;

impl Thief {
    pub const fn new() -> Self {
        Self
    }
}

impl Character for Thief {
    const CLASS: CharacterClass = CharacterClass::Thief;

    fn execute_attack<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), AttackError> {
        writeln!(out, "Thief uses stealth attack")?;
        Ok(())
    }
}
