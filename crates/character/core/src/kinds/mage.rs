use std::io::Write;

use crate::{AttackError, Character, CharacterClass};

/// Spellcaster attacking with magic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mage;

impl Mage {
    pub const fn new() -> Self {
        Self
    }
}

impl Character for Mage {
    const CLASS: CharacterClass = CharacterClass::Mage;

    fn execute_attack<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), AttackError> {
        writeln!(out, "Mage uses magic spell")?;
        Ok(())
    }
}
