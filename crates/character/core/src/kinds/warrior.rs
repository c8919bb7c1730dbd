use std::io::Write;

use crate::{AttackError, Character, CharacterClass};

/// Melee fighter armed with a sword.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Warrior;

impl Warrior {
    pub const fn new() -> Self {
        Self
    }
}

impl Character for Warrior {
    const CLASS: CharacterClass = CharacterClass::Warrior;

    fn execute_attack<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), AttackError> {
        writeln!(out, "Warrior uses sword")?;
        Ok(())
    }
}
