//! Runtime names for the character variants.

use std::io::Write;

use crate::{AttackError, Mage, Thief, Warrior, trigger_attack_ref};

/// Character class, one per concrete variant.
///
/// Dispatching through a class is still static: each `match` arm calls a
/// different monomorphized helper.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterClass {
    /// Sword fighter
    Warrior,
    /// Spellcaster
    Mage,
    /// Stealth attacker
    Thief,
}

impl CharacterClass {
    /// Every class in declaration order.
    pub const ALL: [CharacterClass; 3] = [Self::Warrior, Self::Mage, Self::Thief];

    /// Builds a fresh character of this class and triggers its attack.
    pub fn perform_attack<W: Write + ?Sized>(self, out: &mut W) -> Result<(), AttackError> {
        match self {
            Self::Warrior => trigger_attack_ref(&mut Warrior, out),
            Self::Mage => trigger_attack_ref(&mut Mage, out),
            Self::Thief => trigger_attack_ref(&mut Thief, out),
        }
    }
}
