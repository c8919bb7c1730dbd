//! The common character interface.
//!
//! [`Character`] plays the role of a base template bound to its own variant:
//! the provided [`Character::perform_attack`] is compiled once per implementor
//! and calls that implementor's [`Character::execute_attack`] directly.

use std::io::Write;

use crate::{AttackError, CharacterClass};

/// A character that can attack.
///
/// Both methods are generic over the writer, so the trait is not object safe
/// and every call is resolved at compile time.
pub trait Character {
    /// Runtime name of this variant, used for diagnostics and the roster.
    const CLASS: CharacterClass;

    /// Variant-specific attack. Writes exactly one line to `out`.
    fn execute_attack<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), AttackError>;

    /// Performs this character's attack.
    ///
    /// Forwards to [`Character::execute_attack`] on `Self`.
    #[inline]
    fn perform_attack<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), AttackError> {
        tracing::trace!(class = %Self::CLASS, "performing attack");
        self.execute_attack(out)
    }
}
