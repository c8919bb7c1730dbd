//! Demonstration driver.

use std::io::Write;

use character_core::{AttackError, Mage, Warrior, trigger_attack_ptr, trigger_attack_ref};

/// Runs the demonstration: a warrior attacks by reference, then a mage
/// attacks by address.
pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<(), AttackError> {
    let mut warrior = Warrior::new();
    trigger_attack_ref(&mut warrior, out)?;

    let mut mage = Mage::new();
    trigger_attack_ptr(&mut mage, out)?;

    Ok(())
}
