//! Invocation helpers generic over any [`Character`].
//!
//! Neither helper knows which variant it is driving. Each is monomorphized per
//! character type and forwards straight to [`Character::perform_attack`].

use std::io::Write;
use std::ops::DerefMut;

use crate::{AttackError, Character};

/// Triggers an attack through a mutable borrow of `character`.
#[inline]
pub fn trigger_attack_ref<C, W>(character: &mut C, out: &mut W) -> Result<(), AttackError>
where
    C: Character,
    W: Write + ?Sized,
{
    character.perform_attack(out)
}

/// Triggers an attack through a pointer-like `handle` to a character.
///
/// Accepts anything that dereferences mutably to a character, such as
/// `&mut C`, `Box<C>` or `RefMut<'_, C>`. A handle can never be null.
#[inline]
pub fn trigger_attack_ptr<C, P, W>(mut handle: P, out: &mut W) -> Result<(), AttackError>
where
    C: Character,
    P: DerefMut<Target = C>,
    W: Write + ?Sized,
{
    handle.perform_attack(out)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{Mage, Thief, Warrior};

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("attack lines are utf-8")
    }

    #[test]
    fn warrior_by_reference() {
        let mut warrior = Warrior;
        let mut out = Vec::new();

        trigger_attack_ref(&mut warrior, &mut out).unwrap();

        assert_eq!(output(out), "Warrior uses sword\n");
    }

    #[test]
    fn mage_by_address() {
        let mut mage = Mage;
        let mut out = Vec::new();

        trigger_attack_ptr(&mut mage, &mut out).unwrap();

        assert_eq!(output(out), "Mage uses magic spell\n");
    }

    #[test]
    fn thief_by_reference() {
        let mut thief = Thief;
        let mut out = Vec::new();

        trigger_attack_ref(&mut thief, &mut out).unwrap();

        assert_eq!(output(out), "Thief uses stealth attack\n");
    }

    #[test]
    fn same_warrior_twice_prints_in_order() {
        let mut warrior = Warrior;
        let mut out = Vec::new();

        trigger_attack_ref(&mut warrior, &mut out).unwrap();
        trigger_attack_ref(&mut warrior, &mut out).unwrap();

        assert_eq!(output(out), "Warrior uses sword\nWarrior uses sword\n");
    }

    #[test]
    fn address_accepts_owned_and_cell_handles() {
        let mut out = Vec::new();

        trigger_attack_ptr(Box::new(Thief), &mut out).unwrap();
        let cell = RefCell::new(Mage);
        trigger_attack_ptr(cell.borrow_mut(), &mut out).unwrap();

        assert_eq!(output(out), "Thief uses stealth attack\nMage uses magic spell\n");
    }

    #[test]
    fn helpers_accept_unsized_writers() {
        let mut buf = Vec::new();
        let out: &mut dyn Write = &mut buf;

        trigger_attack_ref(&mut Warrior, out).unwrap();
        trigger_attack_ptr(&mut Mage, out).unwrap();

        assert_eq!(output(buf), "Warrior uses sword\nMage uses magic spell\n");
    }
}
