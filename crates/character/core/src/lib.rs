//! Statically dispatched character attacks.
//!
//! `character-core` shows compile-time polymorphism with no vtable involved.
//! A [`Character`] exposes one common operation, [`Character::perform_attack`],
//! which forwards to the concrete type's own [`Character::execute_attack`].
//! The call target is picked by monomorphization.
//!
//! # Architecture
//!
//! - [`Character`]: Common interface with the forwarding operation
//! - Concrete variants: [`Warrior`], [`Mage`], [`Thief`]
//! - Invocation helpers: [`trigger_attack_ref`], [`trigger_attack_ptr`]
//! - [`CharacterClass`]: Runtime name for each variant, dispatched by `match`
pub mod character;
pub mod class;
pub mod error;
pub mod kinds;
pub mod trigger;

pub use character::Character;
pub use class::CharacterClass;
pub use error::AttackError;
pub use kinds::{Mage, Thief, Warrior};
pub use trigger::{trigger_attack_ptr, trigger_attack_ref};
