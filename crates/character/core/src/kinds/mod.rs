//! Concrete character variants.

mod mage;
mod thief;
mod warrior;

pub use mage::Mage;
pub use thief::Thief;
pub use warrior::Warrior;
