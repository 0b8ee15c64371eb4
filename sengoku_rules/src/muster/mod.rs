//! Muster rules: how new characters are provisioned and provinces filled.
//!
//! Covers attribute rolls, family-name allocation, the three construction
//! recipes (player, hatamoto, AI rival), and province enrollment. None of
//! these operations fail for game-state reasons; a dried-up name pool and a
//! missing baseline entry are degraded outcomes, not errors.

mod attributes;
mod enrollment;
mod factory;
mod names;

pub use attributes::*;
pub use enrollment::*;
pub use factory::*;
pub use names::*;
