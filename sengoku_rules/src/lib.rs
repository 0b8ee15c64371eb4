//! # Sengoku Rules
//!
//! The "World Bible" crate - the data model and muster rules behind the
//! session bootstrapper. This crate holds no I/O and no UI; callers own the
//! world document's persistence and the dialogs. Every randomized operation
//! takes an explicit `Rng`, so rolls are reproducible under a seeded
//! generator.

pub mod entities;
pub mod muster;
pub mod world;

pub use entities::*;
pub use muster::*;
pub use world::*;
