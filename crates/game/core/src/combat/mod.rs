//! Melee combat resolution.
//!
//! [`damage`] holds the pure formula driven by an injected RNG; [`result`]
//! applies a roll to the world, including death.

pub mod damage;
pub mod result;

pub use damage::{MeleeRoll, guaranteed_reduction, roll_melee};
pub use result::{MeleeOutcome, resolve_melee};
