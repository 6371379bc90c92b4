//! Runtime orchestration for the angling simulation.
//!
//! This crate supplies the concrete collaborators `angler-core` consumes and
//! drives turns through a [`Session`]:
//! - [`oracle`] hosts the grid map with field of view and RNG seeding
//! - [`events`] forwards narrated events to `tracing` and keeps the log
//! - [`session`] owns the state and runs one player action plus one NPC pass
//!   per [`Session::step`]
pub mod error;
pub mod events;
pub mod oracle;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::TracingSink;
pub use oracle::{GridMap, seeded_rng};
pub use session::{Session, SessionBuilder};
