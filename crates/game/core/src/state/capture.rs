use super::common::EntityId;

/// Pairing between a hooking actor and the actor on its line.
///
/// At most one link exists per world. While it exists, the hooked actor's
/// behavior is `Hooked`, and no other actor's is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureLink {
    pub hooker: EntityId,
    pub hooked: EntityId,
}

impl CaptureLink {
    pub const fn new(hooker: EntityId, hooked: EntityId) -> Self {
        Self { hooker, hooked }
    }
}
