//! Actor storage with lookup by id and coordinate, plus the mutation API
//! (`place`, `move_to`, `remove`) the rules use to change the world.

use super::actor::ActorState;
use super::common::{EntityId, Position};
use super::error::StateError;

/// All actors in play: the player plus every non-player actor.
///
/// NPCs keep insertion order; turn passes sort by [`EntityId`] so iteration
/// order never depends on removal history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: Vec<ActorState>,
}

impl EntitiesState {
    pub fn new(player: ActorState) -> Self {
        Self {
            player,
            npcs: Vec::new(),
        }
    }

    pub fn player(&self) -> &ActorState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut ActorState {
        &mut self.player
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if id == self.player.id {
            return Some(&self.player);
        }
        self.npcs.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if id == self.player.id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// Iterates over every actor, player first.
    pub fn iter(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    /// Ids of living non-player actors, sorted ascending.
    pub fn living_npc_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .npcs
            .iter()
            .filter(|actor| actor.is_alive())
            .map(|actor| actor.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the first movement-blocking entity standing on `position`.
    pub fn blocking_at(&self, position: Position) -> Option<&ActorState> {
        self.iter()
            .find(|actor| actor.blocks_movement && actor.position == position)
    }

    /// Returns the living actor standing on `position`.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.iter()
            .find(|actor| actor.is_alive() && actor.position == position)
    }

    /// Adds a non-player actor.
    ///
    /// # Errors
    ///
    /// Returns `StateError::DuplicateEntity` if the id is already in use.
    pub fn spawn(&mut self, actor: ActorState) -> Result<(), StateError> {
        if self.actor(actor.id).is_some() {
            return Err(StateError::DuplicateEntity(actor.id));
        }
        self.npcs.push(actor);
        Ok(())
    }

    /// Teleports an actor to `position` without any walkability checks.
    pub fn place(&mut self, id: EntityId, position: Position) -> Result<(), StateError> {
        let actor = self
            .actor_mut(id)
            .ok_or(StateError::EntityNotFound(id))?;
        actor.position = position;
        Ok(())
    }

    /// Removes a non-player actor from play and returns it.
    ///
    /// # Errors
    ///
    /// The player cannot be removed; unknown ids are reported as not found.
    pub fn remove(&mut self, id: EntityId) -> Result<ActorState, StateError> {
        if id == self.player.id {
            return Err(StateError::CannotRemovePlayer);
        }
        let index = self
            .npcs
            .iter()
            .position(|actor| actor.id == id)
            .ok_or(StateError::EntityNotFound(id))?;
        Ok(self.npcs.remove(index))
    }

    /// Next free id for spawning.
    pub fn next_id(&self) -> EntityId {
        let max = self.iter().map(|actor| actor.id.0).max().unwrap_or(0);
        EntityId(max + 1)
    }
}
