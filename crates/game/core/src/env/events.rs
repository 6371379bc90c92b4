//! Narrated events produced by the rules.
//!
//! The core never formats UI. It emits [`GameEvent`] values whose `Display`
//! is the plain message text; the sink decides where they go.

use crate::state::EntityId;

/// Something noteworthy that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    Attacked {
        attacker: EntityId,
        attacker_name: String,
        target: EntityId,
        target_name: String,
        damage: i32,
        empowered: bool,
    },
    Died {
        actor: EntityId,
        name: String,
    },
    Hooked {
        actor: EntityId,
        name: String,
    },
    GotAway {
        actor: EntityId,
        name: String,
    },
    LineReeled,
    Resisted {
        actor: EntityId,
    },
    Exhausted {
        actor: EntityId,
        fatigue: i32,
    },
    FoughtBack {
        actor: EntityId,
    },
    HookSetDeeper {
        actor: EntityId,
    },
    SlippedHook {
        actor: EntityId,
        name: String,
    },
    Caught {
        actor: EntityId,
        name: String,
    },
    Released {
        actor: EntityId,
    },
    LostHook,
    Frightened {
        actor: EntityId,
        name: String,
    },
    CalmedDown {
        actor: EntityId,
        name: String,
    },
}

impl core::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameEvent::Attacked {
                attacker_name,
                target_name,
                damage,
                empowered,
                ..
            } => {
                if *damage > 0 {
                    write!(f, "{attacker_name} attacks {target_name} for {damage} hit points.")?;
                    if *empowered {
                        write!(f, " An empowered blow!")?;
                    }
                    Ok(())
                } else {
                    write!(f, "{attacker_name} attacks {target_name} but does no damage.")
                }
            }
            GameEvent::Died { name, .. } => write!(f, "{name} is dead!"),
            GameEvent::Hooked { name, .. } => write!(f, "You hook a {name}!"),
            GameEvent::GotAway { name, .. } => write!(f, "The {name} got away!"),
            GameEvent::LineReeled => write!(f, "You reel in your line."),
            GameEvent::Resisted { .. } => write!(f, "It resists."),
            GameEvent::Exhausted { fatigue, .. } => {
                write!(f, "You play the line. The fish tires ({fatigue}/100).")
            }
            GameEvent::FoughtBack { .. } => write!(f, "It fights back!"),
            GameEvent::HookSetDeeper { .. } => write!(f, "The hook sets deeper."),
            GameEvent::SlippedHook { name, .. } => write!(f, "The {name} slips the hook!"),
            GameEvent::Caught { name, .. } => write!(f, "You caught the {name}!"),
            GameEvent::Released { .. } => write!(f, "You release the fish from your hook."),
            GameEvent::LostHook => write!(f, "You lose your hook as you move."),
            GameEvent::Frightened { name, .. } => write!(f, "You've frightened the {name}!"),
            GameEvent::CalmedDown { name, .. } => write!(f, "The {name} is no longer scared."),
        }
    }
}

/// Destination for narrated events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
