//! Actor state: identity, position, fighter stats and the active behavior.

use super::behavior::BehaviorState;
use super::common::{Color, EntityId, Position};
use super::gear::Loadout;

/// Upper bound shared by the `hooked` and `fatigue` meters.
pub const METER_MAX: i32 = 100;

/// Inclusive damage range rolled by a melee attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
}

impl DamageRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Combat and angling statistics of an actor.
///
/// `fatigue` and `hooked` are meters bounded to `0..=100`. They are private so
/// every mutation goes through a clamping setter.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FighterStats {
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub base_defense: i32,
    /// Unarmed damage range.
    pub min_damage: i32,
    pub max_damage: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub dexterity: i32,
    pub constitution: i32,
    /// How hard the actor is to hook and reel in.
    pub difficulty: i32,
    /// How eagerly a neutral actor keeps its distance.
    pub avoidance: i32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_meter"))]
    fatigue: i32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_meter"))]
    hooked: i32,
    /// Remaining empowered blows; each doubles one melee roll.
    pub empowered_charges: u32,
}

/// Loaded meters go through the same clamp as every setter.
#[cfg(feature = "serde")]
fn deserialize_meter<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <i32 as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.clamp(0, METER_MAX))
}

impl FighterStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets current and maximum hp (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self.max_hp = hp;
        self
    }

    /// Sets the unarmed damage range (builder pattern).
    #[must_use]
    pub fn with_damage(mut self, min: i32, max: i32) -> Self {
        self.min_damage = min;
        self.max_damage = max;
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: i32) -> Self {
        self.base_defense = defense;
        self
    }

    #[must_use]
    pub fn with_strength(mut self, strength: i32) -> Self {
        self.strength = strength;
        self
    }

    /// Sets how hard the actor is to land (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_avoidance(mut self, avoidance: i32) -> Self {
        self.avoidance = avoidance;
        self
    }

    pub fn fatigue(&self) -> i32 {
        self.fatigue
    }

    pub fn hooked(&self) -> i32 {
        self.hooked
    }

    pub fn set_fatigue(&mut self, value: i32) {
        self.fatigue = value.clamp(0, METER_MAX);
    }

    pub fn set_hooked(&mut self, value: i32) {
        self.hooked = value.clamp(0, METER_MAX);
    }

    pub fn add_fatigue(&mut self, amount: i32) {
        self.set_fatigue(self.fatigue.saturating_add(amount));
    }

    /// Adjusts the hooked meter by `delta` and returns the clamped result.
    pub fn adjust_hooked(&mut self, delta: i32) -> i32 {
        self.set_hooked(self.hooked.saturating_add(delta));
        self.hooked
    }

    pub fn defense(&self) -> i32 {
        self.base_defense.max(0)
    }

    /// Sets fatigue (builder pattern).
    #[must_use]
    pub fn with_fatigue(mut self, value: i32) -> Self {
        self.set_fatigue(value);
        self
    }

    /// Sets the hooked meter (builder pattern).
    #[must_use]
    pub fn with_hooked(mut self, value: i32) -> Self {
        self.set_hooked(value);
        self
    }
}

/// A living or dead actor on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    /// Template identifier the actor was spawned from (e.g. `"goldfish"`).
    pub kind: String,
    pub name: String,
    pub position: Position,
    pub color: Color,
    pub blocks_movement: bool,
    pub stats: FighterStats,
    /// Equipped weapon damage; unarmed range from `stats` when `None`.
    pub weapon: Option<DamageRange>,
    pub loadout: Loadout,
    /// `None` once the actor is dead or removed from play.
    pub behavior: Option<BehaviorState>,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        kind: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        stats: FighterStats,
        behavior: BehaviorState,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            name: name.into(),
            position,
            color: Color::WHITE,
            blocks_movement: true,
            stats,
            weapon: None,
            loadout: Loadout::default(),
            behavior: Some(behavior),
        }
    }

    /// Sets the display color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Equips a weapon damage range (builder pattern).
    #[must_use]
    pub fn with_weapon(mut self, weapon: DamageRange) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Replaces the loadout (builder pattern).
    #[must_use]
    pub fn with_loadout(mut self, loadout: Loadout) -> Self {
        self.loadout = loadout;
        self
    }

    /// An actor is alive while it has a behavior.
    pub fn is_alive(&self) -> bool {
        self.behavior.is_some()
    }

    /// Damage range used for melee: the weapon if equipped, else unarmed.
    pub fn attack_range(&self) -> DamageRange {
        self.weapon
            .unwrap_or(DamageRange::new(self.stats.min_damage, self.stats.max_damage))
    }

    /// Marks the actor as dead: no behavior, no longer blocking.
    pub fn die(&mut self) {
        self.behavior = None;
        self.blocks_movement = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meters_clamp_on_every_setter() {
        let mut stats = FighterStats::default();
        stats.add_fatigue(250);
        assert_eq!(stats.fatigue(), 100);
        stats.add_fatigue(-500);
        assert_eq!(stats.fatigue(), 0);

        assert_eq!(stats.adjust_hooked(40), 40);
        assert_eq!(stats.adjust_hooked(-90), 0);
        stats.set_hooked(i32::MAX);
        assert_eq!(stats.hooked(), 100);
    }

    #[test]
    fn builders_leave_meters_empty() {
        let stats = FighterStats::new()
            .with_hp(12)
            .with_difficulty(70)
            .with_strength(8);
        assert_eq!((stats.hp, stats.max_hp), (12, 12));
        assert_eq!(stats.difficulty, 70);
        assert_eq!((stats.fatigue(), stats.hooked()), (0, 0));
    }

    #[test]
    fn attack_range_prefers_weapon() {
        let stats = FighterStats::new().with_damage(1, 2);
        let actor = ActorState::new(
            EntityId(3),
            "player",
            "Player",
            Position::ORIGIN,
            stats,
            BehaviorState::Idle,
        );
        assert_eq!(actor.attack_range(), DamageRange::new(1, 2));

        let armed = actor.with_weapon(DamageRange::new(3, 9));
        assert_eq!(armed.attack_range(), DamageRange::new(3, 9));
    }
}
