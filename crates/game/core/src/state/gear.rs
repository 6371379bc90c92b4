//! Angling gear and the skill levels it grants.
//!
//! A hooking actor's effective level for each capture skill is its base level
//! (1) plus every bonus granted by equipped gear.

use std::collections::BTreeMap;

/// Capture skills whose strength scales with level.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    CastLine,
    Reel,
    Exhaust,
}

impl SkillKind {
    /// Level every actor has before gear bonuses.
    pub const BASE_LEVEL: u32 = 1;
}

/// Equipment slots a loadout can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GearSlot {
    Rod,
    Hat,
    Vest,
    Pants,
}

/// A single piece of gear.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gear {
    pub name: String,
    pub slot: GearSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_bonuses: BTreeMap<SkillKind, u32>,
}

impl Gear {
    pub fn new(name: impl Into<String>, slot: GearSlot) -> Self {
        Self {
            name: name.into(),
            slot,
            skill_bonuses: BTreeMap::new(),
        }
    }

    /// Adds a skill bonus (builder pattern).
    #[must_use]
    pub fn with_bonus(mut self, skill: SkillKind, levels: u32) -> Self {
        *self.skill_bonuses.entry(skill).or_default() += levels;
        self
    }

    pub fn bonus(&self, skill: SkillKind) -> u32 {
        self.skill_bonuses.get(&skill).copied().unwrap_or(0)
    }
}

/// Gear currently worn, at most one piece per slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    slots: BTreeMap<GearSlot, Gear>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equips gear into its slot, returning whatever was there before.
    pub fn equip(&mut self, gear: Gear) -> Option<Gear> {
        self.slots.insert(gear.slot, gear)
    }

    pub fn unequip(&mut self, slot: GearSlot) -> Option<Gear> {
        self.slots.remove(&slot)
    }

    pub fn equipped(&self, slot: GearSlot) -> Option<&Gear> {
        self.slots.get(&slot)
    }

    /// Effective level for a skill: base level plus all equipped bonuses.
    pub fn skill_level(&self, skill: SkillKind) -> u32 {
        SkillKind::BASE_LEVEL + self.slots.values().map(|gear| gear.bonus(skill)).sum::<u32>()
    }
}
