//! Melee damage formula.
//!
//! ```text
//! base       = roll(min_damage, max_damage)        (doubled when empowered)
//! guaranteed = min(defense / 2, floor(base * defense^0.25 * 16 / 100))
//! reduction  = max(roll(0, defense), guaranteed)
//! final      = max(base - reduction, 0)
//! ```
//!
//! The guaranteed part gives high-defense targets a mitigation floor the
//! random roll cannot undercut, capped at half the defense.

use crate::env::RngOracle;
use crate::state::DamageRange;

/// Outcome of one melee damage roll, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeRoll {
    /// Rolled damage after the empowered doubling.
    pub base: i32,
    pub reduction: i32,
    /// Damage that actually lands. Never negative.
    pub damage: i32,
    pub empowered: bool,
}

/// Mitigation a defender always gets against `damage`.
pub fn guaranteed_reduction(damage: i32, defense: i32) -> i32 {
    let defense = defense.max(0);
    let damage = damage.max(0);
    if defense == 0 {
        return 0;
    }
    let scaled = (f64::from(damage) * f64::from(defense).powf(0.25) * 16.0 / 100.0).floor();
    (defense / 2).min(scaled as i32)
}

/// Rolls base damage and mitigation. Draws the damage roll first, then the
/// defense roll.
pub fn roll_melee(
    range: DamageRange,
    empowered: bool,
    defense: i32,
    rng: &mut dyn RngOracle,
) -> MeleeRoll {
    let defense = defense.max(0);
    let mut base = rng.range(range.min, range.max);
    if empowered {
        base = base.saturating_mul(2);
    }
    let reduction = rng.range(0, defense).max(guaranteed_reduction(base, defense));
    MeleeRoll {
        base,
        reduction,
        damage: (base - reduction).max(0),
        empowered,
    }
}
