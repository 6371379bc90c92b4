/// Game configuration constants and tunable parameters.
///
/// Every balance number the rules read lives here so content files can
/// override it. Missing keys fall back to [`GameConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    // ===== pathfinding =====
    /// Extra cost per blocking occupant on a walkable cell.
    ///
    /// Low values let actors queue up behind each other in corridors; high
    /// values make them route around to surround the target.
    pub occupancy_penalty: u32,
    /// Edge weight multiplier for orthogonal steps.
    pub cardinal_cost: u32,
    /// Edge weight multiplier for diagonal steps. Must exceed `cardinal_cost`.
    pub diagonal_cost: u32,

    // ===== fear =====
    /// Minimum Chebyshev distance between a flee target and the threat.
    pub flee_min_distance: u32,
    /// Random draws tried before falling back to the farthest walkable cell.
    pub flee_search_attempts: u32,
    /// Difficulty multiplier applied while an actor is scared.
    pub scared_difficulty_multiplier: i32,

    // ===== capture =====
    /// `hooked` bonus per CastLine level on a successful cast.
    pub hook_bonus_per_level: f32,
    /// Fatigue gained by a hooked actor each turn, inclusive range.
    pub struggle_fatigue: (i32, i32),
    /// Random multiplier on strength when an actor tears at the hook.
    pub struggle_strength_factor: (i32, i32),
    /// Percent chance that Exhaust makes the fish fight back.
    pub exhaust_fight_back_percent: i32,
    /// Percent chance that Exhaust sets the hook deeper.
    pub exhaust_improve_percent: i32,
    /// Fatigue gained per Exhaust level, inclusive range.
    pub exhaust_fatigue_per_level: (i32, i32),

    // ===== perception =====
    /// Field-of-view radius around the player.
    pub fov_radius: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_OCCUPANCY_PENALTY: u32 = 10;
    pub const DEFAULT_CARDINAL_COST: u32 = 2;
    pub const DEFAULT_DIAGONAL_COST: u32 = 3;
    pub const DEFAULT_FLEE_MIN_DISTANCE: u32 = 30;
    pub const DEFAULT_FLEE_SEARCH_ATTEMPTS: u32 = 2_000;
    pub const DEFAULT_FOV_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            occupancy_penalty: Self::DEFAULT_OCCUPANCY_PENALTY,
            cardinal_cost: Self::DEFAULT_CARDINAL_COST,
            diagonal_cost: Self::DEFAULT_DIAGONAL_COST,
            flee_min_distance: Self::DEFAULT_FLEE_MIN_DISTANCE,
            flee_search_attempts: Self::DEFAULT_FLEE_SEARCH_ATTEMPTS,
            scared_difficulty_multiplier: 3,
            hook_bonus_per_level: 1.7,
            struggle_fatigue: (5, 10),
            struggle_strength_factor: (1, 2),
            exhaust_fight_back_percent: 10,
            exhaust_improve_percent: 5,
            exhaust_fatigue_per_level: (1, 5),
            fov_radius: Self::DEFAULT_FOV_RADIUS,
        }
    }

    /// Overrides the occupancy penalty (builder pattern).
    #[must_use]
    pub fn with_occupancy_penalty(mut self, penalty: u32) -> Self {
        self.occupancy_penalty = penalty;
        self
    }

    /// Overrides the flee distance (builder pattern).
    #[must_use]
    pub fn with_flee_min_distance(mut self, distance: u32) -> Self {
        self.flee_min_distance = distance;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
