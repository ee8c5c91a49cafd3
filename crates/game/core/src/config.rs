/// Game configuration constants and tunable parameters.
///
/// Every field has a default matching the stock rules; loaders only need to
/// list the values they override.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Meter value an actor needs before it may act.
    pub turn_threshold: u32,

    /// The player regains hit points every this many successful moves.
    pub heal_interval: u32,
    pub heal_amount: u32,

    /// Successful player moves needed before a forward portal appears.
    pub portal_spawn_threshold: u32,
    pub portal_lifetime: u32,
    /// Horizontal offset from the player where a new portal is placed.
    pub portal_spawn_offset: i32,

    /// Extra cost added to occupied cells when planning paths.
    pub crowd_penalty: u32,
    pub cardinal_step_cost: u32,
    pub diagonal_step_cost: u32,

    /// Euclidean radius within which a follower notices hostiles.
    pub follower_detection_radius: f32,
    /// Chebyshev distance a follower lets the player get ahead before following.
    pub follower_leash: u32,

    /// Turns a ranged attacker spends reloading after each shot.
    pub ranged_cooldown: u32,

    /// Floor reached through a forward portal.
    pub forward_floor: u32,
    /// Floor reached through a return portal.
    pub return_floor: u32,
}

impl GameConfig {
    pub const DEFAULT_TURN_THRESHOLD: u32 = 100;
    pub const DEFAULT_HEAL_INTERVAL: u32 = 15;
    pub const DEFAULT_HEAL_AMOUNT: u32 = 1;
    pub const DEFAULT_PORTAL_SPAWN_THRESHOLD: u32 = 1000;
    pub const DEFAULT_PORTAL_LIFETIME: u32 = 10;
    pub const DEFAULT_PORTAL_SPAWN_OFFSET: i32 = 2;
    pub const DEFAULT_CROWD_PENALTY: u32 = 10;
    pub const DEFAULT_CARDINAL_STEP_COST: u32 = 2;
    pub const DEFAULT_DIAGONAL_STEP_COST: u32 = 3;
    pub const DEFAULT_FOLLOWER_DETECTION_RADIUS: f32 = 8.0;
    pub const DEFAULT_FOLLOWER_LEASH: u32 = 3;
    pub const DEFAULT_RANGED_COOLDOWN: u32 = 2;
    pub const DEFAULT_FORWARD_FLOOR: u32 = 1;
    pub const DEFAULT_RETURN_FLOOR: u32 = 0;

    pub fn new() -> Self {
        Self {
            turn_threshold: Self::DEFAULT_TURN_THRESHOLD,
            heal_interval: Self::DEFAULT_HEAL_INTERVAL,
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
            portal_spawn_threshold: Self::DEFAULT_PORTAL_SPAWN_THRESHOLD,
            portal_lifetime: Self::DEFAULT_PORTAL_LIFETIME,
            portal_spawn_offset: Self::DEFAULT_PORTAL_SPAWN_OFFSET,
            crowd_penalty: Self::DEFAULT_CROWD_PENALTY,
            cardinal_step_cost: Self::DEFAULT_CARDINAL_STEP_COST,
            diagonal_step_cost: Self::DEFAULT_DIAGONAL_STEP_COST,
            follower_detection_radius: Self::DEFAULT_FOLLOWER_DETECTION_RADIUS,
            follower_leash: Self::DEFAULT_FOLLOWER_LEASH,
            ranged_cooldown: Self::DEFAULT_RANGED_COOLDOWN,
            forward_floor: Self::DEFAULT_FORWARD_FLOOR,
            return_floor: Self::DEFAULT_RETURN_FLOOR,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
