//! Combat resolution.
//!
//! Pure functions from attacker/defender numbers and a die roll to an
//! outcome. Applying the result to actors happens in the melee action.

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{CRITICAL_MULTIPLIER, calculate_damage, critical_damage};
pub use hit::{ATTACK_DIE_SIDES, CRITICAL_ROLL, check_hit, is_critical};
pub use result::{AttackOutcome, AttackResult, AttackRoll, resolve_attack};
