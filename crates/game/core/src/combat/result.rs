//! Combat result types and attack resolution.

use super::damage::{calculate_damage, critical_damage};
use super::hit::{check_hit, is_critical};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

/// Everything the resolver needs from the attacker and the dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRoll {
    pub power: i32,
    pub weapon_bonus: u32,
    pub pen: i32,
    pub die: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Damage dealt (0 on a miss).
    pub damage: u32,
    pub die: u32,
    pub pen: i32,
}

impl AttackResult {
    /// Combat log line for this result, e.g. `"Goblin attacks Player for 2 hit points.[12 + 1]"`.
    pub fn describe(&self, attack_desc: &str) -> String {
        match self.outcome {
            AttackOutcome::Critical => format!(
                "{attack_desc} for crit {} hit points.[{}]",
                self.damage, self.die
            ),
            AttackOutcome::Hit => format!(
                "{attack_desc} for {} hit points.[{} + {}]",
                self.damage, self.die, self.pen
            ),
            AttackOutcome::Miss => format!(
                "{attack_desc} but does no damage.[{} + {}]",
                self.die, self.pen
            ),
        }
    }
}

/// Resolve an attack against a defender's defense.
///
/// A natural 20 always lands for double damage. Otherwise the attack hits when
/// `die + pen >= defense`.
pub fn resolve_attack(roll: AttackRoll, defense: i32) -> AttackResult {
    let damage = calculate_damage(roll.power, roll.weapon_bonus);
    let (outcome, damage) = if is_critical(roll.die) {
        (AttackOutcome::Critical, critical_damage(damage))
    } else if check_hit(roll.die, roll.pen, defense) {
        (AttackOutcome::Hit, damage)
    } else {
        (AttackOutcome::Miss, 0)
    };

    AttackResult {
        outcome,
        damage,
        die: roll.die,
        pen: roll.pen,
    }
}
