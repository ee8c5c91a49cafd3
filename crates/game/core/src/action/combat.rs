use crate::action::{ActionContext, ActionTransition};
use crate::combat::{ATTACK_DIE_SIDES, AttackResult, AttackRoll, resolve_attack};
use crate::env::RollContext;
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::state::EntityId;

/// Melee (or point-blank ranged) attack against whatever stands at `(dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn target(&self, ctx: &ActionContext<'_>) -> Result<EntityId, ActionError> {
        let destination = ctx.actor(self.actor)?.position.offset(self.dx, self.dy);
        ctx.state
            .entities
            .actor_at(destination)
            .map(|target| target.id)
            .ok_or_else(|| ActionError::impossible("Nothing to attack."))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: EntityId,
    pub target: EntityId,
    pub result: AttackResult,
    pub killed: bool,
}

impl ActionTransition for MeleeAction {
    type Output = AttackReport;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        self.target(ctx).map(|_| ())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let target_id = self.target(ctx)?;

        let attacker = ctx.actor(self.actor)?;
        let attacker_name = attacker.name.clone();
        let offense = attacker.effective_stats(&ctx.env)?;

        let target = ctx.actor(target_id)?;
        let target_name = target.name.clone();
        let defense = target.effective_stats(&ctx.env)?.defense;

        let weapon_bonus = match offense.weapon_damage {
            Some((min, max)) => ctx.roll_range(self.actor, RollContext::WeaponDamage, min, max)?,
            None => 0,
        };
        let die = ctx.roll_die(self.actor, RollContext::AttackDie, ATTACK_DIE_SIDES)?;

        let result = resolve_attack(
            AttackRoll {
                power: offense.power,
                weapon_bonus,
                pen: offense.pen,
                die,
            },
            defense,
        );

        let color = if self.actor.is_player() {
            ColorHint::PlayerAttack
        } else {
            ColorHint::EnemyAttack
        };
        let attack_desc = format!("{} attacks {}", capitalize(&attacker_name), target_name);
        ctx.emit(result.describe(&attack_desc), color);

        tracing::debug!(
            "{} attacks {}: {} for {} (die {})",
            self.actor,
            target_id,
            result.outcome,
            result.damage,
            die
        );

        let killed = deal_damage(ctx, target_id, result.damage)?;
        Ok(AttackReport {
            attacker: self.actor,
            target: target_id,
            result,
            killed,
        })
    }
}

/// Reduces the target's hit points and handles death. Returns true when the
/// target died from this damage.
pub fn deal_damage(
    ctx: &mut ActionContext<'_>,
    target: EntityId,
    amount: u32,
) -> Result<bool, ActionError> {
    let actor = ctx.actor_mut(target)?;
    if amount == 0 || !actor.is_alive() {
        return Ok(false);
    }
    if actor.stats.take_damage(amount) > 0 {
        return Ok(false);
    }

    let (text, color) = if target.is_player() {
        ("You died!".to_string(), ColorHint::PlayerDeath)
    } else {
        (format!("{} is dead!", actor.name), ColorHint::EnemyDeath)
    };
    actor.mark_dead();
    tracing::info!("{} died", target);
    ctx.emit(text, color);
    Ok(true)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackOutcome;
    use crate::state::Position;
    use crate::testing::{self, Fixture};

    #[test]
    fn nothing_to_attack() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let error = fx.run(MeleeAction::new(EntityId::PLAYER, 1, 0)).unwrap_err();
        assert_eq!(error, ActionError::impossible("Nothing to attack."));
        assert!(fx.messages.is_empty());
    }

    #[test]
    fn critical_hit_message_and_damage() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(2, 2))
            .with_die(20);
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 2));

        fx.run(MeleeAction::new(EntityId::PLAYER, 1, 0)).unwrap();

        assert_eq!(fx.actor(goblin).stats.hp.current, 2);
        assert_eq!(
            fx.texts(),
            vec!["Player attacks Goblin for crit 4 hit points.[20]"]
        );
        assert_eq!(fx.messages[0].color, ColorHint::PlayerAttack);
    }

    #[test]
    fn miss_leaves_target_untouched() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(2, 2))
            .with_die(3);
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 2));

        let report = fx.attack(EntityId::PLAYER, 1, 0);

        assert_eq!(report.result.outcome, AttackOutcome::Miss);
        assert_eq!(fx.actor(goblin).stats.hp.current, 6);
        assert_eq!(
            fx.texts(),
            vec!["Player attacks Goblin but does no damage.[3 + 0]"]
        );
    }

    #[test]
    fn lethal_hit_kills_and_clamps() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(2, 2))
            .with_die(20);
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 2));
        fx.state.entities.actor_mut(goblin).unwrap().stats.hp.current = 1;

        let report = fx.attack(EntityId::PLAYER, 1, 0);

        assert!(report.killed);
        let corpse = fx.actor(goblin);
        assert_eq!(corpse.stats.hp.current, 0);
        assert!(!corpse.is_alive());
        assert!(!corpse.blocks_movement);
        assert_eq!(corpse.name, "remains of Goblin");
        assert_eq!(fx.texts().last(), Some(&"Goblin is dead!"));
    }

    #[test]
    fn enemy_attack_uses_enemy_colour_and_player_death_message() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(2, 2))
            .with_die(20);
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 2));
        fx.state
            .entities
            .actor_mut(EntityId::PLAYER)
            .unwrap()
            .stats
            .hp
            .current = 3;

        fx.attack(goblin, -1, 0);

        assert_eq!(fx.messages[0].color, ColorHint::EnemyAttack);
        assert_eq!(fx.texts().last(), Some(&"You died!"));
        assert_eq!(fx.messages.last().unwrap().color, ColorHint::PlayerDeath);
    }

    #[test]
    fn weapon_bonus_and_penetration_apply() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(2, 2))
            .with_die(2);
        let troll = fx.spawn(&testing::troll(), Position::new(3, 2));
        let sword = fx
            .state
            .give_item(EntityId::PLAYER, testing::SWORD)
            .unwrap();
        fx.state
            .entities
            .actor_mut(EntityId::PLAYER)
            .unwrap()
            .equipment
            .weapon = Some(sword);

        // die 2 + pen 4 < defense 16: miss despite the sword.
        let report = fx.attack(EntityId::PLAYER, 1, 0);
        assert_eq!(report.result.outcome, AttackOutcome::Miss);
        assert_eq!(report.result.pen, 4);

        // Fixed die of 20 crits; weapon range 1..=4 rolls 1 + (19 % 4) = 4.
        fx.set_die(20);
        let report = fx.attack(EntityId::PLAYER, 1, 0);
        assert_eq!(report.result.damage, (2 + 4) * 2);
        assert_eq!(fx.actor(troll).stats.hp.current, 4);
    }
}
