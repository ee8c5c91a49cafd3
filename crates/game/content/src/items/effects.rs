//! Consumable item effects.

use barbarian_core::action::{ItemUse, deal_damage};
use barbarian_core::{ActionError, ColorHint, Consumption, EntityId, Position};

const UNSEEN_TARGET: &str = "You cannot target an area that you cannot see.";

/// What a consumable does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restores the user's hit points.
    Heal { amount: u32 },
    /// Confuses the living actor on the targeted cell.
    Confuse { turns: u32 },
    /// Strikes the nearest visible hostile within `range`.
    Lightning { damage: u32, range: u32 },
    /// Damages every living actor within `radius` of the targeted cell.
    Fireball { damage: u32, radius: u32 },
}

impl ItemEffect {
    pub fn apply(self, name: &str, usage: &mut ItemUse<'_, '_>) -> Result<Consumption, ActionError> {
        match self {
            ItemEffect::Heal { amount } => heal(name, usage, amount),
            ItemEffect::Confuse { turns } => confuse(usage, turns),
            ItemEffect::Lightning { damage, range } => lightning(usage, damage, range),
            ItemEffect::Fireball { damage, radius } => fireball(usage, damage, radius),
        }
    }
}

fn heal(name: &str, usage: &mut ItemUse<'_, '_>, amount: u32) -> Result<Consumption, ActionError> {
    let recovered = usage.ctx.actor_mut(usage.user)?.stats.heal(amount);
    if recovered == 0 {
        return Err(ActionError::impossible("Your health is already full."));
    }
    usage.ctx.emit(
        format!("You consume the {name}, and recover {recovered} HP!"),
        ColorHint::HealthRecovered,
    );
    Ok(Consumption::Consumed)
}

fn visible_target(usage: &ItemUse<'_, '_>, missing: &str) -> Result<Position, ActionError> {
    let target = usage
        .target
        .ok_or_else(|| ActionError::impossible(missing))?;
    if !usage.ctx.state.world.map.is_visible(target) {
        return Err(ActionError::impossible(UNSEEN_TARGET));
    }
    Ok(target)
}

fn confuse(usage: &mut ItemUse<'_, '_>, turns: u32) -> Result<Consumption, ActionError> {
    let target = visible_target(usage, "You must select an enemy to target.")?;
    let victim = usage
        .ctx
        .state
        .entities
        .actor_at(target)
        .map(|actor| actor.id)
        .ok_or_else(|| ActionError::impossible("You must select an enemy to target."))?;
    if victim == usage.user {
        return Err(ActionError::impossible("You cannot confuse yourself!"));
    }

    let actor = usage.ctx.actor_mut(victim)?;
    if let Some(behavior) = actor.behavior.take() {
        actor.behavior = Some(behavior.confused(turns));
    }
    let text = format!(
        "The eyes of the {} look vacant, as it starts to stumble around!",
        actor.name
    );
    tracing::debug!("{} confused for {} turns", victim, turns);
    usage.ctx.emit(text, ColorHint::StatusApplied);
    Ok(Consumption::Consumed)
}

fn lightning(usage: &mut ItemUse<'_, '_>, damage: u32, range: u32) -> Result<Consumption, ActionError> {
    let origin = usage.ctx.actor(usage.user)?.position;
    let map = &usage.ctx.state.world.map;
    let (victim, name) = usage
        .ctx
        .state
        .entities
        .living_actors()
        .filter(|actor| actor.id != usage.user && actor.is_hostile())
        .filter(|actor| map.is_visible(actor.position))
        .map(|actor| (actor, origin.euclidean(actor.position)))
        .filter(|(_, distance)| *distance <= range as f32)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(actor, _)| (actor.id, actor.name.clone()))
        .ok_or_else(|| ActionError::impossible("No enemy is close enough to strike."))?;

    usage.ctx.emit(
        format!("A lightning bolt strikes the {name} with a loud thunder, for {damage} damage!"),
        ColorHint::PlayerAttack,
    );
    deal_damage(usage.ctx, victim, damage)?;
    Ok(Consumption::Consumed)
}

fn fireball(usage: &mut ItemUse<'_, '_>, damage: u32, radius: u32) -> Result<Consumption, ActionError> {
    let target = visible_target(usage, "You must select an area to target.")?;
    let caught: Vec<(EntityId, String)> = usage
        .ctx
        .state
        .entities
        .living_actors()
        .filter(|actor| target.euclidean(actor.position) <= radius as f32)
        .map(|actor| (actor.id, actor.name.clone()))
        .collect();
    if caught.is_empty() {
        return Err(ActionError::impossible("There are no targets in the radius."));
    }

    for (victim, name) in caught {
        usage.ctx.emit(
            format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
            ColorHint::PlayerAttack,
        );
        deal_damage(usage.ctx, victim, damage)?;
    }
    Ok(Consumption::Consumed)
}
