//! Pickup, drop, equip and item use.

use crate::action::{ActionContext, ActionTransition};
use crate::env::{Consumption, EquipmentSlot, ItemDefinition};
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::state::{EntityId, ItemHandle, ItemInstance, ItemState, Position};

const NOT_CARRIED: &str = "You do not carry that item.";

fn definition<'a>(
    ctx: &ActionContext<'a>,
    handle: ItemHandle,
) -> Result<&'a ItemDefinition, ActionError> {
    Ok(ctx
        .env
        .items()?
        .definition(handle)
        .ok_or(crate::env::OracleError::ItemNotFound(handle))?)
}

fn carried(ctx: &ActionContext<'_>, actor: EntityId, item: EntityId) -> Result<ItemInstance, ActionError> {
    ctx.actor(actor)?
        .inventory
        .get(item)
        .copied()
        .ok_or_else(|| ActionError::impossible(NOT_CARRIED))
}

/// Borrowed view handed to item behaviours when an item is activated.
pub struct ItemUse<'c, 'a> {
    pub ctx: &'c mut ActionContext<'a>,
    pub user: EntityId,
    pub item: ItemInstance,
    /// Cell chosen by the user for targeted items.
    pub target: Option<Position>,
}

/// Pick up the first item lying under the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    fn item_here(&self, ctx: &ActionContext<'_>) -> Result<ItemState, ActionError> {
        let position = ctx.actor(self.actor)?.position;
        ctx.state
            .entities
            .items_at(position)
            .next()
            .copied()
            .ok_or_else(|| ActionError::impossible("There is nothing here to pick up."))
    }
}

impl ActionTransition for PickupAction {
    type Output = EntityId;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        self.item_here(ctx)?;
        if ctx.actor(self.actor)?.inventory.is_full() {
            return Err(ActionError::impossible("Your inventory is full."));
        }
        Ok(())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let item = self.item_here(ctx)?;
        let name = definition(ctx, item.handle)?.name.clone();

        ctx.state.entities.remove_item(item.id);
        ctx.actor_mut(self.actor)?
            .inventory
            .try_push(item.instance())
            .map_err(|_| ActionError::impossible("Your inventory is full."))?;

        ctx.emit(format!("You picked up the {name}!"), ColorHint::Neutral);
        Ok(item.id)
    }
}

/// Drop a carried item at the actor's feet, unequipping it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropItemAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropItemAction {
    type Output = EntityId;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        carried(ctx, self.actor, self.item).map(|_| ())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let instance = carried(ctx, self.actor, self.item)?;
        let name = definition(ctx, instance.handle)?.name.clone();

        if ctx.actor(self.actor)?.equipment.is_equipped(self.item) {
            toggle_equipment(ctx, self.actor, instance)?;
        }

        let actor = ctx.actor_mut(self.actor)?;
        let position = actor.position;
        actor.inventory.remove(self.item);
        ctx.state
            .entities
            .items
            .push(ItemState::new(instance.id, position, instance.handle));

        ctx.emit(format!("You dropped the {name}."), ColorHint::Neutral);
        Ok(self.item)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipChange {
    pub slot: EquipmentSlot,
    pub equipped: bool,
}

/// Equip a carried item, or remove it if it is already equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    type Output = EquipChange;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        let instance = carried(ctx, self.actor, self.item)?;
        let definition = definition(ctx, instance.handle)?;
        if definition.equippable().is_none() {
            return Err(ActionError::impossible(format!(
                "The {} cannot be equipped.",
                definition.name
            )));
        }
        Ok(())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let instance = carried(ctx, self.actor, self.item)?;
        toggle_equipment(ctx, self.actor, instance)
    }
}

/// Equips `item` into its slot, replacing any previous occupant, or removes it
/// when it is already equipped.
fn toggle_equipment(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    item: ItemInstance,
) -> Result<EquipChange, ActionError> {
    let definition = definition(ctx, item.handle)?;
    let slot = definition
        .equippable()
        .map(|stats| stats.slot)
        .ok_or_else(|| {
            ActionError::impossible(format!("The {} cannot be equipped.", definition.name))
        })?;

    let equipment = ctx.actor(actor)?.equipment;
    if equipment.slot(slot) == Some(item.id) {
        ctx.actor_mut(actor)?.equipment.unequip(item.id);
        ctx.emit(
            format!("You remove the {}.", definition.name),
            ColorHint::Neutral,
        );
        return Ok(EquipChange {
            slot,
            equipped: false,
        });
    }

    if let Some(previous) = equipment.slot(slot) {
        let previous_name = match ctx.actor(actor)?.inventory.get(previous) {
            Some(instance) => Some(self::definition(ctx, instance.handle)?.name.clone()),
            None => None,
        };
        ctx.actor_mut(actor)?.equipment.unequip(previous);
        if let Some(name) = previous_name {
            ctx.emit(format!("You remove the {name}."), ColorHint::Neutral);
        }
    }

    ctx.actor_mut(actor)?.equipment.equip(slot, item.id);
    ctx.emit(
        format!("You equip the {}.", definition.name),
        ColorHint::Neutral,
    );
    Ok(EquipChange {
        slot,
        equipped: true,
    })
}

/// Activate a carried item through its behaviour in the item oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self {
            actor,
            item,
            target: None,
        }
    }

    pub fn targeting(actor: EntityId, item: EntityId, target: Position) -> Self {
        Self {
            actor,
            item,
            target: Some(target),
        }
    }
}

impl ActionTransition for UseItemAction {
    type Output = Consumption;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        let instance = carried(ctx, self.actor, self.item)?;
        definition(ctx, instance.handle).map(|_| ())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let instance = carried(ctx, self.actor, self.item)?;
        let items = ctx.env.items()?;

        let consumption = items.activate(
            instance.handle,
            &mut ItemUse {
                ctx: &mut *ctx,
                user: self.actor,
                item: instance,
                target: self.target,
            },
        )?;

        if consumption == Consumption::Consumed {
            // The user may have died from its own item; the pack still loses it.
            let actor = ctx.actor_mut(self.actor)?;
            actor.equipment.unequip(self.item);
            actor.inventory.remove(self.item);
        }
        Ok(consumption)
    }
}
