//! Action domain.
//!
//! Every intent an actor can express is a small struct implementing
//! [`ActionTransition`]. [`Action`] is the closed set of them; the engine
//! validates and applies one at a time against an [`ActionContext`].
//!
//! # Module Structure
//!
//! - `context`: the explicit world handle passed to every action
//! - `movement`: move and bump
//! - `combat`: melee attacks and damage application
//! - `inventory`: pickup, drop, equip, item use
//! - `interact`: conversation and stairs

mod combat;
mod context;
mod interact;
mod inventory;
mod movement;
mod transition;
mod wait;

pub use combat::{AttackReport, MeleeAction, deal_damage};
pub use context::ActionContext;
pub use interact::{ConverseAction, TakeStairsAction};
pub use inventory::{
    DropItemAction, EquipAction, EquipChange, ItemUse, PickupAction, UseItemAction,
};
pub use movement::{BumpAction, BumpTarget, MoveAction, MoveOutcome};
pub use transition::ActionTransition;
pub use wait::WaitAction;

use crate::env::{Consumption, EquipmentSlot};
use crate::state::{Direction, EntityId, FloorId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Wait(WaitAction),
    Move(MoveAction),
    Melee(MeleeAction),
    Bump(BumpAction),
    Pickup(PickupAction),
    Drop(DropItemAction),
    Equip(EquipAction),
    UseItem(UseItemAction),
    TakeStairs(TakeStairsAction),
    Converse(ConverseAction),
}

impl Action {
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Wait(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::Melee(action) => action.actor(),
            Action::Bump(action) => action.actor(),
            Action::Pickup(action) => action.actor(),
            Action::Drop(action) => action.actor(),
            Action::Equip(action) => action.actor(),
            Action::UseItem(action) => action.actor(),
            Action::TakeStairs(action) => action.actor(),
            Action::Converse(action) => action.actor(),
        }
    }

    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Wait(_) => "wait",
            Action::Move(_) => "move",
            Action::Melee(_) => "melee",
            Action::Bump(_) => "bump",
            Action::Pickup(_) => "pickup",
            Action::Drop(_) => "drop",
            Action::Equip(_) => "equip",
            Action::UseItem(_) => "use_item",
            Action::TakeStairs(_) => "take_stairs",
            Action::Converse(_) => "converse",
        }
    }

    pub fn wait(actor: EntityId) -> Self {
        Action::Wait(WaitAction::new(actor))
    }

    pub fn move_by(actor: EntityId, dx: i32, dy: i32) -> Self {
        Action::Move(MoveAction::new(actor, dx, dy))
    }

    /// Single step from `from` to an adjacent `to`.
    pub fn step(actor: EntityId, from: Position, to: Position) -> Self {
        let (dx, dy) = from.delta_to(to);
        Self::move_by(actor, dx, dy)
    }

    pub fn melee(actor: EntityId, dx: i32, dy: i32) -> Self {
        Action::Melee(MeleeAction::new(actor, dx, dy))
    }

    pub fn bump(actor: EntityId, direction: Direction) -> Self {
        Action::Bump(BumpAction::towards(actor, direction))
    }
}

macro_rules! impl_from_action {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    Wait(WaitAction),
    Move(MoveAction),
    Melee(MeleeAction),
    Bump(BumpAction),
    Pickup(PickupAction),
    Drop(DropItemAction),
    Equip(EquipAction),
    UseItem(UseItemAction),
    TakeStairs(TakeStairsAction),
    Converse(ConverseAction),
);

/// What a successfully resolved action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Waited,
    Moved { from: Position, to: Position },
    Transitioned { floor: FloorId },
    Attacked(AttackReport),
    PickedUp { item: EntityId },
    Dropped { item: EntityId },
    Equipped { item: EntityId, slot: EquipmentSlot, equipped: bool },
    Used { item: EntityId, consumption: Consumption },
    Descended { floor: FloorId },
    Conversed { with: EntityId, in_party: bool },
}

impl From<MoveOutcome> for ActionOutcome {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Moved { from, to } => ActionOutcome::Moved { from, to },
            MoveOutcome::Transitioned { floor } => ActionOutcome::Transitioned { floor },
        }
    }
}

impl From<AttackReport> for ActionOutcome {
    fn from(report: AttackReport) -> Self {
        ActionOutcome::Attacked(report)
    }
}
