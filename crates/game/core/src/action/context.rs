use crate::config::GameConfig;
use crate::env::{GameEnv, RollContext, compute_seed};
use crate::error::ActionError;
use crate::message::{ColorHint, MessageSink};
use crate::state::{ActorState, EntityId, GameState};

/// Everything an action or AI decision may read or write.
///
/// Only the action being resolved holds this, so it is the single writer of
/// the world for the duration of that resolution.
pub struct ActionContext<'a> {
    pub state: &'a mut GameState,
    pub env: GameEnv<'a>,
    pub config: &'a GameConfig,
    messages: &'a mut dyn MessageSink,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        state: &'a mut GameState,
        env: GameEnv<'a>,
        config: &'a GameConfig,
        messages: &'a mut dyn MessageSink,
    ) -> Self {
        Self {
            state,
            env,
            config,
            messages,
        }
    }

    pub fn emit(&mut self, text: impl Into<String>, color: ColorHint) {
        self.messages.emit(text.into(), color);
    }

    pub fn actor(&self, id: EntityId) -> Result<&ActorState, ActionError> {
        self.state
            .entities
            .actor(id)
            .ok_or(ActionError::ActorNotFound(id))
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Result<&mut ActorState, ActionError> {
        self.state
            .entities
            .actor_mut(id)
            .ok_or(ActionError::ActorNotFound(id))
    }

    fn seed(&self, actor: EntityId, context: RollContext) -> u64 {
        compute_seed(self.state.game_seed, self.state.nonce, actor.0, context)
    }

    pub fn roll_die(
        &self,
        actor: EntityId,
        context: RollContext,
        sides: u32,
    ) -> Result<u32, ActionError> {
        Ok(self.env.rng()?.roll_die(self.seed(actor, context), sides))
    }

    pub fn roll_range(
        &self,
        actor: EntityId,
        context: RollContext,
        min: u32,
        max: u32,
    ) -> Result<u32, ActionError> {
        Ok(self.env.rng()?.range(self.seed(actor, context), min, max))
    }

    pub fn pick(
        &self,
        actor: EntityId,
        context: RollContext,
        len: usize,
    ) -> Result<usize, ActionError> {
        Ok(self.env.rng()?.pick(self.seed(actor, context), len))
    }
}
