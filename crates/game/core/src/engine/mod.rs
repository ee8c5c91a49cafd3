//! Turn scheduling and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation, whether the player's or an AI's, goes through
//! [`GameEngine::execute`]: the actor is checked, the action is validated and
//! applied, and the nonce advances so the next roll draws a fresh seed.

mod transition;
mod turns;

pub(crate) use transition::drive_transition;
pub use transition::execute_transition;

use crate::action::{Action, ActionContext, ActionOutcome};
use crate::ai;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::error::ActionError;
use crate::message::MessageSink;
use crate::state::{EntityId, GameState};

/// Game engine that executes actions and schedules turns.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>, config: &'a GameConfig) -> Self {
        Self { state, env, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.config
    }

    fn context<'s>(&'s mut self, messages: &'s mut dyn MessageSink) -> ActionContext<'s> {
        ActionContext::new(self.state, self.env, self.config, messages)
    }

    /// Validates and applies one action.
    ///
    /// A rejected action leaves the state untouched, nonce included.
    pub fn execute(
        &mut self,
        action: Action,
        messages: &mut dyn MessageSink,
    ) -> Result<ActionOutcome, ActionError> {
        let actor = action.actor();
        let alive = self
            .state
            .entities
            .actor(actor)
            .ok_or(ActionError::ActorNotFound(actor))?
            .is_alive();
        if !alive {
            return Err(ActionError::ActorDead(actor));
        }

        let outcome = execute_transition(&action, &mut self.context(messages))?;
        self.state.nonce += 1;

        tracing::debug!(
            "{} performed {} -> {:?}",
            actor,
            action.as_snake_case(),
            outcome
        );
        Ok(outcome)
    }

    /// Asks the actor's behavior for its next action without executing it.
    pub fn decide(
        &mut self,
        actor: EntityId,
        messages: &mut dyn MessageSink,
    ) -> Result<Action, ActionError> {
        ai::decide(&mut self.context(messages), actor)
    }

    /// Decides and executes one AI turn.
    ///
    /// An impossible action is logged and the turn is skipped (`Ok(None)`);
    /// only wiring faults propagate.
    pub fn take_ai_turn(
        &mut self,
        actor: EntityId,
        messages: &mut dyn MessageSink,
    ) -> Result<Option<ActionOutcome>, ActionError> {
        let action = self.decide(actor, messages)?;
        match self.execute(action, messages) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(ActionError::Impossible(reason)) => {
                tracing::warn!(
                    "{} could not {}: {}, skipping turn",
                    actor,
                    action.as_snake_case(),
                    reason
                );
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveAction;
    use crate::state::Position;
    use crate::testing::{self, Fixture};

    #[test]
    fn successful_actions_advance_the_nonce() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        fx.run(Action::wait(EntityId::PLAYER)).unwrap();
        fx.run(MoveAction::new(EntityId::PLAYER, 1, 0)).unwrap();
        assert_eq!(fx.state.nonce, 2);
    }

    #[test]
    fn rejected_actions_leave_the_nonce() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(1, 1));
        assert!(fx.run(MoveAction::new(EntityId::PLAYER, -1, 0)).is_err());
        assert_eq!(fx.state.nonce, 0);
    }

    #[test]
    fn dead_and_unknown_actors_cannot_act() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let goblin = fx.spawn(&testing::goblin(), Position::new(5, 5));
        fx.state.entities.actor_mut(goblin).unwrap().mark_dead();

        assert_eq!(
            fx.run(Action::wait(goblin)),
            Err(ActionError::ActorDead(goblin))
        );
        assert_eq!(
            fx.run(Action::wait(EntityId(42))),
            Err(ActionError::ActorNotFound(EntityId(42)))
        );
    }

    #[test]
    fn ai_turn_skips_impossible_actions() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let goblin = fx.spawn(&testing::goblin(), Position::new(5, 5));
        // Confused for two turns: the first stumble goes north into a wall.
        fx.state.entities.actor_mut(goblin).unwrap().position = Position::new(5, 1);
        let behavior = fx.actor(goblin).behavior.clone().unwrap().confused(2);
        fx.state.entities.actor_mut(goblin).unwrap().behavior = Some(behavior);
        fx.set_die(1);

        assert_eq!(fx.ai_turn(goblin), Ok(None));
        assert_eq!(fx.state.nonce, 0);
    }

    #[test]
    fn ai_turn_executes_decision() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(2, 2))
            .with_die(20);
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 3));

        let outcome = fx.ai_turn(goblin).unwrap();

        assert!(matches!(outcome, Some(ActionOutcome::Attacked(report)) if report.attacker == goblin));
        assert_eq!(
            fx.texts(),
            vec!["Goblin attacks Player for crit 4 hit points.[20]"]
        );
    }
}
