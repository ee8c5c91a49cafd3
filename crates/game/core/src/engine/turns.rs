//! Speed-based turn gating.
//!
//! Each world tick feeds every living actor's effective speed into its
//! movement meter and its effective quickness into its quickness meter. An
//! actor may act while its movement meter holds at least the configured
//! threshold; each turn spends exactly one threshold's worth and the rest
//! stays banked.

use super::GameEngine;
use crate::error::ActionError;
use crate::state::EntityId;

impl GameEngine<'_> {
    /// Living actors in the order they take their turns within a tick.
    pub fn turn_order(&self) -> Vec<EntityId> {
        self.state
            .entities
            .living_actors()
            .map(|actor| actor.id)
            .collect()
    }

    /// Adds one tick of speed and quickness to `actor`; returns whether it
    /// may act. Dead actors accumulate nothing.
    pub fn accumulate(&mut self, actor: EntityId) -> Result<bool, ActionError> {
        let state = self
            .state
            .entities
            .actor(actor)
            .ok_or(ActionError::ActorNotFound(actor))?;
        if !state.is_alive() {
            return Ok(false);
        }
        let effective = state.effective_stats(&self.env)?;

        let threshold = self.config.turn_threshold;
        let stats = &mut self
            .state
            .entities
            .actor_mut(actor)
            .ok_or(ActionError::ActorNotFound(actor))?
            .stats;
        stats.quickness.accumulate(effective.qn, threshold);
        let ready = stats.movement.accumulate(effective.ms, threshold);

        tracing::debug!(
            "{} meters: movement {}, quickness {}",
            actor,
            stats.movement.remainder(),
            stats.quickness.remainder()
        );
        Ok(ready)
    }

    /// Runs [`Self::accumulate`] for every living actor.
    pub fn accumulate_all(&mut self) -> Result<(), ActionError> {
        for actor in self.turn_order() {
            self.accumulate(actor)?;
        }
        Ok(())
    }

    pub fn can_act(&self, actor: EntityId) -> bool {
        self.state.entities.actor(actor).is_some_and(|state| {
            state.is_alive() && state.stats.movement.is_ready(self.config.turn_threshold)
        })
    }

    /// Spends one turn from the movement meter. Does nothing when the actor
    /// cannot act.
    pub fn consume_turn(&mut self, actor: EntityId) {
        if !self.can_act(actor) {
            return;
        }
        let threshold = self.config.turn_threshold;
        if let Some(state) = self.state.entities.actor_mut(actor) {
            state.stats.movement.consume(threshold);
        }
    }

    /// Whole turns banked in the movement meter.
    pub fn extra_moves(&self, actor: EntityId) -> u32 {
        self.state.entities.actor(actor).map_or(0, |state| {
            state.stats.movement.extra_moves(self.config.turn_threshold)
        })
    }

    /// Whether the quickness meter allows a quick action.
    pub fn can_act_quickly(&self, actor: EntityId) -> bool {
        self.state.entities.actor(actor).is_some_and(|state| {
            state.is_alive() && state.stats.quickness.is_ready(self.config.turn_threshold)
        })
    }

    pub fn consume_quickness(&mut self, actor: EntityId) {
        if !self.can_act_quickly(actor) {
            return;
        }
        let threshold = self.config.turn_threshold;
        if let Some(state) = self.state.entities.actor_mut(actor) {
            state.stats.quickness.consume(threshold);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::env::ActorTemplate;
    use crate::state::{EntityId, Position};
    use crate::testing::{self, Fixture};

    #[test]
    fn normal_speed_acts_every_tick_without_banking() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        for _ in 0..5 {
            let mut engine = fx.engine();
            assert!(engine.accumulate(EntityId::PLAYER).unwrap());
            assert!(engine.can_act(EntityId::PLAYER));
            engine.consume_turn(EntityId::PLAYER);
            assert!(!engine.can_act(EntityId::PLAYER));
            assert_eq!(
                engine.state().player().unwrap().stats.movement.remainder(),
                0
            );
        }
    }

    #[test]
    fn fast_actor_banks_extra_turns() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let runner: ActorTemplate = testing::goblin().with_speed(150, 100);
        let runner = fx.spawn(&runner, Position::new(5, 5));
        let mut engine = fx.engine();

        engine.accumulate(runner).unwrap();
        engine.consume_turn(runner);
        engine.accumulate(runner).unwrap();
        let meter = engine.state().entities.actor(runner).unwrap().stats.movement;
        assert_eq!(meter.remainder(), 200);
        assert_eq!(engine.extra_moves(runner), 2);

        engine.consume_turn(runner);
        assert_eq!(engine.extra_moves(runner), 1);
        assert!(engine.can_act(runner));
    }

    #[test]
    fn slow_actor_skips_ticks() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let slug = fx.spawn(&testing::goblin().with_speed(50, 50), Position::new(5, 5));
        let mut engine = fx.engine();

        assert!(!engine.accumulate(slug).unwrap());
        engine.consume_turn(slug);
        assert!(engine.accumulate(slug).unwrap());
        assert!(engine.can_act_quickly(slug));
        engine.consume_quickness(slug);
        assert!(!engine.can_act_quickly(slug));
        assert!(engine.can_act(slug));
    }

    #[test]
    fn equipment_speed_counts() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let boots = fx
            .state
            .give_item(EntityId::PLAYER, testing::BOOTS)
            .unwrap();
        fx.state
            .entities
            .actor_mut(EntityId::PLAYER)
            .unwrap()
            .equipment
            .armor = Some(boots);

        let mut engine = fx.engine();
        engine.accumulate(EntityId::PLAYER).unwrap();
        assert_eq!(engine.extra_moves(EntityId::PLAYER), 1);
        assert_eq!(
            engine.state().player().unwrap().stats.movement.remainder(),
            150
        );
    }

    #[test]
    fn dead_actors_never_act() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let goblin = fx.spawn(&testing::goblin(), Position::new(5, 5));
        fx.state.entities.actor_mut(goblin).unwrap().mark_dead();
        let mut engine = fx.engine();

        assert!(!engine.accumulate(goblin).unwrap());
        assert!(!engine.can_act(goblin));
        assert_eq!(engine.turn_order(), vec![EntityId::PLAYER]);
    }
}
