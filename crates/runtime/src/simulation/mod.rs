//! Headless simulation driver that owns the authoritative [`GameState`].
//!
//! A [`Simulation`] holds the state, the content oracles and the message log.
//! Each [`Simulation::tick`] is one world tick: every living actor banks its
//! speed, then each actor that can act spends turns until its meter drops
//! below the threshold. The player's actions come from an [`ActionProvider`];
//! everyone else asks its behavior through the engine.

pub mod visibility;

use barbarian_content::{ActorCatalog, ArenaFloors, ItemCatalog};
use barbarian_core::env::{RollContext, compute_seed};
use barbarian_core::{
    ActionError, ColorHint, EntityId, FloorGenerator, FloorId, GameConfig, GameEngine, GameEnv,
    GameState, MessageSink, PcgRng, WorldState,
};

use crate::api::{ActionProvider, Result, RuntimeError, WaitActionProvider};
use crate::config::SimConfig;
use crate::message::MessageLog;

/// What happened during one world tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Turns taken by all actors.
    pub turns: u32,
    /// Turns whose action was impossible and therefore had no effect.
    pub wasted: u32,
}

pub struct Simulation {
    state: GameState,
    config: GameConfig,
    items: ItemCatalog,
    floors: ArenaFloors,
    rng: PcgRng,
    messages: MessageLog,
    player: Box<dyn ActionProvider>,
    sight_radius: u32,
    ticks: u64,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// World ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn player_alive(&self) -> bool {
        self.state.player().is_some_and(|player| player.is_alive())
    }

    pub fn set_player_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.player = Box::new(provider);
    }

    /// Runs one world tick.
    ///
    /// Impossible player actions become messages and still spend the turn;
    /// impossible AI actions are logged and skipped. Any other error aborts
    /// the tick.
    pub fn tick(&mut self) -> Result<TickSummary> {
        let env = GameEnv::with_all(&self.items, &self.floors, &self.rng);
        let order = {
            let mut engine = GameEngine::new(&mut self.state, env, &self.config);
            engine.accumulate_all()?;
            engine.turn_order()
        };

        let mut summary = TickSummary::default();
        for actor in order {
            loop {
                let mut engine = GameEngine::new(&mut self.state, env, &self.config);
                if !engine.can_act(actor) {
                    break;
                }

                let acted = if actor.is_player() {
                    let action = self.player.provide_action(actor, engine.state())?;
                    match engine.execute(action, &mut self.messages) {
                        Ok(_) => true,
                        Err(ActionError::Impossible(reason)) => {
                            tracing::debug!("player action impossible: {}", reason);
                            self.messages.emit(reason.reason, ColorHint::Impossible);
                            false
                        }
                        Err(error) => return Err(error.into()),
                    }
                } else {
                    engine.take_ai_turn(actor, &mut self.messages)?.is_some()
                };
                engine.consume_turn(actor);

                summary.turns += 1;
                if !acted {
                    summary.wasted += 1;
                }
                refresh_view(&mut self.state, self.sight_radius);
            }
        }

        self.ticks += 1;
        tracing::debug!(
            "tick {} done: {} turns, {} wasted",
            self.ticks,
            summary.turns,
            summary.wasted
        );
        Ok(summary)
    }

    /// Runs up to `ticks` world ticks, stopping early once the player dies.
    /// Returns how many ticks ran.
    pub fn run(&mut self, ticks: u64) -> Result<u64> {
        let mut ran = 0;
        while ran < ticks && self.player_alive() {
            self.tick()?;
            ran += 1;
        }
        if !self.player_alive() {
            tracing::info!("player died after {} ticks", self.ticks);
        }
        Ok(ran)
    }
}

fn refresh_view(state: &mut GameState, radius: u32) {
    if let Some(origin) = state.player().map(|player| player.position) {
        visibility::refresh(&mut state.world.map, origin, radius);
    }
}

/// Builder for [`Simulation`].
pub struct SimulationBuilder {
    config: GameConfig,
    actors: ActorCatalog,
    items: ItemCatalog,
    floors: Option<ArenaFloors>,
    state: Option<GameState>,
    seed: u64,
    player: Box<dyn ActionProvider>,
    message_capacity: usize,
    sight_radius: u32,
}

impl SimulationBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            actors: ActorCatalog::builtin(),
            items: ItemCatalog::builtin(),
            floors: None,
            state: None,
            seed: 0,
            player: Box::new(WaitActionProvider),
            message_capacity: MessageLog::DEFAULT_CAPACITY,
            sight_radius: SimConfig::DEFAULT_SIGHT_RADIUS,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn actors(mut self, actors: ActorCatalog) -> Self {
        self.actors = actors;
        self
    }

    pub fn items(mut self, items: ItemCatalog) -> Self {
        self.items = items;
        self
    }

    pub fn floors(mut self, floors: ArenaFloors) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Starts from a prepared state instead of generating the city.
    pub fn state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.player = Box::new(provider);
        self
    }

    pub fn message_capacity(mut self, capacity: usize) -> Self {
        self.message_capacity = capacity;
        self
    }

    pub fn sight_radius(mut self, radius: u32) -> Self {
        self.sight_radius = radius;
        self
    }

    /// Applies the environment-derived settings that concern the simulation.
    pub fn sim_config(self, config: &SimConfig) -> Self {
        let builder = self
            .message_capacity(config.message_capacity)
            .sight_radius(config.sight_radius);
        match config.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }

    pub fn build(self) -> Result<Simulation> {
        let floors = self
            .floors
            .unwrap_or_else(|| ArenaFloors::new(self.actors.clone()));
        let state = match self.state {
            Some(state) => state,
            None => Self::city(&self.actors, &floors, self.seed)?,
        };

        let mut simulation = Simulation {
            state,
            config: self.config,
            items: self.items,
            floors,
            rng: PcgRng,
            messages: MessageLog::new(self.message_capacity),
            player: self.player,
            sight_radius: self.sight_radius,
            ticks: 0,
        };
        refresh_view(&mut simulation.state, simulation.sight_radius);
        Ok(simulation)
    }

    fn city(actors: &ActorCatalog, floors: &ArenaFloors, seed: u64) -> Result<GameState> {
        let template = actors
            .get("player")
            .ok_or_else(|| RuntimeError::MissingTemplate("player".to_string()))?;
        let floor_seed = compute_seed(seed, 0, EntityId::PLAYER.0, RollContext::Floor);
        let generated = floors.generate(FloorId::CITY, floor_seed)?;

        let mut state = GameState::with_seed(seed, WorldState::new(generated.map, FloorId::CITY));
        state.add_player(template, generated.entry);
        for spawn in &generated.actors {
            state.spawn_actor(&spawn.template, spawn.position);
        }
        for item in &generated.items {
            state.spawn_item(item.handle, item.position);
        }

        tracing::info!(
            "city generated: seed={}, {} actors, {} items",
            seed,
            state.entities.actors.len(),
            state.entities.items.len()
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use barbarian_core::{Action, MapDimensions, Position, TileGrid};

    use super::*;
    use crate::api::ScriptedProvider;

    fn arena_state(player: Position) -> GameState {
        let map = TileGrid::walled_room(MapDimensions::new(12, 12));
        let mut state = GameState::new(WorldState::new(map, FloorId(1)));
        state.add_player(&barbarian_content::actors::player(), player);
        state
    }

    #[test]
    fn builds_the_city_around_the_player() {
        let simulation = Simulation::builder().seed(5).build().unwrap();
        let state = simulation.state();
        let player = state.player().unwrap();

        assert_eq!(state.world.current_floor, FloorId::CITY);
        assert_eq!(player.position, state.world.map.center());
        assert!(state.world.map.is_visible(player.position));
        assert_eq!(state.game_seed, 5);
    }

    #[test]
    fn missing_player_template_fails() {
        let result = Simulation::builder().actors(ActorCatalog::default()).build();
        assert!(matches!(result, Err(RuntimeError::MissingTemplate(_))));
    }

    #[test]
    fn impossible_player_actions_become_messages() {
        let mut simulation = Simulation::builder()
            .state(arena_state(Position::new(1, 1)))
            .player_provider(ScriptedProvider::new([Action::move_by(
                EntityId::PLAYER,
                -1,
                0,
            )]))
            .build()
            .unwrap();

        let summary = simulation.tick().unwrap();

        assert_eq!(summary, TickSummary { turns: 1, wasted: 1 });
        let last = simulation.messages().recent(1).next().unwrap();
        assert_eq!(last.color, ColorHint::Impossible);
        assert_eq!(simulation.state().nonce, 0);
    }

    #[test]
    fn every_ready_actor_takes_a_turn() {
        let mut state = arena_state(Position::new(2, 2));
        let goblin = state.spawn_actor(&barbarian_content::actors::goblin(), Position::new(8, 8));
        let mut simulation = Simulation::builder().state(state).build().unwrap();

        let summary = simulation.tick().unwrap();

        assert_eq!(summary.turns, 2);
        assert_eq!(simulation.ticks(), 1);
        let meter = simulation
            .state()
            .entities
            .actor(goblin)
            .unwrap()
            .stats
            .movement;
        assert_eq!(meter.remainder(), 0);
    }

    #[test]
    fn run_stops_when_the_player_dies() {
        let mut state = arena_state(Position::new(2, 2));
        state
            .entities
            .actor_mut(EntityId::PLAYER)
            .unwrap()
            .mark_dead();
        let mut simulation = Simulation::builder().state(state).build().unwrap();

        assert_eq!(simulation.run(10).unwrap(), 0);
    }
}
