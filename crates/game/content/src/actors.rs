//! Built-in actor templates.

use barbarian_core::{ActorTemplate, BehaviorKind};

/// Named actor templates, looked up by id (`"goblin"`, `"troll"`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorCatalog {
    pub actors: Vec<(String, ActorTemplate)>,
}

impl ActorCatalog {
    pub fn new(actors: Vec<(String, ActorTemplate)>) -> Self {
        Self { actors }
    }

    /// Every stock template.
    pub fn builtin() -> Self {
        let actors = [
            ("player", player()),
            ("npc", npc()),
            ("goblin", goblin()),
            ("goblin_fighter", goblin_fighter()),
            ("goblin_archer", goblin_archer()),
            ("skeleton", skeleton()),
            ("death_fiend", death_fiend()),
            ("orc", orc()),
            ("troll", troll()),
            ("boss", boss()),
        ];
        Self::new(
            actors
                .into_iter()
                .map(|(id, template)| (id.to_string(), template))
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&ActorTemplate> {
        self.actors
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, template)| template)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.actors.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

pub fn player() -> ActorTemplate {
    ActorTemplate::new("Player", 30, 10, 2, 0, BehaviorKind::PlayerControlled).with_inventory(26)
}

/// A friendly wanderer that joins the party when spoken to.
pub fn npc() -> ActorTemplate {
    ActorTemplate::new("NPC", 30, 14, 2, 0, BehaviorKind::FriendlyFollower)
}

pub fn goblin() -> ActorTemplate {
    ActorTemplate::new("Goblin", 6, 6, 2, 1, BehaviorKind::HostileMelee)
}

pub fn goblin_fighter() -> ActorTemplate {
    ActorTemplate::new("Goblin Fighter", 8, 6, 3, 2, BehaviorKind::HostileMelee)
}

pub fn goblin_archer() -> ActorTemplate {
    ActorTemplate::new(
        "Goblin Archer",
        4,
        6,
        3,
        2,
        BehaviorKind::HostileRanged {
            max_range: 6,
            min_range: 3,
        },
    )
}

pub fn skeleton() -> ActorTemplate {
    ActorTemplate::new("Skeleton", 4, 6, 3, 2, BehaviorKind::HostileMelee)
}

pub fn death_fiend() -> ActorTemplate {
    ActorTemplate::new("Death Fiend", 20, 10, 5, 5, BehaviorKind::HostileMelee)
}

pub fn orc() -> ActorTemplate {
    ActorTemplate::new("Orc", 10, 13, 3, 3, BehaviorKind::HostileMelee)
}

pub fn troll() -> ActorTemplate {
    ActorTemplate::new("Troll", 16, 16, 6, 6, BehaviorKind::HostileMelee)
}

pub fn boss() -> ActorTemplate {
    ActorTemplate::new("Boss", 30, 18, 10, 10, BehaviorKind::HostileMelee)
}
