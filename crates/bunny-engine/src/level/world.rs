use crate::actor::state::{ActorId, ActorPair};
use crate::api::config::{GameConfig, GoalRule};
use crate::api::types::GameEvent;
use crate::core::geometry::Aabb;
use crate::core::time::ticks_to_seconds;
use crate::input::controls::InputSnapshot;
use crate::level::descriptor::LevelDescriptor;
use crate::systems::hazards::{check_hazards, collect_pickups, PickupSet};
use crate::systems::physics;

/// A level being played: the static descriptor plus everything that changes
/// while playing it.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelState {
    index: usize,
    descriptor: LevelDescriptor,
    pub actors: ActorPair,
    pickups: PickupSet,
    ticks: u64,
}

impl LevelState {
    /// Fresh state for `descriptor`: actors at spawn, nothing collected,
    /// clock at zero.
    pub fn load(index: usize, descriptor: &LevelDescriptor, config: &GameConfig) -> Self {
        Self {
            index,
            descriptor: descriptor.clone(),
            actors: ActorPair::spawn(descriptor.spawns, config.actor_size),
            pickups: PickupSet::new(&descriptor.pickups),
            ticks: 0,
        }
    }

    /// Run one tick of play. Returns true when both actors reached the goal.
    pub fn step(&mut self, input: &InputSnapshot, config: &GameConfig, events: &mut Vec<GameEvent>) -> bool {
        self.ticks += 1;
        physics::step(&mut self.actors, &self.descriptor.obstacles, input, config, events);
        check_hazards(&mut self.actors, &self.descriptor.hazards, self.descriptor.spawns, events);
        collect_pickups(&self.actors, &mut self.pickups, events);
        self.goal_reached(config.goal_rule)
    }

    /// Both actors at the goal in the same tick. One alone never counts.
    pub fn goal_reached(&self, rule: GoalRule) -> bool {
        let goal = &self.descriptor.goal;
        ActorId::ALL.iter().all(|&id| {
            let body = self.actors[id].aabb();
            match rule {
                GoalRule::Overlap => goal.overlaps(&body),
                GoalRule::Contain => goal.contains(&body),
            }
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based, for display.
    pub fn level_number(&self) -> usize {
        self.index + 1
    }

    pub fn descriptor(&self) -> &LevelDescriptor {
        &self.descriptor
    }

    pub fn pickups(&self) -> &PickupSet {
        &self.pickups
    }

    pub fn obstacles(&self) -> &[Aabb] {
        &self.descriptor.obstacles
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed_seconds(&self, dt: f32) -> f32 {
        ticks_to_seconds(self.ticks, dt)
    }
}
