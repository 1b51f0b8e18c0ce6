use glam::Vec2;

use crate::actor::state::{ActorId, ActorPair};
use crate::api::config::GameConfig;
use crate::api::types::GameEvent;
use crate::core::geometry::Aabb;
use crate::input::controls::InputSnapshot;
use crate::systems::collision::resolve_collisions;
use crate::systems::interaction::{apply_carry, resolve_carry};
use crate::systems::movement::update_velocity;

/// Advance both actors by one tick.
///
/// Order:
///   1. Velocity update (actors carried at the start of the tick are frozen)
///   2. Carry resolution
///   3. Integration + collision for each free actor, A then B
///   4. Carried actors snapped on top of their carriers
pub fn step(
    actors: &mut ActorPair,
    obstacles: &[Aabb],
    input: &InputSnapshot,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    // Read before anyone's `holding` changes this tick.
    let held_at_start = ActorId::ALL.map(|id| actors.is_held(id));

    for id in ActorId::ALL {
        if held_at_start[id.index()] {
            actors[id].velocity = Vec2::ZERO;
        } else {
            update_velocity(&mut actors[id], input.actor(id), config);
        }
    }

    resolve_carry(actors, input, events);

    for id in ActorId::ALL {
        if actors.is_held(id) {
            continue;
        }
        let linked = actors[id].holding.is_some();
        let (actor, other) = actors.split_mut(id);
        let other_box = (!linked).then(|| other.aabb());
        let velocity = actor.velocity;
        actor.position += velocity;
        resolve_collisions(actor, obstacles, other_box.as_ref());
    }

    apply_carry(actors);
}
