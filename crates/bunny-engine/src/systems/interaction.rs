use glam::Vec2;

use crate::actor::state::{ActorId, ActorPair};
use crate::api::types::GameEvent;
use crate::input::controls::InputSnapshot;

/// Re-evaluate the carry relationship for this tick.
///
/// Releases are processed for both actors before any new hold begins, so a
/// carried actor whose carrier lets go can grab back in the same tick.
/// New holds are considered in `ActorId::ALL` order; when both actors try to
/// grab each other at once, A wins.
pub fn resolve_carry(actors: &mut ActorPair, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
    for id in ActorId::ALL {
        actors[id].grabbing = input.actor(id).grabbing();
    }

    for id in ActorId::ALL {
        let actor = &mut actors[id];
        if !actor.grabbing && actor.holding.take().is_some() {
            log::debug!("carry: {:?} released", id);
            events.push(GameEvent::CarryEnded { carrier: id });
        }
    }

    for id in ActorId::ALL {
        let other = id.other();
        let can_begin = actors[id].grabbing
            && actors[id].holding.is_none()
            && !actors.is_held(id)
            && !actors.is_held(other)
            && actors[id].aabb().overlaps(&actors[other].aabb());
        if can_begin {
            actors[id].holding = Some(other);
            log::debug!("carry: {:?} picked up {:?}", id, other);
            events.push(GameEvent::CarryStarted { carrier: id });
        }
    }

    debug_assert!(actors.carry_invariant_holds(), "carry relationship became mutual");
}

/// Stack each carried actor on top of its carrier and slave its velocity.
pub fn apply_carry(actors: &mut ActorPair) {
    for carrier in ActorId::ALL {
        let Some(passenger) = actors[carrier].holding else {
            continue;
        };
        let (pos, height, vx) = {
            let c = &actors[carrier];
            (c.position, c.height(), c.velocity.x)
        };
        let p = &mut actors[passenger];
        p.position = pos + Vec2::new(0.0, -height);
        p.velocity = Vec2::new(vx, 0.0);
        p.grounded = false;
    }
}
