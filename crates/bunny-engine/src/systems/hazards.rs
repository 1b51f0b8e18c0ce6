use glam::Vec2;

use crate::actor::state::{ActorId, ActorPair};
use crate::api::types::GameEvent;
use crate::core::geometry::Aabb;

/// The pickups of a loaded level with their collected flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupSet {
    rects: Vec<Aabb>,
    collected: Vec<bool>,
    count: u32,
}

impl PickupSet {
    /// All pickups start uncollected.
    pub fn new(rects: &[Aabb]) -> Self {
        Self {
            rects: rects.to_vec(),
            collected: vec![false; rects.len()],
            count: 0,
        }
    }

    pub fn collected_count(&self) -> u32 {
        self.count
    }

    pub fn total(&self) -> usize {
        self.rects.len()
    }

    pub fn is_collected(&self, index: usize) -> bool {
        self.collected.get(index).copied().unwrap_or(false)
    }

    /// Every pickup with its collected flag, in level order.
    pub fn iter(&self) -> impl Iterator<Item = (&Aabb, bool)> {
        self.rects.iter().zip(self.collected.iter().copied())
    }
}

/// If either actor touches any hazard, send both back to spawn.
/// Returns the actor that triggered the reset.
///
/// Runs every tick the overlap persists; repeated resets at spawn are no-ops.
pub fn check_hazards(
    actors: &mut ActorPair,
    hazards: &[Aabb],
    spawns: [Vec2; 2],
    events: &mut Vec<GameEvent>,
) -> Option<ActorId> {
    let touched_by = ActorId::ALL
        .into_iter()
        .find(|&id| {
            let body = actors[id].aabb();
            hazards.iter().any(|h| h.overlaps(&body))
        })?;

    log::debug!("hazard: touched by {:?}, resetting both actors", touched_by);
    actors.respawn(spawns);
    events.push(GameEvent::HazardReset { touched_by });
    Some(touched_by)
}

/// Consume every uncollected pickup overlapped by either actor.
pub fn collect_pickups(actors: &ActorPair, pickups: &mut PickupSet, events: &mut Vec<GameEvent>) {
    let bodies = actors.aabbs();
    for (index, rect) in pickups.rects.iter().enumerate() {
        if pickups.collected[index] {
            continue;
        }
        let Some(by) = ActorId::ALL.into_iter().find(|id| bodies[id.index()].overlaps(rect)) else {
            continue;
        };
        pickups.collected[index] = true;
        pickups.count += 1;
        log::debug!("pickup {} collected by {:?} ({} total)", index, by, pickups.count);
        events.push(GameEvent::PickupCollected {
            index,
            by,
            collected: pickups.count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAWNS: [Vec2; 2] = [Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0)];
    const SPIKE: Aabb = Aabb::new(500.0, 520.0, 40.0, 40.0);

    fn pair_at(a: Vec2, b: Vec2) -> ActorPair {
        ActorPair::spawn([a, b], Vec2::new(40.0, 60.0))
    }

    #[test]
    fn hazard_resets_both_actors() {
        let mut p = pair_at(Vec2::new(800.0, 300.0), Vec2::new(510.0, 470.0));
        p[ActorId::A].velocity = Vec2::new(5.0, 3.0);
        p[ActorId::B].velocity = Vec2::new(-5.0, 8.0);
        p[ActorId::A].holding = Some(ActorId::B);
        let mut events = Vec::new();

        let hit = check_hazards(&mut p, &[SPIKE], SPAWNS, &mut events);

        assert_eq!(hit, Some(ActorId::B));
        for id in ActorId::ALL {
            assert_eq!(p[id].position, SPAWNS[id.index()]);
            assert_eq!(p[id].velocity, Vec2::ZERO);
            assert!(p[id].holding.is_none());
        }
        assert_eq!(events, vec![GameEvent::HazardReset { touched_by: ActorId::B }]);
    }

    #[test]
    fn no_hazard_no_reset() {
        let mut p = pair_at(Vec2::new(800.0, 300.0), Vec2::new(200.0, 470.0));
        let before = p.clone();
        let mut events = Vec::new();
        assert_eq!(check_hazards(&mut p, &[SPIKE], SPAWNS, &mut events), None);
        assert_eq!(p, before);
        assert!(events.is_empty());
    }

    #[test]
    fn lingering_in_hazard_is_idempotent() {
        let spawn_spike = Aabb::new(90.0, 90.0, 40.0, 40.0);
        let mut p = pair_at(SPAWNS[0], SPAWNS[1]);
        let mut events = Vec::new();
        check_hazards(&mut p, &[spawn_spike], SPAWNS, &mut events);
        let once = p.clone();
        check_hazards(&mut p, &[spawn_spike], SPAWNS, &mut events);
        assert_eq!(p, once);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn pickup_is_collected_once() {
        let mut pickups = PickupSet::new(&[Aabb::new(390.0, 470.0, 20.0, 20.0), Aabb::new(0.0, 0.0, 5.0, 5.0)]);
        let p = pair_at(Vec2::new(380.0, 440.0), Vec2::new(385.0, 440.0));
        let mut events = Vec::new();

        collect_pickups(&p, &mut pickups, &mut events);
        collect_pickups(&p, &mut pickups, &mut events);
        collect_pickups(&p, &mut pickups, &mut events);

        assert_eq!(pickups.collected_count(), 1);
        assert!(pickups.is_collected(0));
        assert!(!pickups.is_collected(1));
        assert_eq!(
            events,
            vec![GameEvent::PickupCollected { index: 0, by: ActorId::A, collected: 1 }]
        );
    }

    #[test]
    fn second_actor_can_collect() {
        let mut pickups = PickupSet::new(&[Aabb::new(700.0, 300.0, 20.0, 20.0)]);
        let p = pair_at(Vec2::new(0.0, 0.0), Vec2::new(690.0, 280.0));
        let mut events = Vec::new();
        collect_pickups(&p, &mut pickups, &mut events);
        assert_eq!(pickups.collected_count(), 1);
        assert_eq!(
            events,
            vec![GameEvent::PickupCollected { index: 0, by: ActorId::B, collected: 1 }]
        );
    }
}
