//! Discrete, position-based collision correction.
//!
//! Runs once per tick after integration. There is no swept test: an actor
//! moving further than an obstacle's thickness in one tick passes through it.

use crate::actor::state::ActorState;
use crate::core::geometry::Aabb;

/// Correct `actor` against static obstacles, in slice order.
///
/// Each overlapping obstacle is tested against the actor's current box, so
/// an earlier correction can move the actor clear of a later obstacle.
/// Falling actors land on the obstacle top; rising actors bump the underside.
pub fn resolve_obstacles(actor: &mut ActorState, obstacles: &[Aabb]) {
    for obstacle in obstacles {
        if !actor.aabb().overlaps(obstacle) {
            continue;
        }
        if actor.velocity.y > 0.0 {
            actor.position.y = obstacle.top() - actor.height();
            actor.velocity.y = 0.0;
            actor.grounded = true;
        } else if actor.velocity.y < 0.0 {
            actor.position.y = obstacle.bottom();
            actor.velocity.y = 0.0;
        }
    }
}

/// Treat the other actor as a one-way platform: only a falling actor that
/// overlaps it is lifted on top. Side-by-side overlap is left alone.
pub fn resolve_against_actor(actor: &mut ActorState, other: &Aabb) {
    if actor.velocity.y > 0.0 && actor.aabb().overlaps(other) {
        actor.position.y = other.top() - actor.height();
        actor.velocity.y = 0.0;
        actor.grounded = true;
    }
}

/// An actor at rest whose feet touch a support stays grounded even though
/// touching boxes do not overlap.
fn settle_resting_contact<'a>(actor: &mut ActorState, supports: impl IntoIterator<Item = &'a Aabb>) {
    if actor.grounded || actor.velocity.y != 0.0 {
        return;
    }
    let feet = actor.aabb();
    if supports.into_iter().any(|s| feet.rests_on(s)) {
        actor.grounded = true;
    }
}

/// Full collision pass for one free actor. `other` is the other actor's box,
/// or `None` when the two are linked by a carry.
pub fn resolve_collisions(actor: &mut ActorState, obstacles: &[Aabb], other: Option<&Aabb>) {
    actor.grounded = false;
    resolve_obstacles(actor, obstacles);
    if let Some(other) = other {
        resolve_against_actor(actor, other);
    }
    settle_resting_contact(actor, obstacles.iter().chain(other));
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn actor_at(x: f32, y: f32, vy: f32) -> ActorState {
        let mut a = ActorState::spawn(Vec2::new(x, y), Vec2::new(40.0, 60.0));
        a.velocity.y = vy;
        a
    }

    const FLOOR: Aabb = Aabb::new(0.0, 560.0, 1000.0, 40.0);

    #[test]
    fn falling_actor_lands_on_top() {
        let mut a = actor_at(100.0, 505.0, 6.0);
        resolve_collisions(&mut a, &[FLOOR], None);
        assert_eq!(a.position.y, 500.0);
        assert_eq!(a.velocity.y, 0.0);
        assert!(a.grounded);
    }

    #[test]
    fn rising_actor_bumps_ceiling_without_grounding() {
        let ledge = Aabb::new(300.0, 500.0, 200.0, 20.0);
        let mut a = actor_at(320.0, 515.0, -8.0);
        resolve_collisions(&mut a, &[ledge], None);
        assert_eq!(a.position.y, 520.0);
        assert_eq!(a.velocity.y, 0.0);
        assert!(!a.grounded);
    }

    #[test]
    fn grounded_implies_zero_vertical_velocity() {
        for vy in [0.6_f32, 3.0, 11.9, 20.0] {
            let mut a = actor_at(100.0, 560.0 - 60.0 + vy * 0.5, vy);
            resolve_collisions(&mut a, &[FLOOR], None);
            if a.grounded {
                assert_eq!(a.velocity.y, 0.0);
            }
        }
    }

    #[test]
    fn resting_contact_keeps_actor_grounded() {
        let mut a = actor_at(100.0, 500.0, 0.0);
        resolve_collisions(&mut a, &[FLOOR], None);
        assert!(a.grounded);
        assert_eq!(a.position.y, 500.0);
    }

    #[test]
    fn walking_off_a_ledge_ungrounds() {
        let ledge = Aabb::new(300.0, 500.0, 200.0, 20.0);
        let mut a = actor_at(520.0, 440.0, 0.0);
        a.grounded = true;
        resolve_collisions(&mut a, &[ledge], None);
        assert!(!a.grounded);
    }

    #[test]
    fn obstacles_resolve_in_slice_order() {
        // Two stacked slabs both overlapped by a falling actor: the first one
        // listed decides where it lands, the second no longer overlaps.
        let upper = Aabb::new(0.0, 500.0, 200.0, 10.0);
        let lower = Aabb::new(0.0, 505.0, 200.0, 10.0);

        let mut a = actor_at(50.0, 450.0, 5.0);
        resolve_collisions(&mut a, &[upper, lower], None);
        assert_eq!(a.position.y, 440.0);

        let mut b = actor_at(50.0, 450.0, 5.0);
        resolve_collisions(&mut b, &[lower, upper], None);
        assert_eq!(b.position.y, 445.0);
    }

    #[test]
    fn falling_onto_other_actor_stands_on_it() {
        let other = Aabb::new(100.0, 440.0, 40.0, 60.0);
        let mut a = actor_at(110.0, 390.0, 4.0);
        resolve_collisions(&mut a, &[], Some(&other));
        assert_eq!(a.position.y, 380.0);
        assert!(a.grounded);
        assert_eq!(a.velocity.y, 0.0);
    }

    #[test]
    fn side_by_side_actors_pass_through() {
        let other = Aabb::new(100.0, 440.0, 40.0, 60.0);
        let mut a = actor_at(120.0, 440.0, 0.0);
        a.velocity.x = 5.0;
        resolve_collisions(&mut a, &[], Some(&other));
        assert_eq!(a.position, Vec2::new(120.0, 440.0));
        assert!(!a.grounded);

        let mut rising = actor_at(120.0, 450.0, -5.0);
        resolve_collisions(&mut rising, &[], Some(&other));
        assert_eq!(rising.position.y, 450.0);
    }

    #[test]
    fn linked_actors_skip_platform_test() {
        let mut a = actor_at(110.0, 390.0, 4.0);
        resolve_collisions(&mut a, &[], None);
        assert_eq!(a.position.y, 390.0);
        assert!(!a.grounded);
    }

    #[test]
    fn fast_actor_tunnels_through_thin_platform() {
        // Known limitation of discrete resolution: the actor was above a
        // 10-unit slab last tick (y = 231) and integration carried it past.
        let thin = Aabb::new(0.0, 300.0, 200.0, 10.0);
        let mut a = actor_at(50.0, 231.0 + 80.0, 80.0);
        resolve_collisions(&mut a, &[thin], None);
        assert_eq!(a.position.y, 311.0);
        assert!(!a.grounded);
    }
}
