use crate::actor::state::ActorId;
use crate::core::geometry::Aabb;
use crate::level::world::LevelState;
use crate::renderer::instance::{flags, RenderBuffer, RenderInstance, ShapeKind};

const OBSTACLE_RGB: [u8; 3] = [0, 200, 0];
const HAZARD_RGB: [u8; 3] = [200, 0, 0];
const PICKUP_RGB: [u8; 3] = [255, 200, 0];
const GOAL_RGB: [u8; 3] = [0, 0, 0];

fn instance(rect: &Aabb, kind: ShapeKind, flag_bits: u32, rgb: [u8; 3]) -> RenderInstance {
    RenderInstance {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        rotation: 0.0,
        kind: kind.as_f32(),
        flags: flag_bits as f32,
        rgb: RenderInstance::pack_rgb(rgb),
    }
}

/// Write everything visible in `level` into `buffer`: obstacles, hazards,
/// pickups (collected ones flagged), the goal, then both actors.
pub fn build_render_buffer(level: &LevelState, buffer: &mut RenderBuffer) {
    buffer.clear();
    let descriptor = level.descriptor();

    for rect in &descriptor.obstacles {
        buffer.push(instance(rect, ShapeKind::Obstacle, 0, OBSTACLE_RGB));
    }
    for rect in &descriptor.hazards {
        buffer.push(instance(rect, ShapeKind::Hazard, 0, HAZARD_RGB));
    }
    for (rect, collected) in level.pickups().iter() {
        let bits = if collected { flags::COLLECTED } else { 0 };
        buffer.push(instance(rect, ShapeKind::Pickup, bits, PICKUP_RGB));
    }
    buffer.push(instance(&descriptor.goal, ShapeKind::Goal, 0, GOAL_RGB));

    buffer.mark_actor_split();
    for id in ActorId::ALL {
        let actor = &level.actors[id];
        let mut bits = 0;
        if actor.grounded {
            bits |= flags::GROUNDED;
        }
        if actor.holding.is_some() {
            bits |= flags::HOLDING;
        }
        if level.actors.is_held(id) {
            bits |= flags::HELD;
        }
        let mut inst = instance(&actor.aabb(), ShapeKind::Actor, bits, id.color());
        inst.rotation = actor.angle.to_radians();
        buffer.push(inst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GameConfig;
    use crate::level::builtin::first_steps;

    fn level() -> LevelState {
        LevelState::load(0, &first_steps(), &GameConfig::default())
    }

    #[test]
    fn buffer_lists_level_then_actors() {
        let level = level();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&level, &mut buffer);

        // 4 obstacles + 2 spikes + 2 pickups + goal, then 2 actors.
        assert_eq!(buffer.actor_split, 9);
        assert_eq!(buffer.instance_count(), 11);
        assert_eq!(buffer.instances[0].kind, ShapeKind::Obstacle.as_f32());
        assert_eq!(buffer.instances[8].kind, ShapeKind::Goal.as_f32());
        assert_eq!(buffer.instances[8].x, 900.0);

        let a = buffer.instances[9];
        assert_eq!(a.kind, ShapeKind::Actor.as_f32());
        assert_eq!((a.x, a.y, a.width, a.height), (100.0, 100.0, 40.0, 60.0));
        assert_eq!(a.rgb, RenderInstance::pack_rgb(ActorId::A.color()));
        assert_ne!(buffer.instances[10].rgb, a.rgb);
    }

    #[test]
    fn actor_flags_and_rotation() {
        let mut level = level();
        level.actors[ActorId::A].holding = Some(ActorId::B);
        level.actors[ActorId::A].angle = 90.0;
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&level, &mut buffer);

        let a = buffer.instances[9];
        let b = buffer.instances[10];
        assert_eq!(a.flags as u32 & flags::HOLDING, flags::HOLDING);
        assert_eq!(b.flags as u32 & flags::HELD, flags::HELD);
        assert!((a.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn rebuilding_replaces_previous_frame() {
        let level = level();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&level, &mut buffer);
        build_render_buffer(&level, &mut buffer);
        assert_eq!(buffer.instance_count(), 11);
    }
}
