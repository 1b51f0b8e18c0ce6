use crate::actor::state::ActorState;
use crate::api::config::GameConfig;
use crate::input::controls::ActorInput;

/// Gravity applied this tick, advancing the fast-fall timer.
///
/// While `down` is held the first `fast_fall_limit` airborne ticks use
/// boosted gravity; after that the base rate applies until `down` is
/// released, which zeroes the timer.
fn gravity_for_tick(actor: &mut ActorState, input: &ActorInput, config: &GameConfig) -> f32 {
    if !input.down {
        actor.fast_fall_timer = 0;
        return config.gravity;
    }
    if actor.fast_fall_timer < config.fast_fall_limit {
        actor.fast_fall_timer += 1;
        config.gravity * config.gravity_boost
    } else {
        config.gravity
    }
}

/// Per-tick velocity model for an actor that is not being carried.
///
/// Jump availability is decided by `grounded` as it was at the start of the
/// tick; collision resolution later in the tick recomputes it.
pub fn update_velocity(actor: &mut ActorState, input: &ActorInput, config: &GameConfig) {
    let grounded_at_start = actor.grounded;

    match input.horizontal() {
        -1 => {
            actor.velocity.x = -config.move_force;
            actor.angle -= config.rotation_speed;
        }
        1 => {
            actor.velocity.x = config.move_force;
            actor.angle += config.rotation_speed;
        }
        _ => actor.velocity.x = 0.0,
    }

    if input.jump && grounded_at_start {
        actor.velocity.y = config.jump_force;
        actor.grounded = false;
    }

    if actor.grounded {
        if !input.down {
            actor.fast_fall_timer = 0;
        }
    } else {
        actor.velocity.y += gravity_for_tick(actor, input, config);
    }
}
