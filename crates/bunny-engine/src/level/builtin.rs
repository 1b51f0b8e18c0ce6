//! Levels shipped with the engine. All are laid out for a 1000x600 world
//! with 40x60 actors.

use glam::Vec2;

use crate::core::geometry::Aabb;
use crate::level::descriptor::{LevelCatalog, LevelDescriptor};

pub const WORLD_WIDTH: f32 = 1000.0;
pub const WORLD_HEIGHT: f32 = 600.0;

const SPIKE: f32 = 40.0;
const PICKUP: f32 = 20.0;

fn floor() -> Aabb {
    Aabb::new(0.0, WORLD_HEIGHT - 40.0, WORLD_WIDTH, 40.0)
}

/// A row of spikes standing on the floor, starting at `x`.
fn spike_row(x: f32, count: usize) -> Vec<Aabb> {
    (0..count)
        .map(|i| Aabb::new(x + i as f32 * SPIKE, WORLD_HEIGHT - 80.0, SPIKE, SPIKE))
        .collect()
}

fn pickup(x: f32, y: f32) -> Aabb {
    Aabb::new(x, y, PICKUP, PICKUP)
}

/// The opening level: three ledges, a pair of spikes, goal on the top ledge.
pub fn first_steps() -> LevelDescriptor {
    LevelDescriptor {
        name: "First Steps".into(),
        obstacles: vec![
            floor(),
            Aabb::new(300.0, 500.0, 200.0, 20.0),
            Aabb::new(600.0, 400.0, 200.0, 20.0),
            Aabb::new(850.0, 300.0, 100.0, 20.0),
        ],
        hazards: spike_row(500.0, 2),
        pickups: vec![pickup(390.0, 470.0), pickup(690.0, 370.0)],
        goal: Aabb::new(900.0, 220.0, 50.0, 80.0),
        spawns: [Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0)],
    }
}

/// A bridge over a long spike pit.
pub fn spike_bridge() -> LevelDescriptor {
    LevelDescriptor {
        name: "Spike Bridge".into(),
        obstacles: vec![
            floor(),
            Aabb::new(220.0, 480.0, 100.0, 20.0),
            Aabb::new(330.0, 420.0, 340.0, 20.0),
        ],
        hazards: spike_row(350.0, 8),
        pickups: vec![pickup(250.0, 450.0), pickup(480.0, 380.0), pickup(760.0, 530.0)],
        goal: Aabb::new(900.0, 480.0, 50.0, 80.0),
        spawns: [Vec2::new(60.0, 480.0), Vec2::new(120.0, 480.0)],
    }
}

/// Staircase of ledges over a spiked floor.
pub fn tower() -> LevelDescriptor {
    LevelDescriptor {
        name: "Tower".into(),
        obstacles: vec![
            floor(),
            Aabb::new(200.0, 470.0, 150.0, 20.0),
            Aabb::new(400.0, 380.0, 150.0, 20.0),
            Aabb::new(600.0, 290.0, 150.0, 20.0),
            Aabb::new(800.0, 200.0, 200.0, 20.0),
        ],
        hazards: spike_row(360.0, 16),
        pickups: vec![pickup(460.0, 340.0), pickup(660.0, 250.0), pickup(880.0, 160.0)],
        goal: Aabb::new(850.0, 100.0, 100.0, 100.0),
        spawns: [Vec2::new(40.0, 500.0), Vec2::new(100.0, 500.0)],
    }
}

/// The default campaign, in play order.
pub fn builtin_catalog() -> LevelCatalog {
    LevelCatalog::from_trusted(vec![first_steps(), spike_bridge(), tower()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_validate() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 3);
        for level in catalog.iter() {
            assert!(level.validate().is_ok(), "{} invalid", level.name);
        }
    }

    #[test]
    fn spawns_are_clear_of_hazards() {
        let size = Vec2::new(40.0, 60.0);
        for level in builtin_catalog().iter() {
            for spawn in level.spawns {
                let body = Aabb::from_pos_size(spawn, size);
                assert!(
                    level.hazards.iter().all(|h| !h.overlaps(&body)),
                    "{}: spawn {:?} inside a hazard",
                    level.name,
                    spawn
                );
            }
        }
    }

    #[test]
    fn goals_fit_inside_the_world() {
        let world = Aabb::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT);
        for level in builtin_catalog().iter() {
            assert!(world.contains(&level.goal), "{}", level.name);
        }
    }
}
