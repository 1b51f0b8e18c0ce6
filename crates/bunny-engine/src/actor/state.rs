use std::ops::{Index, IndexMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::geometry::Aabb;

/// Identity of one of the two controlled bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorId {
    A,
    B,
}

impl ActorId {
    pub const ALL: [ActorId; 2] = [ActorId::A, ActorId::B];

    pub const fn index(self) -> usize {
        match self {
            ActorId::A => 0,
            ActorId::B => 1,
        }
    }

    pub const fn other(self) -> ActorId {
        match self {
            ActorId::A => ActorId::B,
            ActorId::B => ActorId::A,
        }
    }

    /// Display color (RGB) the renderer uses for this actor.
    pub const fn color(self) -> [u8; 3] {
        match self {
            ActorId::A => [80, 80, 255],
            ActorId::B => [255, 100, 180],
        }
    }
}

/// Kinematic and interaction state of one actor.
///
/// There is no stored "held by" field: whether an actor is being carried is
/// always read off the other actor's `holding` (see [`ActorPair::held_by`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    /// Top-left corner in world space.
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    /// Cosmetic tilt in degrees. Accumulates without wrapping.
    pub angle: f32,
    pub grounded: bool,
    /// Either grab control held this tick.
    pub grabbing: bool,
    /// Set while this actor carries the other one.
    pub holding: Option<ActorId>,
    /// Consecutive ticks of boosted gravity in the current fast-fall.
    pub fast_fall_timer: u32,
}

impl ActorState {
    /// Fresh actor at rest at `position`.
    pub fn spawn(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            angle: 0.0,
            grounded: false,
            grabbing: false,
            holding: None,
            fast_fall_timer: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.position, self.size)
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Put the actor back at `position` with all motion and carry state cleared.
    pub fn respawn(&mut self, position: Vec2) {
        *self = Self::spawn(position, self.size);
    }
}

/// The two actors of a level, indexed by [`ActorId`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActorPair {
    actors: [ActorState; 2],
}

impl ActorPair {
    pub fn new(a: ActorState, b: ActorState) -> Self {
        Self { actors: [a, b] }
    }

    pub fn spawn(spawns: [Vec2; 2], size: Vec2) -> Self {
        Self::new(ActorState::spawn(spawns[0], size), ActorState::spawn(spawns[1], size))
    }

    /// Which actor, if any, is currently carrying `id`.
    pub fn held_by(&self, id: ActorId) -> Option<ActorId> {
        let other = id.other();
        (self[other].holding == Some(id)).then_some(other)
    }

    pub fn is_held(&self, id: ActorId) -> bool {
        self.held_by(id).is_some()
    }

    /// The carry relationship is one-directional and only ever points at the
    /// other actor.
    pub fn carry_invariant_holds(&self) -> bool {
        let targets_other = ActorId::ALL
            .iter()
            .all(|&id| self[id].holding.map_or(true, |target| target == id.other()));
        let both = self[ActorId::A].holding.is_some() && self[ActorId::B].holding.is_some();
        targets_other && !both
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &ActorState)> {
        ActorId::ALL.into_iter().zip(self.actors.iter())
    }

    pub fn aabbs(&self) -> [Aabb; 2] {
        [self.actors[0].aabb(), self.actors[1].aabb()]
    }

    /// Mutable access to an actor together with a read-only view of the other.
    pub fn split_mut(&mut self, id: ActorId) -> (&mut ActorState, &ActorState) {
        let [a, b] = &mut self.actors;
        match id {
            ActorId::A => (a, &*b),
            ActorId::B => (b, &*a),
        }
    }

    pub fn respawn(&mut self, spawns: [Vec2; 2]) {
        for id in ActorId::ALL {
            self[id].respawn(spawns[id.index()]);
        }
    }
}

impl Index<ActorId> for ActorPair {
    type Output = ActorState;

    fn index(&self, id: ActorId) -> &ActorState {
        &self.actors[id.index()]
    }
}

impl IndexMut<ActorId> for ActorPair {
    fn index_mut(&mut self, id: ActorId) -> &mut ActorState {
        &mut self.actors[id.index()]
    }
}
