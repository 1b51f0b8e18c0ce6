use bytemuck::{Pod, Zeroable};

use crate::actor::state::ActorId;
use crate::level::progression::LevelResult;

/// Something that happened during a tick, for hosts to react to
/// (sounds, banners, analytics).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A level was (re)loaded. Zero-based index.
    LevelStarted { index: usize },
    /// An actor touched a hazard and both actors were sent back to spawn.
    HazardReset { touched_by: ActorId },
    /// A pickup was consumed. `collected` is the level total afterwards.
    PickupCollected { index: usize, by: ActorId, collected: u32 },
    CarryStarted { carrier: ActorId },
    CarryEnded { carrier: ActorId },
    LevelComplete(LevelResult),
    CampaignComplete { levels: usize },
}

impl GameEvent {
    pub const KIND_LEVEL_STARTED: f32 = 1.0;
    pub const KIND_HAZARD_RESET: f32 = 2.0;
    pub const KIND_PICKUP: f32 = 3.0;
    pub const KIND_CARRY_STARTED: f32 = 4.0;
    pub const KIND_CARRY_ENDED: f32 = 5.0;
    pub const KIND_LEVEL_COMPLETE: f32 = 6.0;
    pub const KIND_CAMPAIGN_COMPLETE: f32 = 7.0;

    /// Pack into the fixed four-float record shared with the host.
    pub fn to_wire(&self) -> WireEvent {
        match *self {
            GameEvent::LevelStarted { index } => WireEvent::new(Self::KIND_LEVEL_STARTED, index as f32, 0.0, 0.0),
            GameEvent::HazardReset { touched_by } => {
                WireEvent::new(Self::KIND_HAZARD_RESET, touched_by.index() as f32, 0.0, 0.0)
            }
            GameEvent::PickupCollected { index, by, collected } => {
                WireEvent::new(Self::KIND_PICKUP, index as f32, by.index() as f32, collected as f32)
            }
            GameEvent::CarryStarted { carrier } => {
                WireEvent::new(Self::KIND_CARRY_STARTED, carrier.index() as f32, 0.0, 0.0)
            }
            GameEvent::CarryEnded { carrier } => WireEvent::new(Self::KIND_CARRY_ENDED, carrier.index() as f32, 0.0, 0.0),
            GameEvent::LevelComplete(result) => WireEvent::new(
                Self::KIND_LEVEL_COMPLETE,
                result.level_number as f32,
                result.elapsed_seconds,
                result.collected as f32,
            ),
            GameEvent::CampaignComplete { levels } => {
                WireEvent::new(Self::KIND_CAMPAIGN_COMPLETE, levels as f32, 0.0, 0.0)
            }
        }
    }
}

/// A game event as laid out in shared memory: `kind` identifies the event,
/// `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;

    pub const fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
