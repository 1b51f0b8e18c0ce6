use serde::{Deserialize, Serialize};

use crate::actor::state::ActorId;

/// Held/not-held state of one actor's controls for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub down: bool,
    pub grab: bool,
    pub alt_grab: bool,
}

impl ActorInput {
    pub const NONE: ActorInput = ActorInput {
        left: false,
        right: false,
        jump: false,
        down: false,
        grab: false,
        alt_grab: false,
    };

    /// Either grab control held.
    pub fn grabbing(&self) -> bool {
        self.grab || self.alt_grab
    }

    /// -1 for left, +1 for right, 0 for none. Left wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        }
    }

    pub fn with_left(mut self) -> Self {
        self.left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.right = true;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn with_down(mut self) -> Self {
        self.down = true;
        self
    }

    pub fn with_grab(mut self) -> Self {
        self.grab = true;
        self
    }
}

/// Everything the simulation reads from the outside world in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub actors: [ActorInput; 2],
    /// Acknowledge a confirmation screen.
    pub confirm: bool,
}

impl InputSnapshot {
    pub fn new(a: ActorInput, b: ActorInput) -> Self {
        Self {
            actors: [a, b],
            confirm: false,
        }
    }

    pub fn confirming() -> Self {
        Self {
            confirm: true,
            ..Default::default()
        }
    }

    pub fn actor(&self, id: ActorId) -> &ActorInput {
        &self.actors[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_takes_priority() {
        let both = ActorInput::NONE.with_left().with_right();
        assert_eq!(both.horizontal(), -1);
        assert_eq!(ActorInput::NONE.with_right().horizontal(), 1);
        assert_eq!(ActorInput::NONE.horizontal(), 0);
    }

    #[test]
    fn either_grab_control_grabs() {
        assert!(ActorInput::NONE.with_grab().grabbing());
        let alt = ActorInput { alt_grab: true, ..Default::default() };
        assert!(alt.grabbing());
        assert!(!ActorInput::NONE.grabbing());
    }

    #[test]
    fn snapshot_indexes_by_actor() {
        let snap = InputSnapshot::new(ActorInput::NONE.with_jump(), ActorInput::NONE.with_down());
        assert!(snap.actor(ActorId::A).jump);
        assert!(snap.actor(ActorId::B).down);
        assert!(!snap.confirm);
    }
}
