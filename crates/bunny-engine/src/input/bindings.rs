use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;
use crate::input::controls::{ActorInput, InputSnapshot};

/// DOM `KeyboardEvent.keyCode` values used by the default layout.
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const SHIFT: u32 = 16;
    pub const SPACE: u32 = 32;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_RIGHT: u32 = 39;
    pub const ARROW_DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
    pub const PERIOD: u32 = 190;
    pub const SLASH: u32 = 191;
}

/// Key codes bound to each control of one actor. A control is held if any
/// of its codes is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBindings {
    pub left: Vec<u32>,
    pub right: Vec<u32>,
    pub jump: Vec<u32>,
    pub down: Vec<u32>,
    pub grab: Vec<u32>,
    pub alt_grab: Vec<u32>,
}

impl ControlBindings {
    fn sample(&self, held: &impl Fn(u32) -> bool) -> ActorInput {
        let any = |codes: &[u32]| codes.iter().any(|&c| held(c));
        ActorInput {
            left: any(&self.left),
            right: any(&self.right),
            jump: any(&self.jump),
            down: any(&self.down),
            grab: any(&self.grab),
            alt_grab: any(&self.alt_grab),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub actors: [ControlBindings; 2],
    pub confirm: Vec<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use keys::*;
        Self {
            actors: [
                ControlBindings {
                    left: vec![A],
                    right: vec![D],
                    jump: vec![W],
                    down: vec![S],
                    grab: vec![SHIFT],
                    alt_grab: vec![ENTER],
                },
                // keyCode cannot tell right shift / numpad enter apart from
                // the left-hand keys, so the second actor grabs on / and .
                ControlBindings {
                    left: vec![ARROW_LEFT],
                    right: vec![ARROW_RIGHT],
                    jump: vec![ARROW_UP],
                    down: vec![ARROW_DOWN],
                    grab: vec![SLASH],
                    alt_grab: vec![PERIOD],
                },
            ],
            confirm: vec![SPACE],
        }
    }
}

impl KeyBindings {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a snapshot from a "is this key held" predicate.
    pub fn sample(&self, held: impl Fn(u32) -> bool) -> InputSnapshot {
        InputSnapshot {
            actors: [self.actors[0].sample(&held), self.actors[1].sample(&held)],
            confirm: self.confirm.iter().any(|&c| held(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layouts_do_not_share_keys() {
        let b = KeyBindings::default();
        let all = |c: &ControlBindings| {
            let mut v = Vec::new();
            for codes in [&c.left, &c.right, &c.jump, &c.down, &c.grab, &c.alt_grab] {
                v.extend(codes.iter().copied());
            }
            v
        };
        let first = all(&b.actors[0]);
        let second = all(&b.actors[1]);
        assert!(first.iter().all(|c| !second.contains(c)));
    }

    #[test]
    fn sample_reads_both_actors_and_confirm() {
        let b = KeyBindings::default();
        let held = [keys::A, keys::SHIFT, keys::ARROW_DOWN, keys::SPACE];
        let snap = b.sample(|c| held.contains(&c));
        assert!(snap.actors[0].left);
        assert!(snap.actors[0].grabbing());
        assert!(snap.actors[1].down);
        assert!(!snap.actors[1].grabbing());
        assert!(snap.confirm);
    }

    #[test]
    fn bindings_from_json() {
        let json = r#"{
            "actors": [
                { "left": [1], "right": [2], "jump": [3], "down": [4], "grab": [5], "alt_grab": [] },
                { "left": [11], "right": [12], "jump": [13], "down": [14], "grab": [15], "alt_grab": [16] }
            ],
            "confirm": [99]
        }"#;
        let b = KeyBindings::from_json(json).unwrap();
        let snap = b.sample(|c| c == 16 || c == 3);
        assert!(snap.actors[0].jump);
        assert!(snap.actors[1].alt_grab);
    }
}
