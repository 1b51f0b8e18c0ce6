use std::collections::HashSet;

use crate::input::bindings::KeyBindings;
use crate::input::controls::InputSnapshot;

/// Raw key events as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// Window lost focus: treat every key as released.
    ReleaseAll,
}

/// Queue of key events plus the set of keys currently held.
/// The host pushes events between frames; the runner folds them into the
/// held set once per frame and samples a snapshot per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
    held: HashSet<u32>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            held: HashSet::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Apply pending events to the held-key set and clear the queue.
    pub fn apply_pending(&mut self) {
        for event in self.events.drain(..) {
            match event {
                InputEvent::KeyDown { key_code } => {
                    self.held.insert(key_code);
                }
                InputEvent::KeyUp { key_code } => {
                    self.held.remove(&key_code);
                }
                InputEvent::ReleaseAll => self.held.clear(),
            }
        }
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Sample the held keys into a per-tick snapshot.
    pub fn sample(&self, bindings: &KeyBindings) -> InputSnapshot {
        bindings.sample(|code| self.is_held(code))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
