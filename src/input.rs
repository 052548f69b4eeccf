//! Keyboard source
//!
//! Directional keys become repeated move commands: the first command fires
//! on the press, then another every 200 ms until that key's release. Each
//! key runs its own timer, so releasing one held key never disturbs the
//! cadence of another.

use std::collections::BTreeMap;

use crate::consts::KEY_REPEAT_MS;
use crate::sim::event::{GameEvent, MoveKey};

/// Tracks held directional keys and their repeat deadlines.
#[derive(Debug, Default)]
pub struct Keyboard {
    /// Held key -> absolute time of its next repeat, in ms.
    held: BTreeMap<MoveKey, u64>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down at `now_ms`. A fresh press emits its move command
    /// immediately; hardware auto-repeats of a key already held are ignored.
    pub fn press(&mut self, key: MoveKey, now_ms: u64) -> Option<GameEvent> {
        if self.held.contains_key(&key) {
            return None;
        }
        self.held.insert(key, now_ms + KEY_REPEAT_MS);
        Some(GameEvent::player_move(key))
    }

    /// Handle a key-up: cancels that key's repeat timer, nothing else.
    pub fn release(&mut self, key: MoveKey) {
        self.held.remove(&key);
    }

    /// True while any directional key is held.
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// Emit every repeat that has come due by `now_ms`. A poll that lands
    /// late emits one command per elapsed 200 ms period, keeping held-key
    /// travel distance independent of poll jitter.
    pub fn poll(&mut self, now_ms: u64) -> Vec<GameEvent> {
        let mut due = Vec::new();
        for (key, next_at) in self.held.iter_mut() {
            while *next_at <= now_ms {
                due.push(GameEvent::player_move(*key));
                *next_at += KEY_REPEAT_MS;
            }
        }
        due
    }
}
