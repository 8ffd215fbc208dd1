//! Keyboard and mouse tracking
//!
//! The host forwards raw key and pointer events here; once per simulation
//! step the tracker is turned into a `TickInput`.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_str(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Key::Up),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Shoot),
            "p" | "P" | "Escape" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// Current key-press set and last mouse position
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<Key>,
    mouse: Option<Vec2>,
    /// Shots requested but not yet fired (one per tick)
    queued_shots: u32,
    pause_requested: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every shoot keydown queues a shot, including auto-repeat
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Shoot => self.queued_shots = self.queued_shots.saturating_add(1),
            Key::Pause => {
                if !self.held.contains(&Key::Pause) {
                    self.pause_requested = !self.pause_requested;
                }
            }
            _ => {}
        }
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn mouse_move(&mut self, pos: Vec2) {
        self.mouse = Some(pos);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn mouse(&self) -> Option<Vec2> {
        self.mouse
    }

    /// Release everything (window blur)
    pub fn clear(&mut self) {
        self.held.clear();
        self.queued_shots = 0;
        self.pause_requested = false;
    }

    /// Build the input for one tick, consuming one-shot requests
    pub fn take_tick_input(&mut self) -> TickInput {
        let shoot = self.queued_shots > 0;
        if shoot {
            self.queued_shots -= 1;
        }
        TickInput {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            aim_at: self.mouse,
            shoot,
            pause: std::mem::take(&mut self.pause_requested),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_key_str("w"), Some(Key::Up));
        assert_eq!(Key::from_key_str("D"), Some(Key::Right));
        assert_eq!(Key::from_key_str(" "), Some(Key::Shoot));
        assert_eq!(Key::from_key_str("q"), None);
    }

    #[test]
    fn test_held_keys_persist() {
        let mut input = InputTracker::new();
        input.key_down(Key::Up);
        input.key_down(Key::Left);
        for _ in 0..3 {
            let tick = input.take_tick_input();
            assert!(tick.up && tick.left);
            assert!(!tick.down && !tick.right);
        }
        input.key_up(Key::Up);
        assert!(!input.take_tick_input().up);
    }

    #[test]
    fn test_each_shoot_press_fires_once() {
        let mut input = InputTracker::new();
        input.key_down(Key::Shoot);
        input.key_down(Key::Shoot); // auto-repeat
        assert!(input.take_tick_input().shoot);
        assert!(input.take_tick_input().shoot);
        assert!(!input.take_tick_input().shoot);
    }

    #[test]
    fn test_pause_toggles_once_per_press() {
        let mut input = InputTracker::new();
        input.key_down(Key::Pause);
        input.key_down(Key::Pause); // auto-repeat is ignored
        assert!(input.take_tick_input().pause);
        assert!(!input.take_tick_input().pause);
        input.key_up(Key::Pause);
        input.key_down(Key::Pause);
        assert!(input.take_tick_input().pause);
    }

    #[test]
    fn test_mouse_becomes_aim() {
        let mut input = InputTracker::new();
        assert_eq!(input.take_tick_input().aim_at, None);
        input.mouse_move(Vec2::new(12.0, 34.0));
        assert_eq!(input.take_tick_input().aim_at, Some(Vec2::new(12.0, 34.0)));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut input = InputTracker::new();
        input.key_down(Key::Down);
        input.key_down(Key::Shoot);
        input.clear();
        let tick = input.take_tick_input();
        assert!(!tick.down && !tick.shoot);
    }
}
