//! Infection Arena - a top-down outbreak arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, infection, bullets, win/lose)
//! - `input`: Key/mouse tracking that feeds the simulation
//! - `render`: Draw list and tessellation for an external renderer
//! - `config`: Start-form and JSON configuration
//! - `autopilot`: Idle/demo mode driver
//! - `game`: Frame-callback driver tying clock, input and state together

pub mod autopilot;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{ConfigError, FormValues, Ruleset, SimConfig};
pub use game::Game;
pub use input::{InputTracker, Key};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one 60 Hz display frame)
    pub const SIM_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default arena size (pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;
    pub const ARENA_BORDER_WIDTH: f32 = 3.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Pixels per tick while wandering
    pub const BALL_SPEED: f32 = 3.0;
    pub const NUM_BALLS: u32 = 99;
    pub const NUM_INFECTED: u32 = 10;
    /// Delay between heading changes (ms, uniform in [min, min + span))
    pub const WANDER_INTERVAL_MIN_MS: f32 = 500.0;
    pub const WANDER_INTERVAL_SPAN_MS: f32 = 1000.0;
    /// How long a heading is held before stopping (ms)
    pub const WANDER_RUN_MIN_MS: f32 = 1000.0;
    pub const WANDER_RUN_SPAN_MS: f32 = 1000.0;
    /// Bullet hits needed to make an infected ball immune
    pub const HITS_TO_IMMUNITY: u32 = 3;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_HEALTH: u32 = 3;
    /// Minimum time between two damage events (ms)
    pub const DAMAGE_DEBOUNCE_MS: f32 = 1000.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 5.0;
}

/// Unit vector for an angle (radians)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle (radians) of the vector from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
