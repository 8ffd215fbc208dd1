//! Frame-callback driver
//!
//! Owns the state, the fixed-timestep clock and the input tracker. The host
//! calls `frame` once per display frame and reacts to the returned events
//! (win/lose modal, sounds, HUD).

use crate::autopilot::Autopilot;
use crate::config::SimConfig;
use crate::input::InputTracker;
use crate::render::{Scene, build_scene};
use crate::sim::{FrameClock, GameEvent, GameState, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputTracker,
    clock: FrameClock,
    /// Demo mode: the computer plays instead of the tracker
    autopilot: Option<Autopilot>,
}

impl Game {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
            input: InputTracker::new(),
            clock: FrameClock::new(),
            autopilot: None,
        }
    }

    pub fn set_autopilot(&mut self, autopilot: Option<Autopilot>) {
        self.autopilot = autopilot;
    }

    /// Start button: rebuild the population from a (new) config
    pub fn start(&mut self, config: SimConfig) {
        self.state.restart(config);
        self.clock.reset();
        self.input.clear();
    }

    /// Run the ticks owed for `real_dt_ms` of wall time
    pub fn frame(&mut self, real_dt_ms: f32) -> Vec<GameEvent> {
        let substeps = self.clock.advance(real_dt_ms);
        for _ in 0..substeps {
            let input = match self.autopilot.as_mut() {
                Some(pilot) => pilot.next_input(&self.state),
                None => self.input.take_tick_input(),
            };
            tick(&mut self.state, &input);
        }
        self.state.drain_events()
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.state)
    }
}
