//! Idle/demo mode - the computer plays the game
//!
//! Produces one `TickInput` per tick from the current state: shy away from
//! hostile balls, aim at the nearest infected one and keep shooting.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, TickInput};

/// Hostile balls closer than this push the player away
const DANGER_RADIUS: f32 = 120.0;
/// Steering below this magnitude is ignored (prevents jitter)
const STEER_DEADZONE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between shots
    pub fire_interval: u32,
    cooldown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            fire_interval: 6,
            cooldown: 0,
        }
    }
}

impl Autopilot {
    pub fn new(fire_interval: u32) -> Self {
        Self {
            fire_interval,
            cooldown: 0,
        }
    }

    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        if state.phase != GamePhase::Running {
            return input;
        }

        let player = &state.player;
        let ruleset = state.config.ruleset;

        // Nearest infected ball, leading it by the bullet travel time
        let target = state
            .balls
            .iter()
            .filter(|b| b.is_infected())
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|b| {
                let travel = b.pos.distance(player.pos) / BULLET_SPEED;
                b.pos + b.vel * travel
            });

        // Flee from hostile balls, weighted by closeness
        let mut steer = Vec2::ZERO;
        for ball in state.balls.iter().filter(|b| b.infection.is_hostile()) {
            let away = player.pos - ball.pos;
            let dist = away.length();
            if dist > 0.0 && dist < DANGER_RADIUS {
                steer += away / dist * (1.0 - dist / DANGER_RADIUS);
            }
        }
        // Drift back toward the middle so walls don't trap us
        let center = state.arena_size() / 2.0;
        steer += (center - player.pos) / center.length() * 0.3;

        input.up = steer.y < -STEER_DEADZONE;
        input.down = steer.y > STEER_DEADZONE;
        input.left = steer.x < -STEER_DEADZONE;
        input.right = steer.x > STEER_DEADZONE;

        if let Some(aim) = target {
            input.aim_at = Some(aim);
            // Straight-up shots only help when the target is overhead
            let lined_up = ruleset.aimed_shots()
                || (aim.y < player.pos.y && (aim.x - player.pos.x).abs() < BALL_RADIUS);
            if self.cooldown == 0 && lined_up {
                input.shoot = true;
                self.cooldown = self.fire_interval;
            }
        }
        self.cooldown = self.cooldown.saturating_sub(1);

        input
    }
}
