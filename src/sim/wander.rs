//! Random-walk timers for balls
//!
//! Every ball re-rolls its heading on a fixed per-ball interval and coasts to
//! a stop after a random run time. Run timers are not cancelled by a newer
//! heading, so when the interval is shorter than the run time an older stop
//! can halt a fresh heading early.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading;

/// Per-ball wander schedule (all times in simulation ms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    /// Period between heading changes
    pub interval_ms: f64,
    /// When the next heading change fires
    pub next_move_ms: f64,
    /// Pending stop deadlines, oldest first
    pub stops: Vec<f64>,
}

impl Wander {
    /// Roll a new schedule starting at `now_ms`
    pub fn new<R: Rng>(rng: &mut R, now_ms: f64) -> Self {
        let interval_ms =
            (WANDER_INTERVAL_MIN_MS + rng.random::<f32>() * WANDER_INTERVAL_SPAN_MS) as f64;
        Self {
            interval_ms,
            next_move_ms: now_ms + interval_ms,
            stops: Vec::new(),
        }
    }

    /// Fire any due timers and return the updated velocity
    ///
    /// Stops and moves are processed in deadline order; a stop that falls on
    /// the same instant as a move is applied first.
    pub fn update<R: Rng>(&mut self, rng: &mut R, now_ms: f64, vel: Vec2, speed: f32) -> Vec2 {
        let mut vel = vel;
        loop {
            let next_stop = self.stops.first().copied().filter(|&t| t <= now_ms);
            let move_due = self.next_move_ms <= now_ms;

            match next_stop {
                Some(stop) if !move_due || stop <= self.next_move_ms => {
                    self.stops.remove(0);
                    vel = Vec2::ZERO;
                }
                _ if move_due => {
                    let fired_at = self.next_move_ms;
                    let angle = rng.random::<f32>() * std::f32::consts::TAU;
                    vel = heading(angle) * speed;
                    let run =
                        (WANDER_RUN_MIN_MS + rng.random::<f32>() * WANDER_RUN_SPAN_MS) as f64;
                    let deadline = fired_at + run;
                    let at = self.stops.partition_point(|&t| t <= deadline);
                    self.stops.insert(at, deadline);
                    self.next_move_ms += self.interval_ms;
                }
                _ => break,
            }
        }
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interval_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let w = Wander::new(&mut rng, 0.0);
            assert!(w.interval_ms >= 500.0 && w.interval_ms < 1500.0);
            assert_eq!(w.next_move_ms, w.interval_ms);
            assert!(w.stops.is_empty());
        }
    }

    #[test]
    fn test_idle_until_first_interval() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut w = Wander::new(&mut rng, 0.0);
        let vel = w.update(&mut rng, w.interval_ms - 1.0, Vec2::ZERO, 3.0);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_move_then_stop() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut w = Wander {
            interval_ms: 10_000.0,
            next_move_ms: 100.0,
            stops: Vec::new(),
        };
        let vel = w.update(&mut rng, 100.0, Vec2::ZERO, 3.0);
        assert!((vel.length() - 3.0).abs() < 1e-4);
        assert_eq!(w.stops.len(), 1);
        let stop = w.stops[0];
        assert!(stop >= 1100.0 && stop < 2100.0);

        // Still moving right before the deadline
        let held = w.update(&mut rng, stop - 1.0, vel, 3.0);
        assert_eq!(held, vel);

        let stopped = w.update(&mut rng, stop, vel, 3.0);
        assert_eq!(stopped, Vec2::ZERO);
        assert!(w.stops.is_empty());
    }

    #[test]
    fn test_overlapping_runs_keep_old_stops() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut w = Wander {
            interval_ms: 500.0,
            next_move_ms: 500.0,
            stops: Vec::new(),
        };
        // Two moves fire (500, 1000) before any stop (>= 1500)
        let vel = w.update(&mut rng, 1000.0, Vec2::ZERO, 3.0);
        assert!(vel.length() > 0.0);
        assert_eq!(w.stops.len(), 2);
        assert!(w.stops[0] <= w.stops[1]);
        assert_eq!(w.next_move_ms, 1500.0);
    }

    #[test]
    fn test_zero_speed_never_moves() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut w = Wander::new(&mut rng, 0.0);
        for step in 0..300 {
            let vel = w.update(&mut rng, step as f64 * 16.0, Vec2::ZERO, 0.0);
            assert_eq!(vel, Vec2::ZERO);
        }
    }
}
