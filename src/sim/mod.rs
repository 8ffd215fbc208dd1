//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod census;
pub mod clock;
pub mod collision;
pub mod state;
pub mod tick;
pub mod wander;

pub use census::{Census, LossCause, Outcome, census, evaluate_outcome};
pub use clock::FrameClock;
pub use collision::{circles_overlap, clamp_to_arena, out_of_bounds, wall_bounce};
pub use state::{Ball, Bullet, GameEvent, GamePhase, GameState, HitOutcome, Infection, Player};
pub use tick::{TickInput, tick};
pub use wander::Wander;
