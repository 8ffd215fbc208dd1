//! Population counts and the win/lose evaluator

use serde::{Deserialize, Serialize};

use super::state::{Ball, Infection};

/// Ball counts by infection state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub healthy: u32,
    pub infected: u32,
    pub immune: u32,
}

impl Census {
    pub fn total(&self) -> u32 {
        self.healthy + self.infected + self.immune
    }
}

/// Count balls by state
pub fn census(balls: &[Ball]) -> Census {
    balls.iter().fold(Census::default(), |mut c, ball| {
        match ball.infection {
            Infection::Healthy => c.healthy += 1,
            Infection::Infected => c.infected += 1,
            Infection::Immune => c.immune += 1,
        }
        c
    })
}

/// Why a run was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// No healthy balls left
    Overrun,
    /// Player health reached zero
    PlayerDown,
}

/// Terminal result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost(LossCause),
}

/// Decide whether the run is over
///
/// Player death beats everything; a population with no infected left is a
/// win even if nobody is healthy (all immune).
pub fn evaluate_outcome(census: &Census, player_health: u32) -> Option<Outcome> {
    if player_health == 0 {
        Some(Outcome::Lost(LossCause::PlayerDown))
    } else if census.infected == 0 {
        Some(Outcome::Won)
    } else if census.healthy == 0 {
        Some(Outcome::Lost(LossCause::Overrun))
    } else {
        None
    }
}
