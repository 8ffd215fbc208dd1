//! Fixed timestep accumulator
//!
//! Converts variable display frame times into whole simulation ticks.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, SIM_DT_MS};

/// Longest real frame we will try to catch up on (ms)
pub const MAX_FRAME_MS: f32 = 100.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    accumulator_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one real frame and return how many ticks to run
    pub fn advance(&mut self, real_dt_ms: f32) -> u32 {
        if !real_dt_ms.is_finite() || real_dt_ms <= 0.0 {
            return 0;
        }
        self.accumulator_ms += real_dt_ms.min(MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator_ms >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            self.accumulator_ms -= SIM_DT_MS;
            substeps += 1;
        }
        substeps
    }

    /// Leftover time not yet simulated
    pub fn pending_ms(&self) -> f32 {
        self.accumulator_ms
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}
