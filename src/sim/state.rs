//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, including the RNG, so a
//! state can be cloned or serialized and replayed deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::census::{Census, LossCause, census};
use super::wander::Wander;
use crate::config::SimConfig;
use crate::consts::*;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balls moving, player in control
    Running,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// No infected balls remain
    Won,
    /// Population overrun or player out of health
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Infection state of a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Infection {
    Healthy,
    Infected,
    /// Survived enough bullet hits; can never be infected again
    Immune,
}

impl Infection {
    /// Anything not drawn in the default healthy colour hurts the player
    pub fn is_hostile(&self) -> bool {
        !matches!(self, Infection::Healthy)
    }
}

/// What a bullet did to the ball it struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Healthy or immune target, nothing changes
    Absorbed,
    /// Infected target lost one hit
    Wounded { hits_left: u32 },
    /// Infected target reached zero hits
    Immunized,
}

/// A wandering ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub infection: Infection,
    /// Bullet hits remaining before an infected ball turns immune
    pub hits_left: u32,
    pub wander: Wander,
}

impl Ball {
    pub fn is_infected(&self) -> bool {
        self.infection == Infection::Infected
    }

    /// Infect a healthy ball. Returns true if the state changed.
    pub fn infect(&mut self) -> bool {
        if self.infection == Infection::Healthy {
            self.infection = Infection::Infected;
            true
        } else {
            false
        }
    }

    /// Cure an infected ball back to healthy. Returns true if the state changed.
    pub fn cure(&mut self) -> bool {
        if self.infection == Infection::Infected {
            self.infection = Infection::Healthy;
            true
        } else {
            false
        }
    }

    /// Apply one bullet hit under the immunity rules
    pub fn take_hit(&mut self) -> HitOutcome {
        if self.infection != Infection::Infected || self.hits_left == 0 {
            return HitOutcome::Absorbed;
        }
        self.hits_left -= 1;
        if self.hits_left == 0 {
            self.infection = Infection::Immune;
            HitOutcome::Immunized
        } else {
            HitOutcome::Wounded {
                hits_left: self.hits_left,
            }
        }
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub health: u32,
    /// Aim angle (radians, screen space)
    pub rotation: f32,
    /// Simulation time of the last damage taken
    pub last_damage_ms: Option<f64>,
}

impl Player {
    pub fn new(pos: Vec2, health: u32) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            health,
            rotation: -std::f32::consts::FRAC_PI_2, // Facing up
            last_damage_ms: None,
        }
    }

    /// Take one point of damage unless still inside the debounce window.
    /// Returns true if health was reduced.
    pub fn try_damage(&mut self, now_ms: f64) -> bool {
        if self.health == 0 {
            return false;
        }
        if let Some(last) = self.last_damage_ms {
            if now_ms - last < DAMAGE_DEBOUNCE_MS as f64 {
                return false;
            }
        }
        self.health -= 1;
        self.last_damage_ms = Some(now_ms);
        true
    }
}

/// Notifications for the host (modals, sounds, HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { balls: u32, infected: u32 },
    BulletFired { id: u32 },
    BallInfected { id: u32, by: u32 },
    BallCured { id: u32 },
    BallWounded { id: u32, hits_left: u32 },
    BallImmunized { id: u32 },
    BulletExpired { id: u32 },
    PlayerDamaged { health: u32 },
    Won,
    Lost { cause: LossCause },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: SimConfig,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Sorted by id
    pub balls: Vec<Ball>,
    /// Sorted by id
    pub bullets: Vec<Bullet>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Start a simulation with the given config and seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let center = Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0);
        let mut state = Self {
            seed,
            player: Player::new(center, config.player_health),
            config,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            balls: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.populate();
        state
    }

    /// Clear everything and start over with the same config and seed
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone(), self.seed);
    }

    /// Restart with a new config (the start button)
    pub fn restart(&mut self, config: SimConfig) {
        *self = Self::new(config, self.seed);
    }

    fn populate(&mut self) {
        let r = BALL_RADIUS;
        let (w, h) = (self.config.arena_width, self.config.arena_height);
        for i in 0..self.config.num_balls {
            let id = self.next_entity_id();
            let pos = Vec2::new(
                self.rng.random::<f32>() * (w - 2.0 * r) + r,
                self.rng.random::<f32>() * (h - 2.0 * r) + r,
            );
            let infection = if i < self.config.num_infected {
                Infection::Infected
            } else {
                Infection::Healthy
            };
            let wander = Wander::new(&mut self.rng, 0.0);
            self.balls.push(Ball {
                id,
                pos,
                vel: Vec2::ZERO,
                radius: r,
                infection,
                hits_left: self.config.hits_to_immunity,
                wander,
            });
        }

        log::info!(
            "Simulation started: {} balls, {} infected, ruleset {} (seed {})",
            self.config.num_balls,
            self.config.num_infected,
            self.config.ruleset.as_str(),
            self.seed
        );
        self.events.push(GameEvent::Started {
            balls: self.config.num_balls,
            infected: self.config.num_infected,
        });
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Current simulation time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.time_ticks as f64 * SIM_DT_MS as f64
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.config.arena_width, self.config.arena_height)
    }

    pub fn census(&self) -> Census {
        census(&self.balls)
    }

    /// Hand accumulated events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.balls.sort_by_key(|b| b.id);
        self.bullets.sort_by_key(|b| b.id);
    }
}
