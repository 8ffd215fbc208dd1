//! Simulation configuration
//!
//! Filled from the start form (ball speed, count, infected count, player
//! health) or from a JSON file for the headless runner.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Upper bound on the ball population (pairwise checks are O(n²))
pub const MAX_BALLS: u32 = 2000;
/// Upper bound on per-tick ball speed
pub const MAX_BALL_SPEED: f32 = 100.0;

/// Which generation of the game rules to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Ruleset {
    /// Wandering balls spread infection; bullets fly straight up
    Outbreak,
    /// Bullets follow the aim angle and cure infected balls
    Aimed,
    /// Hit counters, immunity, player health and win/lose
    #[default]
    Immunity,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Outbreak => "Outbreak",
            Ruleset::Aimed => "Aimed",
            Ruleset::Immunity => "Immunity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "outbreak" | "v1" => Some(Ruleset::Outbreak),
            "aimed" | "v2" => Some(Ruleset::Aimed),
            "immunity" | "v3" => Some(Ruleset::Immunity),
            _ => None,
        }
    }

    /// Bullets travel along the player's aim instead of straight up
    pub fn aimed_shots(&self) -> bool {
        !matches!(self, Ruleset::Outbreak)
    }

    /// Bullets interact with balls
    pub fn bullets_collide(&self) -> bool {
        !matches!(self, Ruleset::Outbreak)
    }

    /// Player health, damage and win/lose are tracked
    pub fn has_outcome(&self) -> bool {
        matches!(self, Ruleset::Immunity)
    }
}

/// Why a configuration was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A form field did not parse as a number
    NotANumber { field: &'static str, value: String },
    /// Speed must be finite and non-negative
    InvalidSpeed { value: f32 },
    BallCountOutOfRange { count: u32, max: u32 },
    TooManyInfected { infected: u32, total: u32 },
    ZeroHealth,
    ZeroHits,
    /// Arena must be large enough to hold one ball
    ArenaTooSmall { width: f32, height: f32 },
    /// Config file could not be read
    Io(String),
    /// JSON config could not be decoded
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { field, value } => {
                write!(f, "{field}: expected a number, got {value:?}")
            }
            Self::InvalidSpeed { value } => {
                write!(f, "ball speed must be in 0..={MAX_BALL_SPEED}, got {value}")
            }
            Self::BallCountOutOfRange { count, max } => {
                write!(f, "ball count out of range: {count} (allowed 1..={max})")
            }
            Self::TooManyInfected { infected, total } => {
                write!(f, "infected count {infected} exceeds ball count {total}")
            }
            Self::ZeroHealth => write!(f, "player health must be at least 1"),
            Self::ZeroHits => write!(f, "hits to immunity must be at least 1"),
            Self::ArenaTooSmall { width, height } => {
                write!(f, "arena {width}x{height} cannot hold a ball")
            }
            Self::Io(msg) => write!(f, "cannot read config: {msg}"),
            Self::Json(msg) => write!(f, "invalid config json: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raw start-form inputs, exactly as typed
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub ball_speed: String,
    pub num_balls: String,
    pub num_infected: String,
    pub player_health: String,
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ruleset: Ruleset,
    /// Wander speed (pixels per tick)
    pub ball_speed: f32,
    pub num_balls: u32,
    /// The first `num_infected` balls start infected
    pub num_infected: u32,
    pub player_health: u32,
    pub hits_to_immunity: u32,
    pub arena_width: f32,
    pub arena_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::default(),
            ball_speed: BALL_SPEED,
            num_balls: NUM_BALLS,
            num_infected: NUM_INFECTED,
            player_health: PLAYER_HEALTH,
            hits_to_immunity: HITS_TO_IMMUNITY,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
        }
    }
}

impl SimConfig {
    /// Defaults for a given ruleset
    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            ..Self::default()
        }
    }

    /// Apply the start form on top of `self` and validate
    ///
    /// Blank fields keep their current value.
    pub fn from_form(mut self, form: &FormValues) -> Result<Self, ConfigError> {
        if let Some(speed) = parse_field::<f32>("ball speed", &form.ball_speed)? {
            self.ball_speed = speed;
        }
        if let Some(n) = parse_field::<u32>("ball count", &form.num_balls)? {
            self.num_balls = n;
        }
        if let Some(n) = parse_field::<u32>("infected count", &form.num_infected)? {
            self.num_infected = n;
        }
        if let Some(n) = parse_field::<u32>("player health", &form.player_health)? {
            self.player_health = n;
        }
        self.validate()?;
        Ok(self)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ball_speed.is_finite() || !(0.0..=MAX_BALL_SPEED).contains(&self.ball_speed) {
            return Err(ConfigError::InvalidSpeed {
                value: self.ball_speed,
            });
        }
        if self.num_balls == 0 || self.num_balls > MAX_BALLS {
            return Err(ConfigError::BallCountOutOfRange {
                count: self.num_balls,
                max: MAX_BALLS,
            });
        }
        if self.num_infected > self.num_balls {
            return Err(ConfigError::TooManyInfected {
                infected: self.num_infected,
                total: self.num_balls,
            });
        }
        if self.player_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        if self.hits_to_immunity == 0 {
            return Err(ConfigError::ZeroHits);
        }
        let min_side = 2.0 * BALL_RADIUS;
        if !(self.arena_width > min_side && self.arena_height > min_side) {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    raw: &str,
) -> Result<Option<T>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(speed: &str, balls: &str, infected: &str, health: &str) -> FormValues {
        FormValues {
            ball_speed: speed.into(),
            num_balls: balls.into(),
            num_infected: infected.into(),
            player_health: health.into(),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_balls, 99);
        assert_eq!(config.num_infected, 10);
        assert_eq!(config.ruleset, Ruleset::Immunity);
    }

    #[test]
    fn test_from_form_overrides() {
        let config = SimConfig::default()
            .from_form(&form("2.5", "40", "4", "7"))
            .unwrap();
        assert_eq!(config.ball_speed, 2.5);
        assert_eq!(config.num_balls, 40);
        assert_eq!(config.num_infected, 4);
        assert_eq!(config.player_health, 7);
    }

    #[test]
    fn test_from_form_blank_keeps_default() {
        let config = SimConfig::default()
            .from_form(&form("", " ", "", ""))
            .unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_from_form_rejects_garbage() {
        let err = SimConfig::default()
            .from_form(&form("fast", "", "", ""))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { field: "ball speed", .. }));

        let err = SimConfig::default()
            .from_form(&form("", "-3", "", ""))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { .. }));
    }

    #[test]
    fn test_rejects_nan_speed() {
        let err = SimConfig::default()
            .from_form(&form("NaN", "", "", ""))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpeed { .. }));
    }

    #[test]
    fn test_rejects_more_infected_than_balls() {
        let err = SimConfig::default()
            .from_form(&form("", "5", "6", ""))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooManyInfected {
                infected: 6,
                total: 5
            }
        );
    }

    #[test]
    fn test_rejects_zero_health_and_balls() {
        let err = SimConfig::default()
            .from_form(&form("", "", "", "0"))
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroHealth);

        let err = SimConfig::default()
            .from_form(&form("", "0", "0", ""))
            .unwrap_err();
        assert!(matches!(err, ConfigError::BallCountOutOfRange { count: 0, .. }));
    }

    #[test]
    fn test_from_json_partial() {
        let config = SimConfig::from_json(r#"{"ruleset":"Aimed","num_balls":12}"#).unwrap();
        assert_eq!(config.ruleset, Ruleset::Aimed);
        assert_eq!(config.num_balls, 12);
        assert_eq!(config.ball_speed, BALL_SPEED);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            SimConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{"arena_width": 10.0}"#),
            Err(ConfigError::ArenaTooSmall { .. })
        ));
    }

    #[test]
    fn test_ruleset_from_str() {
        assert_eq!(Ruleset::from_str("V1"), Some(Ruleset::Outbreak));
        assert_eq!(Ruleset::from_str("aimed"), Some(Ruleset::Aimed));
        assert_eq!(Ruleset::from_str("Immunity"), Some(Ruleset::Immunity));
        assert_eq!(Ruleset::from_str("v4"), None);
        assert!(!Ruleset::Outbreak.bullets_collide());
        assert!(Ruleset::Aimed.aimed_shots());
        assert!(!Ruleset::Aimed.has_outcome());
    }
}
