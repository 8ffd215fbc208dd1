//! Infection Arena headless runner
//!
//! Plays a seeded game with the autopilot and prints a JSON summary.
//! Useful for balancing and for checking determinism across builds.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;
    use serde::Serialize;

    use infection_arena::consts::SIM_DT_MS;
    use infection_arena::sim::{Census, GameEvent, GamePhase};
    use infection_arena::{Autopilot, Game, Ruleset, SimConfig};

    #[derive(Parser, Debug)]
    #[command(name = "infection-arena", about = "Run a headless Infection Arena game")]
    pub struct Args {
        /// JSON config file (fields not given fall back to defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        /// outbreak | aimed | immunity (or v1/v2/v3)
        #[arg(long)]
        ruleset: Option<String>,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Stop after this many simulation ticks
        #[arg(long, default_value_t = 60 * 60 * 10)]
        frames: u64,
        #[arg(long)]
        balls: Option<u32>,
        #[arg(long)]
        infected: Option<u32>,
        #[arg(long)]
        speed: Option<f32>,
        #[arg(long)]
        health: Option<u32>,
        /// Ticks between autopilot shots
        #[arg(long, default_value_t = 6)]
        fire_interval: u32,
    }

    #[derive(Debug, Serialize)]
    struct Summary {
        ruleset: Ruleset,
        seed: u64,
        ticks: u64,
        phase: GamePhase,
        census: Census,
        player_health: u32,
        bullets_fired: u32,
        infections: u32,
        immunized: u32,
        cured: u32,
    }

    fn build_config(args: &Args) -> Result<SimConfig> {
        let mut config = match &args.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(name) = &args.ruleset {
            config.ruleset = match Ruleset::from_str(name) {
                Some(r) => r,
                None => bail!("unknown ruleset '{name}'"),
            };
        }
        if let Some(n) = args.balls {
            config.num_balls = n;
        }
        if let Some(n) = args.infected {
            config.num_infected = n;
        }
        if let Some(s) = args.speed {
            config.ball_speed = s;
        }
        if let Some(h) = args.health {
            config.player_health = h;
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    pub fn run(args: Args) -> Result<()> {
        let config = build_config(&args)?;
        log::info!(
            "Headless run: ruleset {}, seed {}, up to {} ticks",
            config.ruleset.as_str(),
            args.seed,
            args.frames
        );

        let mut game = Game::new(config.clone(), args.seed);
        game.set_autopilot(Some(Autopilot::new(args.fire_interval)));

        let mut summary = Summary {
            ruleset: config.ruleset,
            seed: args.seed,
            ticks: 0,
            phase: GamePhase::Running,
            census: game.state.census(),
            player_health: game.state.player.health,
            bullets_fired: 0,
            infections: 0,
            immunized: 0,
            cured: 0,
        };

        while game.state.time_ticks < args.frames && !game.state.phase.is_terminal() {
            for event in game.frame(SIM_DT_MS) {
                match event {
                    GameEvent::BulletFired { .. } => summary.bullets_fired += 1,
                    GameEvent::BallInfected { .. } => summary.infections += 1,
                    GameEvent::BallImmunized { .. } => summary.immunized += 1,
                    GameEvent::BallCured { .. } => summary.cured += 1,
                    GameEvent::Won | GameEvent::Lost { .. } => {
                        log::info!("Terminal event: {:?}", event)
                    }
                    _ => {}
                }
            }
        }

        summary.ticks = game.state.time_ticks;
        summary.phase = game.state.phase;
        summary.census = game.state.census();
        summary.player_health = game.state.player.health;

        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{json}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    headless::run(headless::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Game` directly; there is no binary entry point
}
