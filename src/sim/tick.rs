//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::census::{Outcome, evaluate_outcome};
use super::collision::{circles_overlap, clamp_to_arena, out_of_bounds, point_in_circle, wall_bounce};
use super::state::{Bullet, GameEvent, GamePhase, GameState, HitOutcome};
use crate::config::Ruleset;
use crate::consts::*;
use crate::{angle_between, heading};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Point to aim at (mouse position, arena coordinates)
    pub aim_at: Option<Vec2>,
    /// Fire one bullet
    pub shoot: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    // Don't tick if paused or finished
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    let now_ms = state.now_ms();
    let ruleset = state.config.ruleset;

    update_player(state, input);

    if input.shoot {
        fire_bullet(state, ruleset);
    }

    move_balls(state, now_ms);
    spread_infection(state);
    update_bullets(state, ruleset);

    if ruleset.has_outcome() {
        damage_player(state, now_ms);
        check_outcome(state);
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// WASD movement and aim
fn update_player(state: &mut GameState, input: &TickInput) {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }

    // Each held key moves the full speed on its axis (diagonals are faster)
    let arena = state.arena_size();
    let player = &mut state.player;
    player.pos = clamp_to_arena(player.pos + dir * PLAYER_SPEED, player.radius, arena);

    if let Some(target) = input.aim_at {
        if target != player.pos {
            player.rotation = angle_between(player.pos, target);
        }
    }
}

fn fire_bullet(state: &mut GameState, ruleset: Ruleset) {
    let vel = if ruleset.aimed_shots() {
        heading(state.player.rotation) * BULLET_SPEED
    } else {
        // Straight up
        Vec2::new(0.0, -BULLET_SPEED)
    };
    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos: state.player.pos,
        vel,
        radius: BULLET_RADIUS,
    });
    state.events.push(GameEvent::BulletFired { id });
}

/// Wander timers, integration and wall bounce
fn move_balls(state: &mut GameState, now_ms: f64) {
    let arena = state.arena_size();
    let speed = state.config.ball_speed;
    for ball in &mut state.balls {
        ball.vel = ball.wander.update(&mut state.rng, now_ms, ball.vel, speed);
        ball.pos += ball.vel;
        ball.vel = wall_bounce(ball.pos, ball.vel, ball.radius, arena);
    }
}

/// Pairwise contact pass in id order
///
/// A ball infected earlier in the pass already spreads to later pairs.
fn spread_infection(state: &mut GameState) {
    let balls = &mut state.balls;
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let (a, b) = (&balls[i], &balls[j]);
            if a.is_infected() == b.is_infected() {
                continue;
            }
            if !circles_overlap(a.pos, a.radius, b.pos, b.radius) {
                continue;
            }
            let (source, target) = if a.is_infected() { (i, j) } else { (j, i) };
            if balls[target].infect() {
                state.events.push(GameEvent::BallInfected {
                    id: balls[target].id,
                    by: balls[source].id,
                });
            }
        }
    }
}

/// Advance bullets, resolve hits and drop the ones that left the arena
fn update_bullets(state: &mut GameState, ruleset: Ruleset) {
    let arena = state.arena_size();
    let vertical_only = !ruleset.aimed_shots();
    let mut spent: Vec<u32> = Vec::new();

    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;

        if out_of_bounds(bullet.pos, arena, vertical_only) {
            spent.push(bullet.id);
            state.events.push(GameEvent::BulletExpired { id: bullet.id });
            continue;
        }

        if !ruleset.bullets_collide() {
            continue;
        }

        // A bullet is used up by the first ball it touches
        let Some(ball) = state
            .balls
            .iter_mut()
            .find(|b| point_in_circle(bullet.pos, b.pos, b.radius))
        else {
            continue;
        };
        spent.push(bullet.id);

        match ruleset {
            Ruleset::Aimed => {
                if ball.cure() {
                    state.events.push(GameEvent::BallCured { id: ball.id });
                }
            }
            Ruleset::Immunity => match ball.take_hit() {
                HitOutcome::Absorbed => {}
                HitOutcome::Wounded { hits_left } => {
                    state.events.push(GameEvent::BallWounded {
                        id: ball.id,
                        hits_left,
                    });
                }
                HitOutcome::Immunized => {
                    log::debug!("Ball {} is now immune", ball.id);
                    state.events.push(GameEvent::BallImmunized { id: ball.id });
                }
            },
            Ruleset::Outbreak => {}
        }
    }

    if !spent.is_empty() {
        state.bullets.retain(|b| !spent.contains(&b.id));
    }
}

/// Contact with any hostile ball costs one health, debounced
fn damage_player(state: &mut GameState, now_ms: f64) {
    let player = &state.player;
    let touching = state
        .balls
        .iter()
        .any(|b| b.infection.is_hostile() && circles_overlap(player.pos, player.radius, b.pos, b.radius));

    if touching && state.player.try_damage(now_ms) {
        log::debug!("Player hit, health now {}", state.player.health);
        state.events.push(GameEvent::PlayerDamaged {
            health: state.player.health,
        });
    }
}

fn check_outcome(state: &mut GameState) {
    let census = state.census();
    match evaluate_outcome(&census, state.player.health) {
        Some(Outcome::Won) => {
            log::info!(
                "Outbreak contained after {} ticks ({} immune)",
                state.time_ticks,
                census.immune
            );
            state.phase = GamePhase::Won;
            state.events.push(GameEvent::Won);
        }
        Some(Outcome::Lost(cause)) => {
            log::info!("Run lost after {} ticks: {:?}", state.time_ticks, cause);
            state.phase = GamePhase::Lost;
            state.events.push(GameEvent::Lost { cause });
        }
        None => {}
    }
}
