//! Draw list built from the game state

use glam::Vec2;

use super::{Renderer, colors};
use crate::consts::ARENA_BORDER_WIDTH;
use crate::sim::{GameState, Infection};

/// A filled circle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: u32,
}

/// Everything visible in one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Vec2,
    pub background: u32,
    pub border_width: f32,
    pub border_color: u32,
    pub circles: Vec<Circle>,
}

pub fn infection_color(infection: Infection) -> u32 {
    match infection {
        Infection::Healthy => colors::HEALTHY,
        Infection::Infected => colors::INFECTED,
        Infection::Immune => colors::IMMUNE,
    }
}

/// Balls first, then bullets, player on top
pub fn build_scene(state: &GameState) -> Scene {
    let mut circles = Vec::with_capacity(state.balls.len() + state.bullets.len() + 1);

    circles.extend(state.balls.iter().map(|b| Circle {
        center: b.pos,
        radius: b.radius,
        color: infection_color(b.infection),
    }));
    circles.extend(state.bullets.iter().map(|b| Circle {
        center: b.pos,
        radius: b.radius,
        color: colors::BULLET,
    }));
    circles.push(Circle {
        center: state.player.pos,
        radius: state.player.radius,
        color: colors::PLAYER,
    });

    Scene {
        size: state.arena_size(),
        background: colors::BACKGROUND,
        border_width: ARENA_BORDER_WIDTH,
        border_color: colors::BORDER,
        circles,
    }
}

impl Scene {
    /// Replay the scene against a host renderer
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear(self.background);
        for c in &self.circles {
            renderer.circle(c.center, c.radius, c.color);
        }
        renderer.rect_outline(Vec2::ZERO, self.size, self.border_width, self.border_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    /// Records calls instead of drawing
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, color: u32) {
            self.calls.push(format!("clear {color:06x}"));
        }
        fn circle(&mut self, _center: Vec2, radius: f32, color: u32) {
            self.calls.push(format!("circle {radius} {color:06x}"));
        }
        fn rect_outline(&mut self, _min: Vec2, max: Vec2, width: f32, color: u32) {
            self.calls.push(format!("rect {}x{} {width} {color:06x}", max.x, max.y));
        }
    }

    #[test]
    fn test_scene_contents() {
        let config = SimConfig {
            num_balls: 4,
            num_infected: 1,
            ..SimConfig::default()
        };
        let mut state = GameState::new(config, 8);
        state.balls[3].infection = Infection::Immune;

        let scene = build_scene(&state);
        assert_eq!(scene.circles.len(), 5);
        assert_eq!(scene.circles[0].color, colors::INFECTED);
        assert_eq!(scene.circles[1].color, colors::HEALTHY);
        assert_eq!(scene.circles[3].color, colors::IMMUNE);
        let player = scene.circles.last().unwrap();
        assert_eq!(player.color, colors::PLAYER);
        assert_eq!(player.center, state.player.pos);
    }

    #[test]
    fn test_draw_order() {
        let config = SimConfig {
            num_balls: 1,
            num_infected: 1,
            ..SimConfig::default()
        };
        let state = GameState::new(config, 8);
        let mut rec = Recorder::default();
        build_scene(&state).draw(&mut rec);
        assert_eq!(
            rec.calls,
            vec![
                "clear 1099bb".to_string(),
                "circle 15 ff0000".to_string(),
                "circle 20 0000ff".to_string(),
                "rect 1280x720 3 b00b69".to_string(),
            ]
        );
    }
}
