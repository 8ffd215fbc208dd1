//! Rendering boundary
//!
//! The game never draws by itself. `scene` turns a `GameState` into a flat
//! list of circles, which is either replayed against a host `Renderer` or
//! tessellated into vertices for a GPU backend.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Circle, Scene, build_scene};
pub use shapes::tessellate;
pub use vertex::Vertex;

use glam::Vec2;

/// Drawing surface supplied by the host (canvas, GPU, terminal...)
pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, color: u32);
    fn circle(&mut self, center: Vec2, radius: f32, color: u32);
    fn rect_outline(&mut self, min: Vec2, max: Vec2, width: f32, color: u32);
}

/// Colors for game elements (0xRRGGBB)
pub mod colors {
    pub const BACKGROUND: u32 = 0x1099bb;
    pub const BORDER: u32 = 0xb00b69;
    pub const PLAYER: u32 = 0x0000ff;
    pub const BULLET: u32 = 0xffffff;
    pub const HEALTHY: u32 = 0x008b02;
    pub const INFECTED: u32 = 0xff0000;
    pub const IMMUNE: u32 = 0xffd700;
}

/// Unpack 0xRRGGBB into linear-ish RGBA floats
pub fn rgba(color: u32, alpha: f32) -> [f32; 4] {
    let r = ((color >> 16) & 0xff) as f32 / 255.0;
    let g = ((color >> 8) & 0xff) as f32 / 255.0;
    let b = (color & 0xff) as f32 / 255.0;
    [r, g, b, alpha]
}
