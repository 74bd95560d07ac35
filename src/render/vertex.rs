//! Vertex types for 2D rendering

/// Simple 2D vertex with position and color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene and chart elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const GROUND: [f32; 4] = [0.3, 0.3, 0.4, 1.0];
    pub const POTENTIAL: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
    pub const KINETIC: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const HEAT: [f32; 4] = [1.0, 0.4, 0.2, 1.0];
}
