//! Ball and ground geometry for the simulation canvas

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use super::Viewport;
use crate::sim::Body;

/// Ground strip thickness in pixels
const GROUND_THICKNESS: f32 = 4.0;

/// Per-run presentation state: where the ball sits horizontally and what
/// color it wears. Derived once per run from the session seed so replays
/// look identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStyle {
    pub x: f32,
    pub color: [f32; 4],
}

impl BallStyle {
    pub fn from_seed(seed: u64, viewport: &Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let margin = 20.0_f32.min(viewport.width / 2.0);
        let x = rng.random_range(margin..=(viewport.width - margin).max(margin));
        // Mid-bright pastels so the ball reads against the dark background
        let color = [
            rng.random_range(0.45..0.85),
            rng.random_range(0.45..0.85),
            rng.random_range(0.45..0.85),
            1.0,
        ];
        Self { x, color }
    }
}

/// Triangle-list circle for the ball; the circle bottom touches the ground
/// plane when height is 0
pub fn ball(body: &Body, style: &BallStyle, viewport: &Viewport) -> Vec<Vertex> {
    let radius = body.radius();
    let center = Vec2::new(style.x, viewport.y_of(body.height) - radius);
    circle(center, radius, style.color, 32)
}

/// Thin strip along the bottom edge marking the ground plane
pub fn ground(viewport: &Viewport) -> Vec<Vertex> {
    quad(
        Vec2::new(0.0, viewport.height - GROUND_THICKNESS),
        Vec2::new(viewport.width, viewport.height),
        colors::GROUND,
    )
}

/// Generate vertices for a filled circle
fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Axis-aligned quad from top-left to bottom-right as two triangles
pub(super) fn quad(top_left: Vec2, bottom_right: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let tr = Vec2::new(bottom_right.x, top_left.y);
    let bl = Vec2::new(top_left.x, bottom_right.y);

    vec![
        Vertex::new(top_left.x, top_left.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(bottom_right.x, bottom_right.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimParams;

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_ball_style_deterministic() {
        let vp = viewport();
        let a = BallStyle::from_seed(42, &vp);
        let b = BallStyle::from_seed(42, &vp);
        assert_eq!(a, b);
        assert!(a.x >= 20.0 && a.x <= vp.width - 20.0);
    }

    #[test]
    fn test_ball_rests_on_ground() {
        let body = Body::new(&SimParams {
            initial_height: 0.0,
            ..Default::default()
        });
        let vp = viewport();
        let style = BallStyle::from_seed(1, &vp);
        let vertices = ball(&body, &style, &vp);

        // Center vertex of every fan triangle sits one radius above the floor
        assert_eq!(vertices[0].position[1], vp.height - body.radius());
        // No vertex dips below the canvas
        for v in &vertices {
            assert!(v.position[1] <= vp.height + 1e-3);
        }
    }

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::ZERO, 10.0, colors::GROUND, 32);
        assert_eq!(vertices.len(), 96);
    }

    #[test]
    fn test_ground_spans_viewport() {
        let vp = viewport();
        let vertices = ground(&vp);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        assert!(xs.contains(&0.0));
        assert!(xs.contains(&vp.width));
    }
}
