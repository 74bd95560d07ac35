//! Instantaneous energy bar chart
//!
//! Three bars (potential, kinetic, heat), each normalized against the body's
//! initial total energy. A body launched with zero energy renders zero-height
//! bars rather than dividing by zero.

use glam::Vec2;

use super::scene::quad;
use super::vertex::{Vertex, colors};
use super::Viewport;
use crate::sim::Body;

/// Fraction of a bar slot left empty on each side
const BAR_GAP: f32 = 0.15;

/// Generate bar geometry for the current energy split. Bars grow upward
/// from the bottom edge of `viewport`.
pub fn bar_chart(body: &Body, viewport: &Viewport) -> Vec<Vertex> {
    let bars = [
        (body.ledger.potential, colors::POTENTIAL),
        (body.ledger.kinetic, colors::KINETIC),
        (body.ledger.heat, colors::HEAT),
    ];

    let slot = viewport.width / bars.len() as f32;
    let mut vertices = Vec::with_capacity(bars.len() * 6);

    for (i, (value, color)) in bars.into_iter().enumerate() {
        let height = viewport.height * normalized(value, body.initial_energy);
        let x0 = i as f32 * slot + slot * BAR_GAP;
        let x1 = (i + 1) as f32 * slot - slot * BAR_GAP;
        vertices.extend(quad(
            Vec2::new(x0, viewport.height - height),
            Vec2::new(x1, viewport.height),
            color,
        ));
    }

    vertices
}

/// value / denominator clamped to [0, 1]; zero when the denominator is zero
pub(super) fn normalized(value: f32, denominator: f32) -> f32 {
    if denominator > 0.0 {
        (value / denominator).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimParams;
    use crate::sim::Body;

    fn viewport() -> Viewport {
        Viewport {
            width: 300.0,
            height: 200.0,
        }
    }

    #[test]
    fn test_three_bars() {
        let body = Body::new(&SimParams::default());
        let vertices = bar_chart(&body, &viewport());
        assert_eq!(vertices.len(), 18);
    }

    #[test]
    fn test_full_potential_bar_at_launch() {
        // At rest on launch: all energy is potential, bar spans full height
        let body = Body::new(&SimParams::default());
        let vp = viewport();
        let vertices = bar_chart(&body, &vp);

        let potential_top = vertices[0].position[1];
        assert_eq!(potential_top, 0.0);

        // Kinetic and heat bars are flat at the baseline
        for v in &vertices[6..] {
            assert_eq!(v.position[1], vp.height);
        }
    }

    #[test]
    fn test_zero_energy_guard() {
        // Zero height, zero speed: initial energy is 0, no NaN anywhere
        let body = Body::new(&SimParams {
            initial_height: 0.0,
            launch_speed: 0.0,
            ..Default::default()
        });
        let vp = viewport();
        let vertices = bar_chart(&body, &vp);
        for v in &vertices {
            assert!(v.position[1].is_finite());
            assert_eq!(v.position[1], vp.height, "all bars flat at baseline");
        }
    }

    #[test]
    fn test_normalized() {
        assert_eq!(normalized(50.0, 100.0), 0.5);
        assert_eq!(normalized(150.0, 100.0), 1.0);
        assert_eq!(normalized(10.0, 0.0), 0.0);
        assert_eq!(normalized(-5.0, 100.0), 0.0);
    }
}
