//! Energy-over-time line chart
//!
//! Three polylines (potential, kinetic, heat) rebuilt from the full history
//! every frame. The x axis is scaled to the newest sample time, the y axis
//! to the body's initial energy, with the same zero-energy guard as the bar
//! chart.

use glam::Vec2;

use super::bar_chart::normalized;
use super::vertex::{Vertex, colors};
use super::Viewport;
use crate::sim::{EnergyHistory, EnergySample};

/// Polyline thickness in pixels
const LINE_WIDTH: f32 = 1.5;

/// Generate polyline geometry for all three energy series.
pub fn line_chart(
    history: &EnergyHistory,
    initial_energy: f32,
    viewport: &Viewport,
) -> Vec<Vertex> {
    let samples = history.samples();
    if samples.len() < 2 {
        return Vec::new();
    }
    let max_time = history.max_time();

    let series: [(fn(&EnergySample) -> f32, [f32; 4]); 3] = [
        (|s| s.potential, colors::POTENTIAL),
        (|s| s.kinetic, colors::KINETIC),
        (|s| s.heat, colors::HEAT),
    ];

    let mut vertices = Vec::with_capacity(series.len() * (samples.len() - 1) * 6);
    for (value_of, color) in series {
        polyline(
            &mut vertices,
            samples.iter().map(|s| {
                let x = if max_time > 0.0 {
                    s.time / max_time * viewport.width
                } else {
                    0.0
                };
                let y = viewport.height * (1.0 - normalized(value_of(s), initial_energy));
                Vec2::new(x, y)
            }),
            color,
        );
    }

    vertices
}

/// Emit a thick polyline as one quad per segment
fn polyline(out: &mut Vec<Vertex>, points: impl Iterator<Item = Vec2>, color: [f32; 4]) {
    let points: Vec<Vec2> = points.collect();
    for pair in points.windows(2) {
        let dir = (pair[1] - pair[0]).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * (LINE_WIDTH / 2.0);

        let a1 = pair[0] + perp;
        let a2 = pair[0] - perp;
        let b1 = pair[1] + perp;
        let b2 = pair[1] - perp;

        out.push(Vertex::new(a1.x, a1.y, color));
        out.push(Vertex::new(a2.x, a2.y, color));
        out.push(Vertex::new(b1.x, b1.y, color));

        out.push(Vertex::new(b1.x, b1.y, color));
        out.push(Vertex::new(a2.x, a2.y, color));
        out.push(Vertex::new(b2.x, b2.y, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EnergySample;

    fn viewport() -> Viewport {
        Viewport {
            width: 400.0,
            height: 200.0,
        }
    }

    fn history_of(samples: &[(f32, f32, f32, f32)]) -> EnergyHistory {
        let mut history = EnergyHistory::unbounded();
        for &(time, potential, kinetic, heat) in samples {
            history.record(EnergySample {
                time,
                potential,
                kinetic,
                heat,
            });
        }
        history
    }

    #[test]
    fn test_too_few_samples_yields_nothing() {
        let history = history_of(&[(0.0, 196.0, 0.0, 0.0)]);
        assert!(line_chart(&history, 196.0, &viewport()).is_empty());
    }

    #[test]
    fn test_segment_count() {
        let history = history_of(&[
            (0.0, 196.0, 0.0, 0.0),
            (0.1, 190.0, 6.0, 0.0),
            (0.2, 180.0, 16.0, 0.0),
        ]);
        let vertices = line_chart(&history, 196.0, &viewport());
        // 3 series x 2 segments x 6 vertices
        assert_eq!(vertices.len(), 36);
    }

    #[test]
    fn test_x_axis_spans_run() {
        let history = history_of(&[(0.0, 1.0, 0.0, 0.0), (2.0, 0.5, 0.5, 0.0)]);
        let vp = viewport();
        let vertices = line_chart(&history, 1.0, &vp);

        let max_x = vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - vp.width).abs() <= LINE_WIDTH);
    }

    #[test]
    fn test_zero_energy_guard() {
        let history = history_of(&[(0.0, 0.0, 0.0, 0.0), (0.1, 0.0, 0.0, 0.0)]);
        let vp = viewport();
        let vertices = line_chart(&history, 0.0, &vp);
        for v in &vertices {
            assert!(v.position[1].is_finite());
            // All series flat on the baseline
            assert!((v.position[1] - vp.height).abs() <= LINE_WIDTH);
        }
    }
}
