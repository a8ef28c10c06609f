//! Scene composition
//!
//! Builds the world-space geometry the rasterizer paints: one ray from
//! the origin per state, the parametric wireframe sphere, and the
//! coordinate axes with their label anchors.

use crate::bloch::BlochVector;
use crate::fiducial::ZaunerSet;
use crate::render::config::RenderConfig;
use std::f64::consts::PI;

/// A straight segment in world space
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

/// A text label anchored to a world point
#[derive(Clone, Debug)]
pub(crate) struct Label {
    pub anchor: [f64; 3],
    pub text: &'static str,
}

pub(crate) struct Scene {
    pub rays: Vec<Segment>,
    pub wires: Vec<Vec<[f64; 3]>>,
    pub axes: Vec<Segment>,
    pub labels: Vec<Label>,
}

impl Scene {
    pub(crate) fn compose(set: &ZaunerSet, config: &RenderConfig) -> Self {
        let origin = [0.0, 0.0, 0.0];

        let rays = set
            .iter()
            .map(|state| {
                let point = BlochVector::from_state(state);
                Segment {
                    start: origin,
                    end: [point.x, point.y, point.z],
                }
            })
            .collect();

        let limit = config.axis_limit;
        let axes = vec![
            Segment {
                start: [-limit, 0.0, 0.0],
                end: [limit, 0.0, 0.0],
            },
            Segment {
                start: [0.0, -limit, 0.0],
                end: [0.0, limit, 0.0],
            },
            Segment {
                start: [0.0, 0.0, -limit],
                end: [0.0, 0.0, limit],
            },
        ];

        // label anchors float just past the positive axis tips
        let tip = limit * 1.15;
        let labels = vec![
            Label {
                anchor: [tip, 0.0, 0.0],
                text: "X",
            },
            Label {
                anchor: [0.0, tip, 0.0],
                text: "Y",
            },
            Label {
                anchor: [0.0, 0.0, tip],
                text: "Z",
            },
        ];

        Self {
            rays,
            wires: wireframe(config.meridians, config.parallels),
            axes,
            labels,
        }
    }
}

/// Parametric unit sphere as polylines
///
/// Samples u ∈ [0, 2π] at `meridians` points and v ∈ [0, π] at
/// `parallels` points, endpoints included, and emits a polyline along
/// each grid direction.
fn wireframe(meridians: usize, parallels: usize) -> Vec<Vec<[f64; 3]>> {
    let meridians = meridians.max(2);
    let parallels = parallels.max(2);

    let point = |u: f64, v: f64| [u.cos() * v.sin(), u.sin() * v.sin(), v.cos()];
    let u_at = |i: usize| 2.0 * PI * i as f64 / (meridians - 1) as f64;
    let v_at = |j: usize| PI * j as f64 / (parallels - 1) as f64;

    let mut lines = Vec::with_capacity(meridians + parallels);

    for i in 0..meridians {
        lines.push((0..parallels).map(|j| point(u_at(i), v_at(j))).collect());
    }
    for j in 0..parallels {
        lines.push((0..meridians).map(|i| point(u_at(i), v_at(j))).collect());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(p: [f64; 3]) -> f64 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn test_one_ray_per_state() {
        let set = ZaunerSet::generate();
        let scene = Scene::compose(&set, &RenderConfig::default());

        assert_eq!(scene.rays.len(), 4);
        for ray in &scene.rays {
            assert_eq!(ray.start, [0.0, 0.0, 0.0]);
            assert!((magnitude(ray.end) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wireframe_points_on_unit_sphere() {
        for line in wireframe(20, 10) {
            for point in line {
                assert!((magnitude(point) - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_wireframe_line_count() {
        let lines = wireframe(20, 10);
        assert_eq!(lines.len(), 30);
    }

    #[test]
    fn test_wireframe_closes_the_seam() {
        // first and last meridian coincide (u = 0 and u = 2π)
        let lines = wireframe(20, 10);
        let first = &lines[0];
        let last = &lines[19];
        for (a, b) in first.iter().zip(last) {
            for k in 0..3 {
                assert!((a[k] - b[k]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_degenerate_resolution_clamped() {
        let lines = wireframe(0, 1);
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(line.len() >= 2);
        }
    }

    #[test]
    fn test_axes_span_bounds() {
        let set = ZaunerSet::generate();
        let scene = Scene::compose(&set, &RenderConfig::default());

        assert_eq!(scene.axes.len(), 3);
        assert_eq!(scene.axes[0].start, [-1.0, 0.0, 0.0]);
        assert_eq!(scene.axes[0].end, [1.0, 0.0, 0.0]);
        assert_eq!(scene.axes[2].end, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_labels_past_positive_tips() {
        let set = ZaunerSet::generate();
        let scene = Scene::compose(&set, &RenderConfig::default());

        let texts: Vec<&str> = scene.labels.iter().map(|l| l.text).collect();
        assert_eq!(texts, ["X", "Y", "Z"]);
        for label in &scene.labels {
            assert!(magnitude(label.anchor) > 1.0);
        }
    }
}
