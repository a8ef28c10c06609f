//! Fixed orthographic camera
//!
//! World coordinates are rotated by the azimuth about the z-axis, then
//! tilted by the elevation, and dropped onto the screen plane. Depth is
//! kept (positive toward the viewer) so the rasterizer can paint near
//! geometry over far geometry.

/// A world point projected onto the screen plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// Screen-right coordinate, world units
    pub x: f64,
    /// Screen-up coordinate, world units
    pub y: f64,
    /// Distance toward the viewer, world units
    pub depth: f64,
}

/// Orthographic view transform at a fixed elevation/azimuth
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    sin_az: f64,
    cos_az: f64,
    sin_el: f64,
    cos_el: f64,
}

impl Camera {
    /// Create a camera at the given orientation, in degrees
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        let (sin_el, cos_el) = elevation_deg.to_radians().sin_cos();
        let (sin_az, cos_az) = azimuth_deg.to_radians().sin_cos();
        Self {
            sin_az,
            cos_az,
            sin_el,
            cos_el,
        }
    }

    /// Project a world point onto the screen plane
    pub fn project(&self, point: [f64; 3]) -> Projected {
        let [x, y, z] = point;

        // component in the ground plane pointing at the viewer
        let toward = x * self.cos_az + y * self.sin_az;

        Projected {
            x: -x * self.sin_az + y * self.cos_az,
            y: z * self.cos_el - toward * self.sin_el,
            depth: toward * self.cos_el + z * self.sin_el,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_view() {
        // Viewer on the +x axis at zero elevation: y maps to screen-right,
        // z to screen-up, x to depth.
        let camera = Camera::new(0.0, 0.0);

        let px = camera.project([1.0, 0.0, 0.0]);
        assert!(px.x.abs() < 1e-12 && px.y.abs() < 1e-12);
        assert!((px.depth - 1.0).abs() < 1e-12);

        let py = camera.project([0.0, 1.0, 0.0]);
        assert!((py.x - 1.0).abs() < 1e-12);

        let pz = camera.project([0.0, 0.0, 1.0]);
        assert!((pz.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_z_axis_points_up_at_any_azimuth() {
        for azim in [0.0, 45.0, 135.0, 270.0] {
            let camera = Camera::new(20.0, azim);
            let p = camera.project([0.0, 0.0, 1.0]);
            assert!(p.y > 0.9);
            assert!(p.x.abs() < 1e-12);
        }
    }

    #[test]
    fn test_projection_is_linear() {
        let camera = Camera::new(20.0, 135.0);
        let a = camera.project([0.3, -0.2, 0.5]);
        let b = camera.project([0.6, -0.4, 1.0]);

        assert!((b.x - 2.0 * a.x).abs() < 1e-12);
        assert!((b.y - 2.0 * a.y).abs() < 1e-12);
        assert!((b.depth - 2.0 * a.depth).abs() < 1e-12);
    }

    #[test]
    fn test_depth_orders_front_to_back() {
        let camera = Camera::new(20.0, 135.0);

        // the point facing the camera is nearer than its antipode
        let view_dir = [
            20.0_f64.to_radians().cos() * 135.0_f64.to_radians().cos(),
            20.0_f64.to_radians().cos() * 135.0_f64.to_radians().sin(),
            20.0_f64.to_radians().sin(),
        ];
        let near = camera.project(view_dir);
        let far = camera.project([-view_dir[0], -view_dir[1], -view_dir[2]]);

        assert!(near.depth > 0.99);
        assert!(far.depth < -0.99);
    }

    #[test]
    fn test_lengths_preserved_on_screen_axes() {
        // orthographic projection never magnifies
        let camera = Camera::new(37.0, 211.0);
        for point in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
            let p = camera.project(point);
            let len = (p.x * p.x + p.y * p.y + p.depth * p.depth).sqrt();
            assert!((len - 1.0).abs() < 1e-12);
        }
    }
}
