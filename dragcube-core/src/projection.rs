/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Extra room left around the cube when framing it
const FRAMING_MARGIN: f64 = 1.05;

/// Maps CSS transform space (y down, z toward the viewer) to the y-up
/// world the camera works in.
pub fn css_to_world() -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, -1.0, 1.0))
}

/// Width-to-height ratio of a `width` x `height` viewport whose pixels are
/// `pixel_aspect` times as wide as they are tall. Empty viewports count as
/// one pixel so the ratio stays positive.
pub fn viewport_aspect(width: u32, height: u32, pixel_aspect: f64) -> f64 {
    width.max(1) as f64 * pixel_aspect / height.max(1) as f64
}

/// Perspective camera for 3D rendering
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_aspect(viewport_aspect(width, height, 1.0))
    }

    fn with_aspect(aspect: f64) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f64::consts::PI / 4.0, // 45 degrees
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// A camera on the +Z axis far enough back that the cube's bounding
    /// sphere fits inside the narrower of the two view angles.
    pub fn framing(half_edge: f64, aspect: f64) -> Self {
        let camera = Self::with_aspect(aspect);

        let radius = half_edge * 3f64.sqrt();
        let tan_vertical = (camera.fov / 2.0).tan();
        let tan_narrowest = tan_vertical.min(tan_vertical * camera.aspect);
        let distance = FRAMING_MARGIN * radius / tan_narrowest.atan().sin();

        Self {
            position: Point3::new(0.0, 0.0, distance),
            near: (distance - radius) * 0.5,
            far: distance + radius * 2.0,
            ..camera
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a point to screen space. Returns `(x, y, depth)` with depth in
    /// normalized device units (smaller is nearer), or `None` when the point
    /// lies outside the near/far range. Points beside the screen are still
    /// returned; callers clip them.
    pub fn project_to_screen(
        &self,
        point: &Point3<f64>,
        model_matrix: &Matrix4<f64>,
        width: u32,
        height: u32,
    ) -> Option<(f64, f64, f64)> {
        let mvp = self.projection_matrix() * self.view_matrix() * model_matrix;
        let clip = mvp * point.to_homogeneous();

        // behind the camera
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !ndc.z.is_finite() || ndc.z < -1.0 || ndc.z > 1.0 {
            return None;
        }

        let screen_x = (ndc.x + 1.0) * 0.5 * width as f64;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f64;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
