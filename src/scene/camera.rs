use crate::core::math::transform::TransformFactory;
use nalgebra::{Matrix4, Point3, Vector3};

/// Orthographic camera framing the model. Manages the View and Projection matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    // --- Common Parameters ---
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub near: f32,
    pub far: f32,

    // --- Orthographic ---
    /// Half-height of the view volume ("orthographic scale").
    pub extent: f32,
    pub aspect_ratio: f32,

    // --- Cached Matrices ---
    view_matrix: Matrix4<f32>,
    projection_matrix: Matrix4<f32>,
}

impl Camera {
    pub fn new_orthographic(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        extent: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut cam = Self {
            position,
            target,
            up,
            near,
            far,
            extent,
            aspect_ratio,
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
        };
        cam.update_matrices();
        cam
    }

    /// Camera on the +Z axis at `distance`, looking at the origin.
    pub fn looking_at_origin(distance: f32, extent: f32) -> Self {
        Self::new_orthographic(
            Point3::new(0.0, 0.0, distance),
            Point3::origin(),
            Vector3::y(),
            extent,
            1.0,
            0.1,
            100.0,
        )
    }

    pub fn set_extent(&mut self, extent: f32) {
        self.extent = extent;
        self.update_matrices();
    }

    /// Recalculates View and Projection matrices based on current parameters.
    pub fn update_matrices(&mut self) {
        self.view_matrix = TransformFactory::view(&self.position, &self.target, &self.up);

        let half_height = self.extent;
        let half_width = half_height * self.aspect_ratio;
        self.projection_matrix = TransformFactory::orthographic(
            -half_width,
            half_width, // Left, Right
            -half_height,
            half_height, // Bottom, Top
            self.near,
            self.far,
        );
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix
    }
}
