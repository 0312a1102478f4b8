use crate::core::geometry::{BoundingBox, Vec3};
use crate::core::math::transform::TransformFactory;
use crate::scene::fit::FitResult;
use nalgebra::Matrix4;

/// A loaded model as the viewer sees it: its local bounds plus the node
/// transform (position, uniform scale, Euler orientation).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    pub bounding_box: BoundingBox,
    pub position: Vec3,
    pub scale: f32,
    /// Euler angles in radians.
    pub euler_angles: Vec3,
}

impl ModelNode {
    /// A node at the origin with identity transform.
    pub fn new(bounding_box: BoundingBox) -> Self {
        Self {
            bounding_box,
            position: Vec3::zeros(),
            scale: 1.0,
            euler_angles: Vec3::zeros(),
        }
    }

    pub fn apply_fit(&mut self, fit: &FitResult) {
        self.scale = fit.scale_factor;
        self.position = fit.translation;
        self.euler_angles = fit.orientation;
    }

    /// Local-to-world matrix: scale, then rotate, then translate.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        TransformFactory::translation(&self.position)
            * TransformFactory::euler(&self.euler_angles)
            * TransformFactory::scaling(self.scale)
    }
}
