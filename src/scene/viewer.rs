use crate::channel::command::{Command, MethodCall};
use crate::core::geometry::BoundingBox;
use crate::error::{Result, ViewerError};
use crate::scene::camera::Camera;
use crate::scene::fit::{FitPolicy, FitResult};
use crate::scene::model::ModelNode;
use log::{debug, info, warn};
use nalgebra::Point3;

pub const DEFAULT_CAMERA_DISTANCE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelState {
    NotLoaded,
    Loaded(ModelNode),
}

/// One embedded viewer: a model slot, the camera that frames it and the
/// policy driving fit, rotate and zoom.
#[derive(Debug, Clone)]
pub struct ModelViewer {
    policy: FitPolicy,
    camera: Camera,
    state: ModelState,
}

impl ModelViewer {
    pub fn new(policy: FitPolicy, camera_distance: f32) -> Result<Self> {
        policy.validate()?;
        if !(camera_distance.is_finite() && camera_distance > 0.0) {
            return Err(ViewerError::invalid_argument(
                "createView",
                format!("camera distance must be positive, got {}", camera_distance),
            ));
        }
        Ok(Self {
            policy,
            camera: Camera::looking_at_origin(camera_distance, 1.0),
            state: ModelState::NotLoaded,
        })
    }

    /// Places a model with the given bounds and frames it. A box that cannot
    /// be normalized keeps unit scale; any other fit error is returned and
    /// leaves the viewer as it was.
    pub fn load_model(&mut self, bbox: BoundingBox) -> Result<FitResult> {
        let mut node = ModelNode::new(bbox);
        let fit = match self.policy.fit(&bbox) {
            Ok(fit) => fit,
            Err(ViewerError::DegenerateGeometry) => {
                warn!("{}; keeping unit scale", ViewerError::DegenerateGeometry);
                self.policy.fallback_fit(&bbox)
            }
            Err(e) => return Err(e),
        };
        node.apply_fit(&fit);
        self.camera.set_extent(fit.camera_extent);
        self.state = ModelState::Loaded(node);

        info!(
            "Model loaded. Scale: {:.4}, Position: {:?}, Camera extent: {:.4}",
            fit.scale_factor, fit.translation, fit.camera_extent
        );
        Ok(fit)
    }

    pub fn unload_model(&mut self) {
        self.state = ModelState::NotLoaded;
    }

    /// Parses and runs a raw channel call. A call that fails to parse leaves
    /// the viewer untouched.
    pub fn handle_method_call(&mut self, call: &MethodCall) -> Result<()> {
        let command = Command::parse(call)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        let node = match &mut self.state {
            ModelState::Loaded(node) => node,
            ModelState::NotLoaded => return Err(ViewerError::ModelNotLoaded),
        };

        match command {
            Command::Rotate(axis) => {
                node.euler_angles = self.policy.rotate(node.euler_angles, axis);
            }
            Command::Zoom(direction) => {
                let extent = self.policy.zoom(self.camera.extent, direction);
                self.camera.set_extent(extent);
            }
            Command::SetRotation { x, y, z } => {
                node.euler_angles.x = x.to_radians();
                node.euler_angles.y = y.to_radians();
                node.euler_angles.z = z.to_radians();
            }
            Command::SetScale(scale) => {
                node.scale = scale;
            }
        }
        debug!("{} applied", command.method_name());
        Ok(())
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn model(&self) -> Option<&ModelNode> {
        match &self.state {
            ModelState::Loaded(node) => Some(node),
            ModelState::NotLoaded => None,
        }
    }

    /// Corners of the model bounds in normalized device coordinates, as the
    /// camera currently sees them. `None` without a model.
    pub fn projected_bounds(&self) -> Option<[Point3<f32>; 8]> {
        let node = self.model()?;
        let clip = self.camera.projection_matrix() * self.camera.view_matrix() * node.model_matrix();
        Some(node.bounding_box.corners().map(|c| clip.transform_point(&c)))
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn policy(&self) -> &FitPolicy {
        &self.policy
    }
}

impl Default for ModelViewer {
    fn default() -> Self {
        Self {
            policy: FitPolicy::default(),
            camera: Camera::looking_at_origin(DEFAULT_CAMERA_DISTANCE, 1.0),
            state: ModelState::NotLoaded,
        }
    }
}
