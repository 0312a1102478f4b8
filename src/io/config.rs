use crate::core::geometry::{BoundingBox, Vec3};
use crate::error::Result;
use crate::scene::fit::{self, FitPolicy};
use crate::scene::viewer::DEFAULT_CAMERA_DISTANCE;
use nalgebra::Point3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fit: FitConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub model: Option<ModelConfig>,
}

#[derive(Debug, Deserialize)]
pub struct FitConfig {
    #[serde(default = "default_target_size")]
    pub target_size: f32,
    #[serde(default = "default_framing_margin")]
    pub framing_margin: f32,
    /// Corrective orientation in degrees.
    #[serde(default = "default_orientation")]
    pub orientation: [f32; 3],
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            target_size: default_target_size(),
            framing_margin: default_framing_margin(),
            orientation: default_orientation(),
        }
    }
}

fn default_target_size() -> f32 {
    fit::DEFAULT_TARGET_SIZE
}
fn default_framing_margin() -> f32 {
    fit::DEFAULT_FRAMING_MARGIN
}
fn default_orientation() -> [f32; 3] {
    [0.0, 0.0, -90.0]
}

#[derive(Debug, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_rotation_step")]
    pub rotation_step_degrees: f32,
    #[serde(default = "default_zoom_in")]
    pub zoom_in_factor: f32,
    #[serde(default = "default_zoom_out")]
    pub zoom_out_factor: f32,
    // --- Zoom bounds (unbounded when absent) ---
    pub min_extent: Option<f32>,
    pub max_extent: Option<f32>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotation_step_degrees: default_rotation_step(),
            zoom_in_factor: default_zoom_in(),
            zoom_out_factor: default_zoom_out(),
            min_extent: None,
            max_extent: None,
        }
    }
}

fn default_rotation_step() -> f32 {
    15.0
}
fn default_zoom_in() -> f32 {
    fit::DEFAULT_ZOOM_IN_FACTOR
}
fn default_zoom_out() -> f32 {
    fit::DEFAULT_ZOOM_OUT_FACTOR
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_distance")]
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: default_distance(),
        }
    }
}

fn default_distance() -> f32 {
    DEFAULT_CAMERA_DISTANCE
}

/// Local bounds of the model to place.
#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl ModelConfig {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(Point3::from(self.min), Point3::from(self.max))
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The fit and control policy described by this config, checked for values
    /// that would break the fit.
    pub fn fit_policy(&self) -> Result<FitPolicy> {
        let [x, y, z] = self.fit.orientation;
        let policy = FitPolicy {
            target_size: self.fit.target_size,
            framing_margin: self.fit.framing_margin,
            orientation: Vec3::new(x.to_radians(), y.to_radians(), z.to_radians()),
            rotation_step: self.controls.rotation_step_degrees.to_radians(),
            zoom_in_factor: self.controls.zoom_in_factor,
            zoom_out_factor: self.controls.zoom_out_factor,
            min_extent: self.controls.min_extent,
            max_extent: self.controls.max_extent,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.model.as_ref().map(ModelConfig::bounding_box)
    }
}
