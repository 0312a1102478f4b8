//! Initial placement of a freshly loaded model: uniform scale to a target size,
//! recentering at the origin, a fixed corrective orientation and an orthographic
//! camera extent that frames the result.
//!
//! Everything here is a pure function of its inputs. Applying the results to a
//! model node or camera is up to the caller.

use crate::core::geometry::{BoundingBox, Vec3};
use crate::error::{Result, ViewerError};
use log::debug;
use std::f32::consts::{FRAC_PI_2, PI};

/// Largest model dimension after normalization, in world units.
pub const DEFAULT_TARGET_SIZE: f32 = 2.0;
/// Share of the scaled model's larger on-screen side used as orthographic extent.
pub const DEFAULT_FRAMING_MARGIN: f32 = 0.6;
/// Relative rotation step: 15 degrees.
pub const DEFAULT_ROTATION_STEP: f32 = PI / 12.0;
pub const DEFAULT_ZOOM_IN_FACTOR: f32 = 0.9;
pub const DEFAULT_ZOOM_OUT_FACTOR: f32 = 1.1;

/// Corrective orientation for assets authored lying on their side: -90 degrees about Z.
pub fn default_orientation() -> Vec3 {
    Vec3::new(0.0, 0.0, -FRAC_PI_2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Placement computed for a model from its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub scale_factor: f32,
    /// Position of the model node, so that the scaled box center lands on the origin.
    pub translation: Vec3,
    /// Euler angles in radians.
    pub orientation: Vec3,
    pub camera_extent: f32,
}

/// Normalizes `bbox` so its largest side equals `target_size` and frames it with
/// the default margin and orientation.
pub fn compute_fit(bbox: &BoundingBox, target_size: f32) -> Result<FitResult> {
    fit_with(bbox, target_size, DEFAULT_FRAMING_MARGIN, default_orientation())
}

fn fit_with(
    bbox: &BoundingBox,
    target_size: f32,
    framing_margin: f32,
    orientation: Vec3,
) -> Result<FitResult> {
    require_positive("computeFit", "target size", target_size)?;
    require_positive("computeFit", "framing margin", framing_margin)?;

    if bbox.is_degenerate() {
        return Err(ViewerError::DegenerateGeometry);
    }
    let size = bbox.size();
    let max_dimension = bbox.max_dimension();

    let scale_factor = target_size / max_dimension;
    let center = bbox.center();
    let translation = -center.coords * scale_factor;

    let scaled_height = size.y * scale_factor;
    let scaled_width = size.x * scale_factor;
    let mut camera_extent = scaled_height.max(scaled_width) * framing_margin;
    if camera_extent <= 0.0 {
        // Flat along X and Y: the model is seen edge-on, frame the target size instead.
        camera_extent = target_size * framing_margin;
    }

    debug!(
        "Fit: max dimension {:.4}, scale {:.4}, extent {:.4}",
        max_dimension, scale_factor, camera_extent
    );

    Ok(FitResult {
        scale_factor,
        translation,
        orientation,
        camera_extent,
    })
}

fn require_positive(method: &str, name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ViewerError::invalid_argument(
            method,
            format!("{} must be positive, got {}", name, value),
        ))
    }
}

/// Adds `step` radians to one component of `current`.
pub fn apply_incremental_rotation(current: Vec3, axis: Axis, step: f32) -> Vec3 {
    let mut rotated = current;
    match axis {
        Axis::X => rotated.x += step,
        Axis::Y => rotated.y += step,
        Axis::Z => rotated.z += step,
    }
    rotated
}

/// Multiplies the orthographic extent by `factor`. No clamping.
pub fn apply_zoom(current_extent: f32, factor: f32) -> f32 {
    current_extent * factor
}

/// The tunable constants behind fitting and the relative controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FitPolicy {
    pub target_size: f32,
    pub framing_margin: f32,
    pub orientation: Vec3,
    pub rotation_step: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    /// Bounds for the camera extent. Zoom is unbounded while these are `None`.
    pub min_extent: Option<f32>,
    pub max_extent: Option<f32>,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            framing_margin: DEFAULT_FRAMING_MARGIN,
            orientation: default_orientation(),
            rotation_step: DEFAULT_ROTATION_STEP,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            min_extent: None,
            max_extent: None,
        }
    }
}

impl FitPolicy {
    /// Rejects policies that would produce a non-positive scale or camera extent.
    pub fn validate(&self) -> Result<()> {
        require_positive("fitPolicy", "target size", self.target_size)?;
        require_positive("fitPolicy", "framing margin", self.framing_margin)?;
        require_positive("fitPolicy", "zoom in factor", self.zoom_in_factor)?;
        require_positive("fitPolicy", "zoom out factor", self.zoom_out_factor)?;
        if !self.rotation_step.is_finite() || !self.orientation.iter().all(|a| a.is_finite()) {
            return Err(ViewerError::invalid_argument(
                "fitPolicy",
                "rotation values must be finite",
            ));
        }
        if let Some(min) = self.min_extent {
            require_positive("fitPolicy", "min extent", min)?;
        }
        if let Some(max) = self.max_extent {
            require_positive("fitPolicy", "max extent", max)?;
        }
        if let (Some(min), Some(max)) = (self.min_extent, self.max_extent)
            && min > max
        {
            return Err(ViewerError::invalid_argument(
                "fitPolicy",
                format!("min extent {} exceeds max extent {}", min, max),
            ));
        }
        Ok(())
    }

    pub fn fit(&self, bbox: &BoundingBox) -> Result<FitResult> {
        fit_with(bbox, self.target_size, self.framing_margin, self.orientation)
    }

    /// Placement used when `bbox` cannot be normalized: unit scale, still
    /// centered, framed as if the model had the target size.
    pub fn fallback_fit(&self, bbox: &BoundingBox) -> FitResult {
        FitResult {
            scale_factor: 1.0,
            translation: -bbox.center().coords,
            orientation: self.orientation,
            camera_extent: self.target_size * self.framing_margin,
        }
    }

    pub fn rotate(&self, current: Vec3, axis: Axis) -> Vec3 {
        apply_incremental_rotation(current, axis, self.rotation_step)
    }

    pub fn zoom(&self, current_extent: f32, direction: ZoomDirection) -> f32 {
        let factor = match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        };
        let mut extent = apply_zoom(current_extent, factor);
        if let Some(min) = self.min_extent {
            extent = extent.max(min);
        }
        if let Some(max) = self.max_extent {
            extent = extent.min(max);
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::f32::consts::TAU;

    const EPS: f32 = 1e-5;

    fn bbox(min: [f32; 3], max: [f32; 3]) -> BoundingBox {
        BoundingBox {
            min: Point3::from(min),
            max: Point3::from(max),
        }
    }

    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).norm() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn unit_cube_is_already_normalized() {
        let fit = compute_fit(&bbox([-1.0; 3], [1.0; 3]), 2.0).unwrap();
        assert_eq!(fit.scale_factor, 1.0);
        assert_vec_eq(fit.translation, Vec3::zeros());
        assert!((fit.camera_extent - 1.2).abs() < EPS);
    }

    #[test]
    fn offset_box_is_scaled_and_recentered() {
        let b = bbox([0.0, 0.0, 0.0], [4.0, 2.0, 1.0]);
        assert_eq!(b.max_dimension(), 4.0);
        assert_eq!(b.center(), Point3::new(2.0, 1.0, 0.5));

        let fit = compute_fit(&b, 2.0).unwrap();
        assert_eq!(fit.scale_factor, 0.5);
        assert_vec_eq(fit.translation, Vec3::new(-1.0, -0.5, -0.25));
        // max(2 * 0.5, 4 * 0.5) * 0.6
        assert!((fit.camera_extent - 1.2).abs() < EPS);
    }

    #[test]
    fn orientation_is_constant() {
        let a = compute_fit(&bbox([0.0; 3], [1.0; 3]), 2.0).unwrap();
        let b = compute_fit(&bbox([-5.0; 3], [30.0, 2.0, 9.0]), 7.0).unwrap();
        assert_vec_eq(a.orientation, Vec3::new(0.0, 0.0, -FRAC_PI_2));
        assert_eq!(a.orientation, b.orientation);
    }

    #[test]
    fn scaled_center_lands_on_origin() {
        let b = bbox([3.0, -7.0, 2.0], [9.0, -1.0, 5.0]);
        let fit = compute_fit(&b, 2.0).unwrap();
        let placed = b.center().coords * fit.scale_factor + fit.translation;
        assert_vec_eq(placed, Vec3::zeros());
    }

    #[test]
    fn degenerate_box_is_rejected() {
        let result = compute_fit(&bbox([0.0; 3], [0.0; 3]), 2.0);
        assert!(matches!(result, Err(ViewerError::DegenerateGeometry)));
    }

    #[test]
    fn non_positive_target_size_is_rejected() {
        let b = bbox([0.0; 3], [1.0; 3]);
        assert!(matches!(
            compute_fit(&b, 0.0),
            Err(ViewerError::InvalidArgument { .. })
        ));
        assert!(compute_fit(&b, f32::NAN).is_err());
    }

    #[test]
    fn flat_in_view_plane_still_gets_positive_extent() {
        let fit = compute_fit(&bbox([0.0; 3], [0.0, 0.0, 3.0]), 2.0).unwrap();
        assert!(fit.camera_extent > 0.0);
        assert!((fit.camera_extent - 1.2).abs() < EPS);
    }

    #[test]
    fn non_positive_margin_is_rejected() {
        let policy = FitPolicy {
            framing_margin: -0.6,
            ..FitPolicy::default()
        };
        let b = bbox([0.0; 3], [4.0, 2.0, 1.0]);
        assert!(matches!(
            policy.fit(&b),
            Err(ViewerError::InvalidArgument { .. })
        ));
        assert!(policy.validate().is_err());
    }

    #[test]
    fn policy_validation() {
        assert!(FitPolicy::default().validate().is_ok());

        let zero_target = FitPolicy {
            target_size: 0.0,
            ..FitPolicy::default()
        };
        assert!(zero_target.validate().is_err());

        let bad_zoom = FitPolicy {
            zoom_out_factor: 0.0,
            ..FitPolicy::default()
        };
        assert!(bad_zoom.validate().is_err());

        let inverted_bounds = FitPolicy {
            min_extent: Some(2.0),
            max_extent: Some(1.0),
            ..FitPolicy::default()
        };
        assert!(inverted_bounds.validate().is_err());
    }

    #[test]
    fn fit_is_deterministic() {
        let b = bbox([-0.3, 0.1, 2.0], [0.7, 0.4, 2.5]);
        assert_eq!(compute_fit(&b, 2.0).unwrap(), compute_fit(&b, 2.0).unwrap());
    }

    #[test]
    fn incremental_rotation_touches_one_axis() {
        let step = PI / 12.0;
        let r = apply_incremental_rotation(Vec3::zeros(), Axis::X, step);
        assert_vec_eq(r, Vec3::new(step, 0.0, 0.0));

        let r = apply_incremental_rotation(Vec3::new(1.0, 2.0, 3.0), Axis::Z, -1.0);
        assert_vec_eq(r, Vec3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn twenty_four_steps_make_a_full_turn() {
        let mut r = Vec3::zeros();
        for _ in 0..24 {
            r = apply_incremental_rotation(r, Axis::X, DEFAULT_ROTATION_STEP);
        }
        assert!((r.x - TAU).abs() < 1e-4);
        assert!((r.x % TAU).abs() < 1e-4 || (TAU - r.x % TAU).abs() < 1e-4);
        assert_eq!((r.y, r.z), (0.0, 0.0));
    }

    #[test]
    fn zoom_is_multiplicative_and_not_self_inverse() {
        let zoomed_in = apply_zoom(10.0, 0.9);
        assert!((zoomed_in - 9.0).abs() < EPS);

        let zoomed_out = apply_zoom(zoomed_in, 1.1);
        assert!((zoomed_out - 9.9).abs() < EPS);
        assert!((zoomed_out - 10.0).abs() > 0.05);
    }

    #[test]
    fn default_policy_zoom_is_unbounded() {
        let policy = FitPolicy::default();
        let mut extent = 1.0;
        for _ in 0..200 {
            extent = policy.zoom(extent, ZoomDirection::In);
        }
        assert!(extent < 1e-8);
    }

    #[test]
    fn policy_bounds_clamp_zoom() {
        let policy = FitPolicy {
            min_extent: Some(0.5),
            max_extent: Some(2.0),
            ..FitPolicy::default()
        };
        assert_eq!(policy.zoom(0.52, ZoomDirection::In), 0.5);
        assert_eq!(policy.zoom(1.95, ZoomDirection::Out), 2.0);
        assert!((policy.zoom(1.0, ZoomDirection::Out) - 1.1).abs() < EPS);
    }

    #[test]
    fn fallback_keeps_unit_scale() {
        let policy = FitPolicy::default();
        let b = bbox([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]);
        let fit = policy.fallback_fit(&b);
        assert_eq!(fit.scale_factor, 1.0);
        assert_vec_eq(fit.translation, Vec3::new(-1.0, -2.0, -3.0));
        assert!((fit.camera_extent - 1.2).abs() < EPS);
    }
}
