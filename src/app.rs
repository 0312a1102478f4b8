use crate::channel::command::MethodCall;
use crate::channel::registry::{ModelViewerFactory, ViewRegistry};
use crate::channel::{CHANNEL_NAME, VIEW_TYPE};
use crate::core::geometry::BoundingBox;
use crate::error::Result;
use crate::io::config::Config;
use crate::scene::fit::FitResult;
use crate::scene::viewer::ModelViewer;
use log::{info, warn};
use std::time::Instant;

/// Outcome of a headless run.
#[derive(Debug)]
pub struct RunSummary {
    pub viewer: ModelViewer,
    pub fit: Option<FitResult>,
    pub applied: usize,
    pub failed: usize,
}

/// Registers the viewer factory, creates one view and replays `calls` against it.
/// Failed calls are logged and counted; they never abort the run.
pub fn run_cli(config: &Config, bbox: Option<BoundingBox>, calls: &[MethodCall]) -> Result<RunSummary> {
    info!("Starting headless viewer on channel '{}'...", CHANNEL_NAME);
    let start_time = Instant::now();

    let mut registry = ViewRegistry::new();
    registry.register(
        VIEW_TYPE,
        Box::new(ModelViewerFactory {
            policy: config.fit_policy()?,
            camera_distance: config.camera.distance,
            bounding_box: None,
        }),
    )?;

    let mut viewer = registry.create_view(VIEW_TYPE, 0)?;
    let fit = match bbox.or_else(|| config.bounding_box()) {
        Some(bbox) => Some(viewer.load_model(bbox)?),
        None => {
            warn!("No model bounds given; commands will be rejected");
            None
        }
    };

    let mut applied = 0;
    let mut failed = 0;
    for call in calls {
        match viewer.handle_method_call(call) {
            Ok(()) => applied += 1,
            Err(e) => {
                warn!("{} failed [{}]: {}", call.method, e.code(), e);
                failed += 1;
            }
        }
    }

    info!(
        "Replayed {} commands ({} failed) in {:.2?}",
        calls.len(),
        failed,
        start_time.elapsed()
    );

    Ok(RunSummary {
        viewer,
        fit,
        applied,
        failed,
    })
}
