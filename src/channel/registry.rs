//! View factories keyed by view type, populated at startup and queried
//! whenever the embedding side asks for a new view.

use crate::core::geometry::BoundingBox;
use crate::error::{Result, ViewerError};
use crate::scene::fit::FitPolicy;
use crate::scene::viewer::ModelViewer;
use log::info;
use std::collections::HashMap;

pub trait ViewFactory {
    fn create(&self, view_id: i64) -> Result<ModelViewer>;
}

/// Builds viewers sharing one policy, optionally preloaded with a model.
#[derive(Debug, Clone)]
pub struct ModelViewerFactory {
    pub policy: FitPolicy,
    pub camera_distance: f32,
    pub bounding_box: Option<BoundingBox>,
}

impl ViewFactory for ModelViewerFactory {
    fn create(&self, view_id: i64) -> Result<ModelViewer> {
        let mut viewer = ModelViewer::new(self.policy.clone(), self.camera_distance)?;
        if let Some(bbox) = self.bounding_box {
            viewer.load_model(bbox)?;
        }
        info!("Created model viewer #{}", view_id);
        Ok(viewer)
    }
}

#[derive(Default)]
pub struct ViewRegistry {
    factories: HashMap<String, Box<dyn ViewFactory>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, view_type: &str, factory: Box<dyn ViewFactory>) -> Result<()> {
        if self.factories.contains_key(view_type) {
            return Err(ViewerError::DuplicateViewType(view_type.to_string()));
        }
        self.factories.insert(view_type.to_string(), factory);
        Ok(())
    }

    pub fn create_view(&self, view_type: &str, view_id: i64) -> Result<ModelViewer> {
        self.factories
            .get(view_type)
            .ok_or_else(|| ViewerError::UnknownViewType(view_type.to_string()))?
            .create(view_id)
    }

    pub fn contains(&self, view_type: &str) -> bool {
        self.factories.contains_key(view_type)
    }
}
