pub mod camera;
pub mod fit;
pub mod model;
pub mod viewer;
