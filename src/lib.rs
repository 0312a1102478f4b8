pub mod app;
pub mod channel;
pub mod core;
pub mod error;
pub mod io;
pub mod scene;

pub use error::{Result, ViewerError};
