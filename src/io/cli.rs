use crate::core::geometry::BoundingBox;
use crate::error::{Result, ViewerError};
use crate::io::config::Config;
use clap::Parser;
use log::info;
use nalgebra::Point3;

#[derive(Parser, Debug)]
#[command(name = "model-viewer")]
#[command(about = "Fits a model's bounding box into an orthographic view and replays viewer commands")]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Minimum corner of the model bounds, e.g. `0,0,0`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub min: Option<Vec<f32>>,

    /// Maximum corner of the model bounds, e.g. `4,2,1`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub max: Option<Vec<f32>>,

    /// Normalized size of the model's largest side
    #[arg(long)]
    pub target_size: Option<f32>,

    /// JSON-lines file of method calls to run after loading
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<String>,
}

impl Cli {
    /// Loads the configuration file (or defaults) and applies command line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = if let Some(path) = &self.config {
            info!("Loading config: {}", path);
            Config::load(path)?
        } else {
            info!("Using default settings");
            Config::default()
        };

        if let Some(target_size) = self.target_size {
            config.fit.target_size = target_size;
        }
        Ok(config)
    }

    /// Bounds given on the command line. Both corners must be present with
    /// three components each.
    pub fn bounding_box(&self) -> Result<Option<BoundingBox>> {
        match (&self.min, &self.max) {
            (None, None) => Ok(None),
            (Some(min), Some(max)) => Ok(Some(BoundingBox::from_corners(
                corner("--min", min)?,
                corner("--max", max)?,
            ))),
            _ => Err(ViewerError::invalid_argument(
                "bounds",
                "--min and --max must be given together",
            )),
        }
    }
}

fn corner(flag: &str, values: &[f32]) -> Result<Point3<f32>> {
    match values {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(ViewerError::invalid_argument(
            "bounds",
            format!("{} expects x,y,z, got {} values", flag, values.len()),
        )),
    }
}
