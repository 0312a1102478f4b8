use clap::Parser;
use log::error;
use model_viewer::app::run_cli;
use model_viewer::io::cli::Cli;
use model_viewer::io::script::load_script;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.load_config().map_err(|e| {
        error!("Failed to load config: {}", e);
        e
    })?;

    let calls = match &cli.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let summary = run_cli(&config, cli.bounding_box()?, &calls)?;

    if let Some(fit) = summary.fit {
        println!(
            "Fit: scale {:.4}, translation ({:.4}, {:.4}, {:.4}), camera extent {:.4}",
            fit.scale_factor, fit.translation.x, fit.translation.y, fit.translation.z, fit.camera_extent
        );
    }
    if let Some(node) = summary.viewer.model() {
        let angles = node.euler_angles.map(f32::to_degrees);
        println!(
            "Pose: scale {:.4}, rotation ({:.2}, {:.2}, {:.2}) deg",
            node.scale, angles.x, angles.y, angles.z
        );
    }
    if let Some(corners) = summary.viewer.projected_bounds() {
        let (lo, hi) = corners.iter().fold(
            ((f32::MAX, f32::MAX), (f32::MIN, f32::MIN)),
            |((x0, y0), (x1, y1)), c| ((x0.min(c.x), y0.min(c.y)), (x1.max(c.x), y1.max(c.y))),
        );
        println!(
            "On screen (NDC): x [{:.3}, {:.3}], y [{:.3}, {:.3}]",
            lo.0, hi.0, lo.1, hi.1
        );
    }
    println!(
        "Camera extent: {:.4} ({} commands applied, {} failed)",
        summary.viewer.camera().extent,
        summary.applied,
        summary.failed
    );
    Ok(())
}
