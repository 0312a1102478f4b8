use crate::channel::command::MethodCall;
use crate::error::{Result, ViewerError};
use log::info;
use std::fs;
use std::path::Path;

/// Loads a command script: one JSON method call per line. Blank lines and
/// lines starting with `#` are skipped.
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<MethodCall>> {
    let path = path.as_ref();
    info!("Loading command script: {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

pub fn parse_script(content: &str) -> Result<Vec<MethodCall>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| ViewerError::Script { line: i + 1, source })
        })
        .collect()
}
