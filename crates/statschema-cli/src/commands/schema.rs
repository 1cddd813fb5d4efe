//! Schema command: interpret an app's schema and export achievement data.

use std::path::Path;

use anyhow::{Context, Result};
use statschema::{export_achievement_data, generate_achievement_data_json};

use crate::cli::SourceArgs;
use crate::config::{Config, achievement_data_file_name};

pub fn run(
    app_id: u32,
    source: &SourceArgs,
    output: Option<&Path>,
    stdout: bool,
    config: &Config,
) -> Result<()> {
    let schema = super::load_schema(app_id, source, config)?;

    if stdout {
        println!("{}", generate_achievement_data_json(&schema)?);
        return Ok(());
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config.output_dir()?.join(achievement_data_file_name(app_id)),
    };

    export_achievement_data(&path, &schema)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    eprintln!(
        "{} achievements, {} stats",
        schema.achievements.len(),
        schema.stats.len()
    );
    println!("{}", serde_json::json!({ "success": path.display().to_string() }));
    Ok(())
}
