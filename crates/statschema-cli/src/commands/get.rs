//! Get command: print one achievement or stat as JSON.

use anyhow::{Result, bail};
use statschema::format_entry;

use crate::cli::SourceArgs;
use crate::config::Config;

pub fn run(app_id: u32, id: &str, source: &SourceArgs, config: &Config) -> Result<()> {
    let schema = super::load_schema(app_id, source, config)?;

    let Some(entry) = format_entry(&schema, id) else {
        bail!("No achievement or stat with id {:?} in app {}", id, app_id);
    };

    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}
