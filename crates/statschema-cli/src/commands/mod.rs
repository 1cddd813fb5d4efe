//! CLI command implementations.

pub mod dump;
pub mod flags;
pub mod get;
pub mod schema;

use std::path::PathBuf;

use anyhow::{Context, Result};
use statschema::{LiveSnapshot, NoLiveStats, SchemaSource, StatsSchema, SteamInstall};
use tracing::debug;

use crate::cli::SourceArgs;
use crate::config::Config;

/// A schema document given directly on the command line
struct SchemaFile(PathBuf);

impl SchemaSource for SchemaFile {
    fn schema_path(&self, _app_id: u32) -> statschema::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Resolve the schema source and live values, then interpret the schema
pub(crate) fn load_schema(app_id: u32, args: &SourceArgs, config: &Config) -> Result<StatsSchema> {
    let source: Box<dyn SchemaSource> = if let Some(path) = &args.schema_file {
        Box::new(SchemaFile(path.clone()))
    } else if let Some(root) = args.steam_path.as_ref().or(config.steam_path.as_ref()) {
        Box::new(SteamInstall::new(root))
    } else {
        Box::new(SteamInstall::locate().context("Pass --steam-path or set steam_path in config")?)
    };

    let schema = match &args.live {
        Some(path) => {
            let live = LiveSnapshot::load_from_path(path)
                .with_context(|| format!("Failed to load live snapshot {}", path.display()))?;
            StatsSchema::load(source.as_ref(), app_id, &live)
        }
        None => {
            debug!("No live snapshot given, using schema defaults");
            StatsSchema::load(source.as_ref(), app_id, &NoLiveStats)
        }
    }
    .with_context(|| format!("Failed to load schema for app {}", app_id))?;

    Ok(schema)
}
