use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::{Cli, Command};
use config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("statschema=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Command::Dump { path, max_depth } => commands::dump::run(&path, max_depth),
        Command::Schema {
            app_id,
            source,
            output,
            stdout,
        } => commands::schema::run(app_id, &source, output.as_deref(), stdout, &config),
        Command::Get { app_id, id, source } => commands::get::run(app_id, &id, &source, &config),
        Command::Flags {
            permission,
            subject,
            increment_only,
        } => commands::flags::run(permission, increment_only, subject.into()),
    }
}
