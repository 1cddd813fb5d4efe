//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use statschema::Subject;

#[derive(Parser)]
#[command(name = "statschema")]
#[command(version)]
#[command(about = "Inspect cached game statistics schemas")]
pub struct Cli {
    /// Config file (defaults to <config dir>/statschema/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the tree of a binary KeyValue document
    Dump {
        /// Document to decode
        path: PathBuf,

        /// Stop descending below this depth
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Interpret an app's schema and write its achievement data
    Schema {
        app_id: u32,

        #[command(flatten)]
        source: SourceArgs,

        /// Output file (defaults to <output_dir>/<app_id>_achievement_data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Show a single achievement or stat
    Get {
        app_id: u32,

        /// Achievement or stat id
        id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compute descriptor flags for a permission value
    Flags {
        #[arg(allow_negative_numbers = true)]
        permission: i32,

        #[arg(long, value_enum, default_value_t = SubjectArg::Stat)]
        subject: SubjectArg,

        #[arg(long)]
        increment_only: bool,
    },
}

/// Where schema and live values come from
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Game client install root
    #[arg(long, env = "STEAM_PATH")]
    pub steam_path: Option<PathBuf>,

    /// Read the schema from this file instead of the install
    #[arg(long)]
    pub schema_file: Option<PathBuf>,

    /// JSON snapshot of live stat values
    #[arg(long)]
    pub live: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubjectArg {
    Achievement,
    Stat,
}

impl From<SubjectArg> for Subject {
    fn from(arg: SubjectArg) -> Self {
        match arg {
            SubjectArg::Achievement => Subject::Achievement,
            SubjectArg::Stat => Subject::Stat,
        }
    }
}
