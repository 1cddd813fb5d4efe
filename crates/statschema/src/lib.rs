//! # statschema
//!
//! Reader for cached game statistics schemas.
//!
//! This crate provides:
//! - A decoder for the binary KeyValue document format
//! - A lenient node tree with case-insensitive lookup and value coercion
//! - Interpretation of `UserGameStatsSchema` documents into achievement and
//!   stat descriptors, across both the typed and the structural conventions
//! - Permission flag computation
//! - JSON export of the interpreted schema

pub mod error;
pub mod export;
pub mod keyvalue;
pub mod schema;
pub mod source;

pub use error::{Error, FormatError, Result};
pub use export::{
    AchievementDataDocument, export_achievement_data, format_entry, generate_achievement_data_json,
};
pub use keyvalue::{KeyValue, KeyValueType, MAX_DEPTH, Value};
pub use schema::{
    AchievementDescriptor, AchievementSnapshot, DisplayAttribute, LiveSnapshot, LiveStats,
    NoLiveStats, StatDescriptor, StatFlags, StatKind, StatType, StatValue, StatsSchema, Subject,
    classify,
};
pub use source::{SchemaSource, SteamInstall, schema_file_name};
