//! JSON achievement data documents

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use tracing::info;

use crate::error::Result;
use crate::schema::{AchievementDescriptor, StatDescriptor, StatValue, StatsSchema};

/// Achievement entry of the list document
#[derive(Debug, Clone, Serialize)]
pub struct AchievementJson {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "iconNormal")]
    pub icon_normal: String,
    #[serde(rename = "iconLocked")]
    pub icon_locked: String,
    pub permission: i32,
    pub hidden: bool,
    pub achieved: bool,
    pub percent: f32,
    pub protected_achievement: bool,
    pub flags: String,
}

impl From<&AchievementDescriptor> for AchievementJson {
    fn from(a: &AchievementDescriptor) -> Self {
        Self {
            id: a.id.clone(),
            name: a.name.clone(),
            description: a.description.clone(),
            icon_normal: a.icon_normal.clone(),
            icon_locked: a.icon_locked.clone(),
            permission: a.permission,
            hidden: a.hidden,
            achieved: a.achieved,
            percent: a.percent,
            protected_achievement: a.is_protected(),
            flags: a.flags.describe(),
        }
    }
}

/// Stat entry of the list document
#[derive(Debug, Clone, Serialize)]
pub struct StatJson {
    pub id: String,
    pub name: String,
    pub stat_type: &'static str,
    pub permission: i32,
    pub value: StatValue,
    pub increment_only: bool,
    pub protected_stat: bool,
    pub flags: String,
}

impl From<&StatDescriptor> for StatJson {
    fn from(s: &StatDescriptor) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            stat_type: s.kind.as_str(),
            permission: s.permission,
            value: s.value,
            increment_only: s.increment_only,
            protected_stat: s.is_protected(),
            flags: s.flags.describe(),
        }
    }
}

/// Every achievement and stat of one app
#[derive(Debug, Clone, Serialize)]
pub struct AchievementDataDocument {
    pub achievements: Vec<AchievementJson>,
    pub stats: Vec<StatJson>,
}

impl From<&StatsSchema> for AchievementDataDocument {
    fn from(schema: &StatsSchema) -> Self {
        Self {
            achievements: schema.achievements.iter().map(AchievementJson::from).collect(),
            stats: schema.stats.iter().map(StatJson::from).collect(),
        }
    }
}

/// Pretty-printed list document
pub fn generate_achievement_data_json(schema: &StatsSchema) -> Result<String> {
    let document = AchievementDataDocument::from(schema);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Write the list document to `path`, creating parent directories
pub fn export_achievement_data<P: AsRef<Path>>(path: P, schema: &StatsSchema) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = generate_achievement_data_json(schema)?;
    fs::write(path, content)?;

    info!(
        "Exported {} achievements and {} stats to {}",
        schema.achievements.len(),
        schema.stats.len(),
        path.display()
    );
    Ok(())
}

/// Detailed object for a single achievement or stat.
///
/// Achievements are searched first. Returns `None` when nothing matches `id`.
pub fn format_entry(schema: &StatsSchema, id: &str) -> Option<JsonValue> {
    if let Some(a) = schema.find_achievement(id) {
        return Some(json!({
            "type": "achievement",
            "id": a.id,
            "name": a.name,
            "description": a.description,
            "iconNormal": a.icon_normal,
            "iconLocked": a.icon_locked,
            "permission": a.permission,
            "hidden": a.hidden,
            "achieved": a.achieved,
            "percent": a.percent,
            "protected": a.is_protected(),
            "flags": a.flags.describe()
        }));
    }

    let s = schema.find_stat(id)?;
    Some(json!({
        "type": "stat",
        "id": s.id,
        "name": s.name,
        "stat_type": s.kind.as_str(),
        "permission": s.permission,
        "min_value": s.min_value,
        "max_value": s.max_value,
        "default_value": s.default_value,
        "value": s.value,
        "increment_only": s.increment_only,
        "protected": s.is_protected(),
        "flags": s.flags.describe()
    }))
}
